// src/db/commission_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::commission::{Commission, CommissionSummary, NewCommission},
};

#[derive(Clone)]
pub struct CommissionRepository {
    pool: PgPool,
}

impl CommissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// `consultant = None` lista tudo; `Some(id)` só as comissões do consultor.
    pub async fn list(&self, consultant: Option<Uuid>) -> Result<Vec<Commission>, AppError> {
        let commissions = match consultant {
            None => {
                sqlx::query_as::<_, Commission>(
                    "SELECT * FROM commissions ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Commission>(
                    "SELECT * FROM commissions WHERE consultant_id = $1 ORDER BY created_at DESC",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(commissions)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Commission>, AppError> {
        let commission =
            sqlx::query_as::<_, Commission>("SELECT * FROM commissions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(commission)
    }

    /// Ids de estudantes que já possuem comissão (guarda de idempotência).
    pub async fn covered_student_ids(&self) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<Uuid> = sqlx::query_scalar("SELECT student_id FROM commissions")
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    /// Insere uma comissão planejada. Devolve `None` se outro processo
    /// cobriu o mesmo estudante no meio tempo (UNIQUE em student_id):
    /// a pré-checagem tem uma janela de corrida e o banco é a palavra final.
    pub async fn insert(&self, new: &NewCommission) -> Result<Option<Commission>, AppError> {
        let result = sqlx::query_as::<_, Commission>(
            r#"
            INSERT INTO commissions (
                student_id, application_id, consultant_id, course_id,
                tuition_fee, commission_percentage, commission_amount, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending')
            RETURNING *
            "#,
        )
        .bind(new.student_id)
        .bind(new.application_id)
        .bind(new.consultant_id)
        .bind(new.course_id)
        .bind(new.tuition_fee)
        .bind(new.commission_percentage)
        .bind(new.commission_amount)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(commission) => Ok(Some(commission)),
            Err(e) => {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return Ok(None);
                    }
                }
                Err(e.into())
            }
        }
    }

    /// pending -> paid, com carimbo de data. Só atualiza se ainda estiver
    /// pendente; a transição é de mão única.
    pub async fn mark_paid(&self, id: Uuid) -> Result<Option<Commission>, AppError> {
        let commission = sqlx::query_as::<_, Commission>(
            r#"
            UPDATE commissions
            SET status = 'paid', paid_date = CURRENT_DATE, updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(commission)
    }

    pub async fn summary(&self, consultant: Option<Uuid>) -> Result<CommissionSummary, AppError> {
        let summary = match consultant {
            None => {
                sqlx::query_as::<_, CommissionSummary>(
                    r#"
                    SELECT
                        COALESCE(SUM(commission_amount), 0) AS total,
                        COALESCE(SUM(commission_amount) FILTER (WHERE status = 'pending'), 0) AS pending,
                        COALESCE(SUM(commission_amount) FILTER (WHERE status = 'paid'), 0) AS paid
                    FROM commissions
                    "#,
                )
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, CommissionSummary>(
                    r#"
                    SELECT
                        COALESCE(SUM(commission_amount), 0) AS total,
                        COALESCE(SUM(commission_amount) FILTER (WHERE status = 'pending'), 0) AS pending,
                        COALESCE(SUM(commission_amount) FILTER (WHERE status = 'paid'), 0) AS paid
                    FROM commissions
                    WHERE consultant_id = $1
                    "#,
                )
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(summary)
    }
}
