// src/db/application_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::pipeline::{Application, ApplicationStatus, UpdateApplicationPayload},
};

#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: Option<&[Uuid]>) -> Result<Vec<Application>, AppError> {
        let applications = match filter {
            None => {
                sqlx::query_as::<_, Application>(
                    "SELECT * FROM applications ORDER BY application_date DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
            Some(ids) => {
                sqlx::query_as::<_, Application>(
                    r#"
                    SELECT * FROM applications
                    WHERE university_id = ANY($1)
                    ORDER BY application_date DESC
                    "#,
                )
                .bind(ids)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(applications)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Application>, AppError> {
        let application =
            sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(application)
    }

    /// Versão transacional com lock: usada pela matrícula para que a
    /// checagem de `approved` e a promoção para `enrolled` sejam atômicas.
    pub async fn get_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Application>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let application = sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(application)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        lead_id: Uuid,
        student_name: &str,
        student_email: &str,
        student_phone: &str,
        university_id: Uuid,
        college_id: Uuid,
        course_id: Uuid,
        status: ApplicationStatus,
        application_date: NaiveDate,
        documents: &[String],
        assigned_consultant: Option<Uuid>,
    ) -> Result<Application, AppError> {
        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (
                lead_id, student_name, student_email, student_phone,
                university_id, college_id, course_id, status, application_date,
                documents, assigned_consultant
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(lead_id)
        .bind(student_name)
        .bind(student_email)
        .bind(student_phone)
        .bind(university_id)
        .bind(college_id)
        .bind(course_id)
        .bind(status)
        .bind(application_date)
        .bind(documents)
        .bind(assigned_consultant)
        .fetch_one(&self.pool)
        .await?;
        Ok(application)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateApplicationPayload,
    ) -> Result<Option<Application>, AppError> {
        let application = sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications SET
                university_id = $2, college_id = $3, course_id = $4, status = $5,
                application_date = $6, documents = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.university_id)
        .bind(payload.college_id)
        .bind(payload.course_id)
        .bind(payload.status)
        .bind(payload.application_date)
        .bind(&payload.documents)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    /// Promoção de status feita pelo sistema (approved -> enrolled),
    /// dentro da mesma transação que insere o estudante.
    pub async fn set_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
