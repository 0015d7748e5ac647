// src/db/dashboard_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::dashboard::{ApplicationStatusBreakdown, LeadStatusBreakdown, UniversityStudentCount},
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn count_table(&self, table: &str) -> Result<i64, AppError> {
        // Tabelas fixas, nunca entrada do usuário
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn leads_by_status(&self) -> Result<LeadStatusBreakdown, AppError> {
        let breakdown = sqlx::query_as::<_, LeadStatusBreakdown>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = 'new')       AS "new",
                COUNT(*) FILTER (WHERE status = 'contacted') AS contacted,
                COUNT(*) FILTER (WHERE status = 'qualified') AS qualified,
                COUNT(*) FILTER (WHERE status = 'converted') AS converted,
                COUNT(*) FILTER (WHERE status = 'lost')      AS lost
            FROM leads
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(breakdown)
    }

    pub async fn applications_by_status(&self) -> Result<ApplicationStatusBreakdown, AppError> {
        let breakdown = sqlx::query_as::<_, ApplicationStatusBreakdown>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = 'draft')        AS draft,
                COUNT(*) FILTER (WHERE status = 'submitted')    AS submitted,
                COUNT(*) FILTER (WHERE status = 'under_review') AS under_review,
                COUNT(*) FILTER (WHERE status = 'approved')     AS approved,
                COUNT(*) FILTER (WHERE status = 'rejected')     AS rejected,
                COUNT(*) FILTER (WHERE status = 'enrolled')     AS enrolled
            FROM applications
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(breakdown)
    }

    pub async fn students_by_university(&self) -> Result<Vec<UniversityStudentCount>, AppError> {
        let counts = sqlx::query_as::<_, UniversityStudentCount>(
            r#"
            SELECT
                u.id   AS university_id,
                u.name AS university_name,
                COUNT(s.id) AS student_count
            FROM universities u
            LEFT JOIN students s ON s.university_id = u.id
            GROUP BY u.id, u.name
            ORDER BY student_count DESC, u.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }

    pub async fn total_commission_amount(&self) -> Result<Decimal, AppError> {
        let total: Decimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(commission_amount), 0) FROM commissions")
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }
}
