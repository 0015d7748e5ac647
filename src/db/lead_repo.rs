// src/db/lead_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::pipeline::{Lead, LeadPayload},
};

#[derive(Clone)]
pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// `consultant = None` lista tudo (super_admin); `Some(id)` só os leads
    /// atribuídos àquele consultor.
    pub async fn list(&self, consultant: Option<Uuid>) -> Result<Vec<Lead>, AppError> {
        let leads = match consultant {
            None => {
                sqlx::query_as::<_, Lead>("SELECT * FROM leads ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Lead>(
                    "SELECT * FROM leads WHERE assigned_consultant = $1 ORDER BY created_at DESC",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(leads)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Lead>, AppError> {
        let lead = sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(lead)
    }

    pub async fn create(
        &self,
        payload: &LeadPayload,
        assigned_consultant: Option<Uuid>,
    ) -> Result<Lead, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (
                name, email, phone, country_id, state_id, city_id,
                interested_countries, interested_courses, notes, status,
                assigned_consultant
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(payload.country_id)
        .bind(payload.state_id)
        .bind(payload.city_id)
        .bind(&payload.interested_countries)
        .bind(&payload.interested_courses)
        .bind(&payload.notes)
        .bind(payload.status)
        .bind(assigned_consultant)
        .fetch_one(&self.pool)
        .await?;
        Ok(lead)
    }

    /// Usado pela importação de CSV: campos resolvidos linha a linha.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_imported(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        country_id: Uuid,
        interested_countries: &[String],
        interested_courses: &[String],
        notes: Option<&str>,
        assigned_consultant: Option<Uuid>,
    ) -> Result<Lead, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (
                name, email, phone, country_id, interested_countries,
                interested_courses, notes, status, assigned_consultant
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'new', $8)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(country_id)
        .bind(interested_countries)
        .bind(interested_courses)
        .bind(notes)
        .bind(assigned_consultant)
        .fetch_one(&self.pool)
        .await?;
        Ok(lead)
    }

    pub async fn update(&self, id: Uuid, payload: &LeadPayload) -> Result<Option<Lead>, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            UPDATE leads SET
                name = $2, email = $3, phone = $4, country_id = $5, state_id = $6,
                city_id = $7, interested_countries = $8, interested_courses = $9,
                notes = $10, status = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(payload.country_id)
        .bind(payload.state_id)
        .bind(payload.city_id)
        .bind(&payload.interested_countries)
        .bind(&payload.interested_courses)
        .bind(&payload.notes)
        .bind(payload.status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(lead)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        // Ação direta do admin, sem cascata sobre applications existentes
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
