// src/db/enquiry_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::enquiry::{Enquiry, EnquiryPayload},
};

#[derive(Clone)]
pub struct EnquiryRepository {
    pool: PgPool,
}

impl EnquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &EnquiryPayload) -> Result<Enquiry, AppError> {
        let enquiry = sqlx::query_as::<_, Enquiry>(
            r#"
            INSERT INTO enquiries (name, email, phone, message, interested_country)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.message)
        .bind(&payload.interested_country)
        .fetch_one(&self.pool)
        .await?;
        Ok(enquiry)
    }

    pub async fn list(&self) -> Result<Vec<Enquiry>, AppError> {
        let enquiries =
            sqlx::query_as::<_, Enquiry>("SELECT * FROM enquiries ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(enquiries)
    }
}
