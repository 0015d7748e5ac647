// src/db/metadata_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::catalog::{
        Faculty, FacultyPayload, Medium, NamePayload, Recognition, Stream, StreamPayload,
    },
};

// Metadados do catálogo: faculties, recognitions, mediums e streams.
// São registros simples de apoio, sem invariantes além do nome.
#[derive(Clone)]
pub struct MetadataRepository {
    pool: PgPool,
}

impl MetadataRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- FACULTIES ---

    pub async fn list_faculties(&self) -> Result<Vec<Faculty>, AppError> {
        let faculties =
            sqlx::query_as::<_, Faculty>("SELECT * FROM faculties ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(faculties)
    }

    pub async fn create_faculty(&self, payload: &FacultyPayload) -> Result<Faculty, AppError> {
        let faculty = sqlx::query_as::<_, Faculty>(
            r#"
            INSERT INTO faculties (name, designation, department, experience, profile_image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.designation)
        .bind(&payload.department)
        .bind(&payload.experience)
        .bind(&payload.profile_image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(faculty)
    }

    pub async fn update_faculty(
        &self,
        id: Uuid,
        payload: &FacultyPayload,
    ) -> Result<Option<Faculty>, AppError> {
        let faculty = sqlx::query_as::<_, Faculty>(
            r#"
            UPDATE faculties
            SET name = $2, designation = $3, department = $4, experience = $5,
                profile_image_url = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.designation)
        .bind(&payload.department)
        .bind(&payload.experience)
        .bind(&payload.profile_image_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(faculty)
    }

    pub async fn delete_faculty(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // --- RECOGNITIONS ---

    pub async fn list_recognitions(&self) -> Result<Vec<Recognition>, AppError> {
        let recognitions =
            sqlx::query_as::<_, Recognition>("SELECT * FROM recognitions ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(recognitions)
    }

    pub async fn create_recognition(&self, payload: &NamePayload) -> Result<Recognition, AppError> {
        let recognition = sqlx::query_as::<_, Recognition>(
            "INSERT INTO recognitions (name) VALUES ($1) RETURNING *",
        )
        .bind(&payload.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(recognition)
    }

    pub async fn delete_recognition(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM recognitions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // --- MEDIUMS ---

    pub async fn list_mediums(&self) -> Result<Vec<Medium>, AppError> {
        let mediums = sqlx::query_as::<_, Medium>("SELECT * FROM mediums ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(mediums)
    }

    pub async fn create_medium(&self, payload: &NamePayload) -> Result<Medium, AppError> {
        let medium =
            sqlx::query_as::<_, Medium>("INSERT INTO mediums (name) VALUES ($1) RETURNING *")
                .bind(&payload.name)
                .fetch_one(&self.pool)
                .await?;
        Ok(medium)
    }

    pub async fn delete_medium(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM mediums WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // --- STREAMS ---

    pub async fn list_streams(&self) -> Result<Vec<Stream>, AppError> {
        let streams = sqlx::query_as::<_, Stream>("SELECT * FROM streams ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(streams)
    }

    pub async fn create_stream(&self, payload: &StreamPayload) -> Result<Stream, AppError> {
        let stream = sqlx::query_as::<_, Stream>(
            "INSERT INTO streams (name, university_ids) VALUES ($1, $2) RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.university_ids)
        .fetch_one(&self.pool)
        .await?;
        Ok(stream)
    }

    pub async fn update_stream(
        &self,
        id: Uuid,
        payload: &StreamPayload,
    ) -> Result<Option<Stream>, AppError> {
        let stream = sqlx::query_as::<_, Stream>(
            r#"
            UPDATE streams
            SET name = $2, university_ids = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.university_ids)
        .fetch_optional(&self.pool)
        .await?;
        Ok(stream)
    }

    pub async fn delete_stream(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM streams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
