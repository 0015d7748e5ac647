// src/db/catalog_repo.rs

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::catalog::{College, CollegePayload, Course, CoursePayload, University, UniversityPayload},
};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  UNIVERSIDADES
    // =========================================================================

    /// `filter = None` lista tudo; `Some(ids)` restringe às universidades
    /// atribuídas ao consultor (lista vazia devolve resultado vazio).
    pub async fn list_universities(
        &self,
        filter: Option<&[Uuid]>,
    ) -> Result<Vec<University>, AppError> {
        let universities = match filter {
            None => {
                sqlx::query_as::<_, University>("SELECT * FROM universities ORDER BY name ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(ids) => {
                sqlx::query_as::<_, University>(
                    "SELECT * FROM universities WHERE id = ANY($1) ORDER BY name ASC",
                )
                .bind(ids)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(universities)
    }

    pub async fn get_university(&self, id: Uuid) -> Result<Option<University>, AppError> {
        let university =
            sqlx::query_as::<_, University>("SELECT * FROM universities WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(university)
    }

    pub async fn create_university(
        &self,
        payload: &UniversityPayload,
    ) -> Result<University, AppError> {
        let university = sqlx::query_as::<_, University>(
            r#"
            INSERT INTO universities (
                name, logo_url, website_url, country_id, state_id, city_id, address,
                recognitions, medium_of_teaching, course_duration, eligibility_criteria,
                neet_required, currently_enrolled_students, intake_period,
                youtube_video_url, faculty_ids, fees_structure, commission_percentage,
                assigned_consultants
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                    $16, $17, $18, $19)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.logo_url)
        .bind(&payload.website_url)
        .bind(payload.country_id)
        .bind(payload.state_id)
        .bind(payload.city_id)
        .bind(&payload.address)
        .bind(&payload.recognitions)
        .bind(&payload.medium_of_teaching)
        .bind(&payload.course_duration)
        .bind(&payload.eligibility_criteria)
        .bind(payload.neet_required)
        .bind(payload.currently_enrolled_students)
        .bind(payload.intake_period)
        .bind(&payload.youtube_video_url)
        .bind(&payload.faculty_ids)
        .bind(Json(&payload.fees_structure))
        .bind(payload.commission_percentage)
        .bind(&payload.assigned_consultants)
        .fetch_one(&self.pool)
        .await?;
        Ok(university)
    }

    pub async fn update_university(
        &self,
        id: Uuid,
        payload: &UniversityPayload,
    ) -> Result<Option<University>, AppError> {
        let university = sqlx::query_as::<_, University>(
            r#"
            UPDATE universities SET
                name = $2, logo_url = $3, website_url = $4, country_id = $5,
                state_id = $6, city_id = $7, address = $8, recognitions = $9,
                medium_of_teaching = $10, course_duration = $11,
                eligibility_criteria = $12, neet_required = $13,
                currently_enrolled_students = $14, intake_period = $15,
                youtube_video_url = $16, faculty_ids = $17, fees_structure = $18,
                commission_percentage = $19, assigned_consultants = $20,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.logo_url)
        .bind(&payload.website_url)
        .bind(payload.country_id)
        .bind(payload.state_id)
        .bind(payload.city_id)
        .bind(&payload.address)
        .bind(&payload.recognitions)
        .bind(&payload.medium_of_teaching)
        .bind(&payload.course_duration)
        .bind(&payload.eligibility_criteria)
        .bind(payload.neet_required)
        .bind(payload.currently_enrolled_students)
        .bind(payload.intake_period)
        .bind(&payload.youtube_video_url)
        .bind(&payload.faculty_ids)
        .bind(Json(&payload.fees_structure))
        .bind(payload.commission_percentage)
        .bind(&payload.assigned_consultants)
        .fetch_optional(&self.pool)
        .await?;
        Ok(university)
    }

    pub async fn delete_university(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM universities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  COLLEGES
    // =========================================================================

    pub async fn list_colleges(&self, filter: Option<&[Uuid]>) -> Result<Vec<College>, AppError> {
        let colleges = match filter {
            None => {
                sqlx::query_as::<_, College>("SELECT * FROM colleges ORDER BY name ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(ids) => {
                sqlx::query_as::<_, College>(
                    "SELECT * FROM colleges WHERE university_id = ANY($1) ORDER BY name ASC",
                )
                .bind(ids)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(colleges)
    }

    pub async fn create_college(&self, payload: &CollegePayload) -> Result<College, AppError> {
        let college = sqlx::query_as::<_, College>(
            r#"
            INSERT INTO colleges (university_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(payload.university_id)
        .bind(&payload.name)
        .bind(&payload.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(college)
    }

    pub async fn update_college(
        &self,
        id: Uuid,
        payload: &CollegePayload,
    ) -> Result<Option<College>, AppError> {
        let college = sqlx::query_as::<_, College>(
            r#"
            UPDATE colleges
            SET university_id = $2, name = $3, description = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.university_id)
        .bind(&payload.name)
        .bind(&payload.description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(college)
    }

    pub async fn delete_college(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM colleges WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  CURSOS
    // =========================================================================

    pub async fn list_courses(&self, filter: Option<&[Uuid]>) -> Result<Vec<Course>, AppError> {
        let courses = match filter {
            None => {
                sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY name ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(ids) => {
                sqlx::query_as::<_, Course>(
                    "SELECT * FROM courses WHERE university_id = ANY($1) ORDER BY name ASC",
                )
                .bind(ids)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(courses)
    }

    pub async fn get_course(&self, id: Uuid) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(course)
    }

    pub async fn create_course(&self, payload: &CoursePayload) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (
                college_id, university_id, name, duration, level,
                tuition_fee, application_fee, commission_percentage
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(payload.college_id)
        .bind(payload.university_id)
        .bind(&payload.name)
        .bind(&payload.duration)
        .bind(payload.level)
        .bind(payload.tuition_fee)
        .bind(payload.application_fee)
        .bind(payload.commission_percentage)
        .fetch_one(&self.pool)
        .await?;
        Ok(course)
    }

    pub async fn update_course(
        &self,
        id: Uuid,
        payload: &CoursePayload,
    ) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses SET
                college_id = $2, university_id = $3, name = $4, duration = $5,
                level = $6, tuition_fee = $7, application_fee = $8,
                commission_percentage = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.college_id)
        .bind(payload.university_id)
        .bind(&payload.name)
        .bind(&payload.duration)
        .bind(payload.level)
        .bind(payload.tuition_fee)
        .bind(payload.application_fee)
        .bind(payload.commission_percentage)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    pub async fn delete_course(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
