// src/db/student_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::pipeline::{Application, Student, UpdateStudentPayload},
};
use chrono::NaiveDate;

#[derive(Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: Option<&[Uuid]>) -> Result<Vec<Student>, AppError> {
        let students = match filter {
            None => {
                sqlx::query_as::<_, Student>(
                    "SELECT * FROM students ORDER BY enrollment_date DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
            Some(ids) => {
                sqlx::query_as::<_, Student>(
                    r#"
                    SELECT * FROM students
                    WHERE university_id = ANY($1)
                    ORDER BY enrollment_date DESC
                    "#,
                )
                .bind(ids)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(students)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(student)
    }

    /// Insere o estudante a partir da application aprovada. Executor
    /// genérico: roda na mesma transação que promove a application.
    pub async fn insert_from_application<'e, E>(
        &self,
        executor: E,
        application: &Application,
        enrollment_date: NaiveDate,
        expected_graduation: NaiveDate,
        documents: &[String],
        assigned_consultant: Option<Uuid>,
    ) -> Result<Student, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (
                application_id, lead_id, name, email, phone,
                university_id, college_id, course_id,
                enrollment_date, expected_graduation, documents, assigned_consultant
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(application.id)
        .bind(application.lead_id)
        .bind(&application.student_name)
        .bind(&application.student_email)
        .bind(&application.student_phone)
        .bind(application.university_id)
        .bind(application.college_id)
        .bind(application.course_id)
        .bind(enrollment_date)
        .bind(expected_graduation)
        .bind(documents)
        .bind(assigned_consultant)
        .fetch_one(executor)
        .await?;
        Ok(student)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateStudentPayload,
    ) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students SET
                enrollment_date = $2, expected_graduation = $3, documents = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.enrollment_date)
        .bind(payload.expected_graduation)
        .bind(&payload.documents)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
