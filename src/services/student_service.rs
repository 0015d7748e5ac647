// src/services/student_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ApplicationRepository, StudentRepository},
    middleware::scope::AccessScope,
    models::pipeline::{ApplicationStatus, EnrollStudentPayload, Student, UpdateStudentPayload},
};

#[derive(Clone)]
pub struct StudentService {
    repo: StudentRepository,
    application_repo: ApplicationRepository,
    pool: PgPool,
}

impl StudentService {
    pub fn new(
        repo: StudentRepository,
        application_repo: ApplicationRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            repo,
            application_repo,
            pool,
        }
    }

    pub async fn list(&self, scope: &AccessScope) -> Result<Vec<Student>, AppError> {
        self.repo.list(scope.university_filter()).await
    }

    /// Matrícula: cria o estudante E promove a application de origem para
    /// `enrolled` numa única transação. Ou os dois efeitos acontecem, ou
    /// nenhum; não existe o estado intermediário "estudante criado mas
    /// application ainda approved".
    pub async fn enroll(
        &self,
        scope: &AccessScope,
        payload: &EnrollStudentPayload,
    ) -> Result<Student, AppError> {
        let mut tx = self.pool.begin().await?;

        // FOR UPDATE: segura a application até o commit, para que duas
        // matrículas simultâneas da mesma application não passem ambas
        // pela checagem de status.
        let application = self
            .application_repo
            .get_by_id_for_update(&mut *tx, payload.application_id)
            .await?
            .ok_or(AppError::ReferenceNotFound("Application"))?;

        if !scope.can_see_university(application.university_id) {
            return Err(AppError::Forbidden);
        }

        // Pré-condição de matrícula: só applications aprovadas
        if application.status != ApplicationStatus::Approved {
            return Err(AppError::PreconditionFailed(format!(
                "Apenas applications aprovadas podem gerar matrícula (status atual: {}).",
                application.status.as_str()
            )));
        }

        let assigned = scope
            .stamped_consultant()
            .or(application.assigned_consultant);

        let student = self
            .repo
            .insert_from_application(
                &mut *tx,
                &application,
                payload.enrollment_date,
                payload.expected_graduation,
                &payload.documents,
                assigned,
            )
            .await?;

        // Única transição automática do pipeline: approved -> enrolled
        self.application_repo
            .set_status(&mut *tx, application.id, ApplicationStatus::Enrolled)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "🎓 Estudante {} matriculado (application {}).",
            student.id,
            application.id
        );
        Ok(student)
    }

    pub async fn update(
        &self,
        scope: &AccessScope,
        id: Uuid,
        payload: &UpdateStudentPayload,
    ) -> Result<Student, AppError> {
        let existing = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(AppError::ReferenceNotFound("Estudante"))?;

        if !scope.can_see_university(existing.university_id) {
            return Err(AppError::Forbidden);
        }

        self.repo
            .update(id, payload)
            .await?
            .ok_or(AppError::ReferenceNotFound("Estudante"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::ReferenceNotFound("Estudante"));
        }
        Ok(())
    }
}
