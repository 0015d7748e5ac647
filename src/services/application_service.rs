// src/services/application_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ApplicationRepository, CatalogRepository, LeadRepository},
    middleware::scope::AccessScope,
    models::pipeline::{
        Application, ApplicationStatus, CreateApplicationPayload, UpdateApplicationPayload,
    },
};

#[derive(Clone)]
pub struct ApplicationService {
    repo: ApplicationRepository,
    lead_repo: LeadRepository,
    catalog_repo: CatalogRepository,
}

impl ApplicationService {
    pub fn new(
        repo: ApplicationRepository,
        lead_repo: LeadRepository,
        catalog_repo: CatalogRepository,
    ) -> Self {
        Self {
            repo,
            lead_repo,
            catalog_repo,
        }
    }

    pub async fn list(&self, scope: &AccessScope) -> Result<Vec<Application>, AppError> {
        self.repo.list(scope.university_filter()).await
    }

    pub async fn create(
        &self,
        scope: &AccessScope,
        payload: &CreateApplicationPayload,
    ) -> Result<Application, AppError> {
        // 1. O lead de origem precisa existir (nada é gravado se não existir)
        let lead = self
            .lead_repo
            .get_by_id(payload.lead_id)
            .await?
            .ok_or(AppError::ReferenceNotFound("Lead"))?;

        // 2. ... estar acessível ao consultor ...
        if !scope.can_access_lead(lead.assigned_consultant) {
            return Err(AppError::Forbidden);
        }

        // 3. ... e estar qualificado ou convertido
        if !lead.status.can_source_application() {
            return Err(AppError::PreconditionFailed(format!(
                "Apenas leads qualificados ou convertidos podem originar uma application (status atual: {}).",
                lead.status.as_str()
            )));
        }

        if !scope.can_see_university(payload.university_id) {
            return Err(AppError::Forbidden);
        }

        // Uma application nunca nasce matriculada
        if payload.status == ApplicationStatus::Enrolled {
            return Err(AppError::PreconditionFailed(
                "Uma application não pode ser criada com status 'enrolled'.".into(),
            ));
        }

        self.check_course_linkage(payload.course_id, payload.college_id, payload.university_id)
            .await?;

        // Consultor que cria assume a application; senão ela herda o
        // responsável do lead.
        let assigned = scope.stamped_consultant().or(lead.assigned_consultant);

        // Identidade denormalizada: copiada do lead agora e nunca mais
        // ressincronizada.
        self.repo
            .create(
                lead.id,
                &lead.name,
                &lead.email,
                &lead.phone,
                payload.university_id,
                payload.college_id,
                payload.course_id,
                payload.status,
                payload.application_date,
                &payload.documents,
                assigned,
            )
            .await
    }

    pub async fn update(
        &self,
        scope: &AccessScope,
        id: Uuid,
        payload: &UpdateApplicationPayload,
    ) -> Result<Application, AppError> {
        let existing = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(AppError::ReferenceNotFound("Application"))?;

        if !scope.can_see_university(existing.university_id)
            || !scope.can_see_university(payload.university_id)
        {
            return Err(AppError::Forbidden);
        }

        if payload.status != existing.status {
            // `enrolled` só é atingível pela matrícula do estudante e
            // nenhuma edição reverte esse estado.
            if !existing.status.can_transition(payload.status) {
                return Err(AppError::InvalidTransition {
                    from: existing.status.as_str().into(),
                    to: payload.status.as_str().into(),
                });
            }
        }

        self.check_course_linkage(payload.course_id, payload.college_id, payload.university_id)
            .await?;

        self.repo
            .update(id, payload)
            .await?
            .ok_or(AppError::ReferenceNotFound("Application"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::ReferenceNotFound("Application"));
        }
        Ok(())
    }

    // O curso escolhido precisa pertencer ao college e à universidade
    // informados; selects em cascata no cliente não são confiáveis.
    async fn check_course_linkage(
        &self,
        course_id: Uuid,
        college_id: Uuid,
        university_id: Uuid,
    ) -> Result<(), AppError> {
        let course = self
            .catalog_repo
            .get_course(course_id)
            .await?
            .ok_or(AppError::ReferenceNotFound("Curso"))?;

        if course.college_id != college_id || course.university_id != university_id {
            return Err(AppError::PreconditionFailed(
                "O curso selecionado não pertence ao college/universidade informados.".into(),
            ));
        }
        Ok(())
    }
}
