// src/services/catalog_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    middleware::scope::AccessScope,
    models::catalog::{
        College, CollegePayload, Course, CoursePayload, University, UniversityPayload,
    },
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    // --- UNIVERSIDADES ---

    pub async fn list_universities(
        &self,
        scope: &AccessScope,
    ) -> Result<Vec<University>, AppError> {
        self.repo.list_universities(scope.university_filter()).await
    }

    pub async fn create_university(
        &self,
        payload: &UniversityPayload,
    ) -> Result<University, AppError> {
        check_percentage(payload.commission_percentage)?;
        self.repo.create_university(payload).await
    }

    pub async fn update_university(
        &self,
        id: Uuid,
        payload: &UniversityPayload,
    ) -> Result<University, AppError> {
        check_percentage(payload.commission_percentage)?;
        self.repo
            .update_university(id, payload)
            .await?
            .ok_or(AppError::ReferenceNotFound("Universidade"))
    }

    pub async fn delete_university(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_university(id).await?;
        if deleted == 0 {
            return Err(AppError::ReferenceNotFound("Universidade"));
        }
        Ok(())
    }

    // --- COLLEGES ---

    pub async fn list_colleges(&self, scope: &AccessScope) -> Result<Vec<College>, AppError> {
        self.repo.list_colleges(scope.university_filter()).await
    }

    pub async fn create_college(&self, payload: &CollegePayload) -> Result<College, AppError> {
        self.repo.create_college(payload).await
    }

    pub async fn update_college(
        &self,
        id: Uuid,
        payload: &CollegePayload,
    ) -> Result<College, AppError> {
        self.repo
            .update_college(id, payload)
            .await?
            .ok_or(AppError::ReferenceNotFound("College"))
    }

    pub async fn delete_college(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_college(id).await?;
        if deleted == 0 {
            return Err(AppError::ReferenceNotFound("College"));
        }
        Ok(())
    }

    // --- CURSOS ---

    pub async fn list_courses(&self, scope: &AccessScope) -> Result<Vec<Course>, AppError> {
        self.repo.list_courses(scope.university_filter()).await
    }

    pub async fn create_course(&self, payload: &CoursePayload) -> Result<Course, AppError> {
        check_percentage(payload.commission_percentage)?;
        self.repo.create_course(payload).await
    }

    pub async fn update_course(
        &self,
        id: Uuid,
        payload: &CoursePayload,
    ) -> Result<Course, AppError> {
        check_percentage(payload.commission_percentage)?;
        self.repo
            .update_course(id, payload)
            .await?
            .ok_or(AppError::ReferenceNotFound("Curso"))
    }

    pub async fn delete_course(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_course(id).await?;
        if deleted == 0 {
            return Err(AppError::ReferenceNotFound("Curso"));
        }
        Ok(())
    }
}

// Percentuais são números simples no intervalo [0, 100]
fn check_percentage(value: Decimal) -> Result<(), AppError> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err(AppError::PreconditionFailed(
            "O percentual de comissão deve estar entre 0 e 100.".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_bounds() {
        assert!(check_percentage(Decimal::ZERO).is_ok());
        assert!(check_percentage(Decimal::from(100)).is_ok());
        assert!(check_percentage(Decimal::from(-1)).is_err());
        assert!(check_percentage(Decimal::from(101)).is_err());
    }
}
