// src/handlers/catalog.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{RequireRole, SuperAdmin},
        scope::AccessScope,
    },
    models::catalog::{CollegePayload, CoursePayload, UniversityPayload},
};

// Catálogo acadêmico. Consultores enxergam apenas as universidades
// atribuídas (e colleges/cursos delas, transitividade por university_id);
// escrita é sempre do super admin.

// --- UNIVERSIDADES ---

pub async fn list_universities(
    State(app_state): State<AppState>,
    scope: AccessScope,
) -> Result<impl IntoResponse, AppError> {
    let universities = app_state.catalog_service.list_universities(&scope).await?;
    Ok((StatusCode::OK, Json(universities)))
}

pub async fn create_university(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<UniversityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let university = app_state.catalog_service.create_university(&payload).await?;
    Ok((StatusCode::CREATED, Json(university)))
}

pub async fn update_university(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UniversityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let university = app_state
        .catalog_service
        .update_university(id, &payload)
        .await?;
    Ok((StatusCode::OK, Json(university)))
}

pub async fn delete_university(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_university(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- COLLEGES ---

pub async fn list_colleges(
    State(app_state): State<AppState>,
    scope: AccessScope,
) -> Result<impl IntoResponse, AppError> {
    let colleges = app_state.catalog_service.list_colleges(&scope).await?;
    Ok((StatusCode::OK, Json(colleges)))
}

pub async fn create_college(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<CollegePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let college = app_state.catalog_service.create_college(&payload).await?;
    Ok((StatusCode::CREATED, Json(college)))
}

pub async fn update_college(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CollegePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let college = app_state.catalog_service.update_college(id, &payload).await?;
    Ok((StatusCode::OK, Json(college)))
}

pub async fn delete_college(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_college(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- CURSOS ---

pub async fn list_courses(
    State(app_state): State<AppState>,
    scope: AccessScope,
) -> Result<impl IntoResponse, AppError> {
    let courses = app_state.catalog_service.list_courses(&scope).await?;
    Ok((StatusCode::OK, Json(courses)))
}

pub async fn create_course(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<CoursePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let course = app_state.catalog_service.create_course(&payload).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn update_course(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CoursePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let course = app_state.catalog_service.update_course(id, &payload).await?;
    Ok((StatusCode::OK, Json(course)))
}

pub async fn delete_course(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
