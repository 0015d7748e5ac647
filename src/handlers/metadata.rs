// src/handlers/metadata.rs

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
    middleware::rbac::{RequireRole, SuperAdmin},
    models::catalog::{FacultyPayload, NamePayload, StreamPayload},
};

// Metadados do catálogo (faculties, recognitions, mediums, streams).
// Leitura para qualquer autenticado, escrita para o super admin.

// --- FACULTIES ---

pub async fn list_faculties(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let faculties = app_state.metadata_repo.list_faculties().await?;
    Ok((StatusCode::OK, Json(faculties)))
}

pub async fn create_faculty(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<FacultyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let faculty = app_state.metadata_repo.create_faculty(&payload).await?;
    Ok((StatusCode::CREATED, Json(faculty)))
}

pub async fn update_faculty(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FacultyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let faculty = app_state
        .metadata_repo
        .update_faculty(id, &payload)
        .await?
        .ok_or(AppError::ReferenceNotFound("Faculty"))?;
    Ok((StatusCode::OK, Json(faculty)))
}

pub async fn delete_faculty(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.metadata_repo.delete_faculty(id).await?;
    if deleted == 0 {
        return Err(AppError::ReferenceNotFound("Faculty"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- RECOGNITIONS ---

pub async fn list_recognitions(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let recognitions = app_state.metadata_repo.list_recognitions().await?;
    Ok((StatusCode::OK, Json(recognitions)))
}

pub async fn create_recognition(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<NamePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let recognition = app_state.metadata_repo.create_recognition(&payload).await?;
    Ok((StatusCode::CREATED, Json(recognition)))
}

pub async fn delete_recognition(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.metadata_repo.delete_recognition(id).await?;
    if deleted == 0 {
        return Err(AppError::ReferenceNotFound("Recognition"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- MEDIUMS ---

pub async fn list_mediums(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mediums = app_state.metadata_repo.list_mediums().await?;
    Ok((StatusCode::OK, Json(mediums)))
}

pub async fn create_medium(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<NamePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let medium = app_state.metadata_repo.create_medium(&payload).await?;
    Ok((StatusCode::CREATED, Json(medium)))
}

pub async fn delete_medium(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.metadata_repo.delete_medium(id).await?;
    if deleted == 0 {
        return Err(AppError::ReferenceNotFound("Medium"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- STREAMS ---

pub async fn list_streams(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let streams = app_state.metadata_repo.list_streams().await?;
    Ok((StatusCode::OK, Json(streams)))
}

pub async fn create_stream(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<StreamPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let stream = app_state.metadata_repo.create_stream(&payload).await?;
    Ok((StatusCode::CREATED, Json(stream)))
}

pub async fn update_stream(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StreamPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let stream = app_state
        .metadata_repo
        .update_stream(id, &payload)
        .await?
        .ok_or(AppError::ReferenceNotFound("Stream"))?;
    Ok((StatusCode::OK, Json(stream)))
}

pub async fn delete_stream(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.metadata_repo.delete_stream(id).await?;
    if deleted == 0 {
        return Err(AppError::ReferenceNotFound("Stream"));
    }
    Ok(StatusCode::NO_CONTENT)
}
