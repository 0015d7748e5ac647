// src/handlers/public.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireRole, SuperAdmin},
    models::enquiry::EnquiryPayload,
};

// Endpoints do site institucional: leitura sem autenticação e o
// formulário de contato.

// GET /api/public/countries
pub async fn list_countries(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let countries = app_state.location_repo.list_countries().await?;
    Ok((StatusCode::OK, Json(countries)))
}

// GET /api/public/universities
pub async fn list_universities(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    // Sem escopo: o site mostra o catálogo completo
    let universities = app_state
        .catalog_service
        .list_universities(&crate::middleware::scope::AccessScope::Full)
        .await?;
    Ok((StatusCode::OK, Json(universities)))
}

// POST /api/enquiries (público)
pub async fn create_enquiry(
    State(app_state): State<AppState>,
    Json(payload): Json<EnquiryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let enquiry = app_state.enquiry_repo.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(enquiry)))
}

// GET /api/enquiries (admin)
pub async fn list_enquiries(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
) -> Result<impl IntoResponse, AppError> {
    let enquiries = app_state.enquiry_repo.list().await?;
    Ok((StatusCode::OK, Json(enquiries)))
}
