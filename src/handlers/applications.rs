// src/handlers/applications.rs

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
    models::pipeline::{Application, CreateApplicationPayload, UpdateApplicationPayload},
};

// GET /api/applications
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = "Applications",
    responses((status = 200, description = "Applications visíveis ao usuário", body = Vec<Application>)),
    security(("api_jwt" = []))
)]
pub async fn list_applications(
    State(app_state): State<AppState>,
    scope: AccessScope,
) -> Result<impl IntoResponse, AppError> {
    let applications = app_state.application_service.list(&scope).await?;
    Ok((StatusCode::OK, Json(applications)))
}

// POST /api/applications
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "Applications",
    request_body = CreateApplicationPayload,
    responses(
        (status = 201, description = "Application criada", body = Application),
        (status = 404, description = "Lead ou curso não encontrado"),
        (status = 422, description = "Lead não está qualificado/convertido")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_application(
    State(app_state): State<AppState>,
    scope: AccessScope,
    Json(payload): Json<CreateApplicationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let application = app_state
        .application_service
        .create(&scope, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

// PUT /api/applications/{id}
#[utoipa::path(
    put,
    path = "/api/applications/{id}",
    tag = "Applications",
    request_body = UpdateApplicationPayload,
    params(("id" = Uuid, Path, description = "ID da application")),
    responses(
        (status = 200, description = "Application atualizada", body = Application),
        (status = 404, description = "Application não encontrada"),
        (status = 422, description = "Transição de status inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_application(
    State(app_state): State<AppState>,
    scope: AccessScope,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApplicationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let application = app_state
        .application_service
        .update(&scope, id, &payload)
        .await?;
    Ok((StatusCode::OK, Json(application)))
}

// DELETE /api/applications/{id}
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = "Applications",
    params(("id" = Uuid, Path, description = "ID da application")),
    responses(
        (status = 204, description = "Application removida"),
        (status = 404, description = "Application não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_application(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.application_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
