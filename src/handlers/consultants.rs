// src/handlers/consultants.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireRole, SuperAdmin},
    models::auth::User,
};

// Gestão de consultores: área exclusiva do super admin.

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsultantPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "consultant@studybridge.com")]
    pub email: String,
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsultantPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignUniversitiesPayload {
    pub university_ids: Vec<Uuid>,
}

// GET /api/consultants
#[utoipa::path(
    get,
    path = "/api/consultants",
    tag = "Consultants",
    responses((status = 200, description = "Lista de consultores", body = Vec<User>)),
    security(("api_jwt" = []))
)]
pub async fn list_consultants(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
) -> Result<impl IntoResponse, AppError> {
    let consultants = app_state.user_repo.list_consultants().await?;
    Ok((StatusCode::OK, Json(consultants)))
}

// POST /api/consultants
// Pré-cadastro: nasce sem senha e com registered = false; o consultor
// reivindica a conta depois pelo fluxo de verificação de e-mail.
#[utoipa::path(
    post,
    path = "/api/consultants",
    tag = "Consultants",
    request_body = CreateConsultantPayload,
    responses(
        (status = 201, description = "Consultor pré-cadastrado", body = User),
        (status = 409, description = "E-mail já em uso")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_consultant(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<CreateConsultantPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let consultant = app_state
        .user_repo
        .create_consultant(&payload.email, &payload.name, payload.phone.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(consultant)))
}

// PUT /api/consultants/{id}
#[utoipa::path(
    put,
    path = "/api/consultants/{id}",
    tag = "Consultants",
    request_body = UpdateConsultantPayload,
    params(("id" = Uuid, Path, description = "ID do consultor")),
    responses(
        (status = 200, description = "Consultor atualizado", body = User),
        (status = 404, description = "Consultor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_consultant(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateConsultantPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let consultant = app_state
        .user_repo
        .update_consultant(id, &payload.name, payload.phone.as_deref())
        .await?
        .ok_or(AppError::ReferenceNotFound("Consultor"))?;
    Ok((StatusCode::OK, Json(consultant)))
}

// PUT /api/consultants/{id}/universities
// Define o conjunto de universidades visíveis para o consultor.
#[utoipa::path(
    put,
    path = "/api/consultants/{id}/universities",
    tag = "Consultants",
    request_body = AssignUniversitiesPayload,
    params(("id" = Uuid, Path, description = "ID do consultor")),
    responses(
        (status = 200, description = "Atribuições atualizadas", body = User),
        (status = 404, description = "Consultor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn assign_universities(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignUniversitiesPayload>,
) -> Result<impl IntoResponse, AppError> {
    let consultant = app_state
        .user_repo
        .set_assigned_universities(id, &payload.university_ids)
        .await?
        .ok_or(AppError::ReferenceNotFound("Consultor"))?;
    Ok((StatusCode::OK, Json(consultant)))
}

// DELETE /api/consultants/{id}
#[utoipa::path(
    delete,
    path = "/api/consultants/{id}",
    tag = "Consultants",
    params(("id" = Uuid, Path, description = "ID do consultor")),
    responses(
        (status = 204, description = "Consultor removido"),
        (status = 404, description = "Consultor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_consultant(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.user_repo.delete(id).await?;
    if deleted == 0 {
        return Err(AppError::ReferenceNotFound("Consultor"));
    }
    Ok(StatusCode::NO_CONTENT)
}
