// src/handlers/leads.rs

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
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
    models::pipeline::{ImportReport, Lead, LeadPayload},
    services::lead_service::CSV_TEMPLATE,
};

// GET /api/leads
#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    responses((status = 200, description = "Leads visíveis ao usuário", body = Vec<Lead>)),
    security(("api_jwt" = []))
)]
pub async fn list_leads(
    State(app_state): State<AppState>,
    scope: AccessScope,
) -> Result<impl IntoResponse, AppError> {
    let leads = app_state.lead_service.list(&scope).await?;
    Ok((StatusCode::OK, Json(leads)))
}

// POST /api/leads
#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Leads",
    request_body = LeadPayload,
    responses(
        (status = 201, description = "Lead criado", body = Lead),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    scope: AccessScope,
    Json(payload): Json<LeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let lead = app_state.lead_service.create(&scope, &payload).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

// PUT /api/leads/{id}
#[utoipa::path(
    put,
    path = "/api/leads/{id}",
    tag = "Leads",
    request_body = LeadPayload,
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead atualizado", body = Lead),
        (status = 404, description = "Lead não encontrado"),
        (status = 422, description = "Transição de status inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    scope: AccessScope,
    Path(id): Path<Uuid>,
    Json(payload): Json<LeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let lead = app_state.lead_service.update(&scope, id, &payload).await?;
    Ok((StatusCode::OK, Json(lead)))
}

// DELETE /api/leads/{id}
// Ação direta do admin, sem cascata sobre applications já criadas.
#[utoipa::path(
    delete,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 204, description = "Lead removido"),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_lead(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.lead_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/leads/import
// O corpo é o conteúdo do arquivo CSV como texto.
#[utoipa::path(
    post,
    path = "/api/leads/import",
    tag = "Leads",
    request_body = String,
    responses((status = 200, description = "Contagens da importação", body = ImportReport)),
    security(("api_jwt" = []))
)]
pub async fn import_leads(
    State(app_state): State<AppState>,
    scope: AccessScope,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.lead_service.import_csv(&scope, &body).await?;
    Ok((StatusCode::OK, Json(report)))
}

// GET /api/leads/import/template
#[utoipa::path(
    get,
    path = "/api/leads/import/template",
    tag = "Leads",
    responses((status = 200, description = "Modelo de CSV para importação", body = String)),
    security(("api_jwt" = []))
)]
pub async fn download_template() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"leads-template.csv\"",
            ),
        ],
        CSV_TEMPLATE,
    )
}
