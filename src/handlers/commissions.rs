// src/handlers/commissions.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{RequireRole, SuperAdmin},
        scope::AccessScope,
    },
    models::commission::{Commission, CommissionSummary, GenerateReport},
};

// GET /api/commissions
#[utoipa::path(
    get,
    path = "/api/commissions",
    tag = "Commissions",
    responses((status = 200, description = "Comissões visíveis ao usuário", body = Vec<Commission>)),
    security(("api_jwt" = []))
)]
pub async fn list_commissions(
    State(app_state): State<AppState>,
    scope: AccessScope,
) -> Result<impl IntoResponse, AppError> {
    let commissions = app_state.commission_service.list(&scope).await?;
    Ok((StatusCode::OK, Json(commissions)))
}

// GET /api/commissions/summary
#[utoipa::path(
    get,
    path = "/api/commissions/summary",
    tag = "Commissions",
    responses((status = 200, description = "Totais (geral, pendente, pago)", body = CommissionSummary)),
    security(("api_jwt" = []))
)]
pub async fn commission_summary(
    State(app_state): State<AppState>,
    scope: AccessScope,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.commission_service.summary(&scope).await?;
    Ok((StatusCode::OK, Json(summary)))
}

// POST /api/commissions/generate
// Ação explícita em lote: cria comissões pendentes para todos os
// estudantes ainda sem uma.
#[utoipa::path(
    post,
    path = "/api/commissions/generate",
    tag = "Commissions",
    responses((status = 200, description = "Quantidade de comissões geradas", body = GenerateReport)),
    security(("api_jwt" = []))
)]
pub async fn generate_commissions(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.commission_service.generate().await?;
    Ok((StatusCode::OK, Json(report)))
}

// POST /api/commissions/{id}/pay
#[utoipa::path(
    post,
    path = "/api/commissions/{id}/pay",
    tag = "Commissions",
    params(("id" = Uuid, Path, description = "ID da comissão")),
    responses(
        (status = 200, description = "Comissão paga", body = Commission),
        (status = 404, description = "Comissão não encontrada"),
        (status = 422, description = "Comissão já estava paga")
    ),
    security(("api_jwt" = []))
)]
pub async fn mark_commission_paid(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let commission = app_state.commission_service.mark_paid(id).await?;
    Ok((StatusCode::OK, Json(commission)))
}
