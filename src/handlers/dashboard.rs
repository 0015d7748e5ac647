// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireRole, SuperAdmin},
    models::dashboard::DashboardSummary,
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses((status = 200, description = "Indicadores gerais do pipeline", body = DashboardSummary)),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
) -> Result<impl IntoResponse, AppError> {
    let repo = &app_state.dashboard_repo;

    let total_leads = repo.count_table("leads").await?;
    let total_applications = repo.count_table("applications").await?;
    let total_students = repo.count_table("students").await?;
    let total_universities = repo.count_table("universities").await?;
    let total_courses = repo.count_table("courses").await?;

    let leads_by_status = repo.leads_by_status().await?;
    let applications_by_status = repo.applications_by_status().await?;
    let students_by_university = repo.students_by_university().await?;
    let total_commission_amount = repo.total_commission_amount().await?;

    let average_commission_per_student = if total_students > 0 {
        total_commission_amount / Decimal::from(total_students)
    } else {
        Decimal::ZERO
    };

    let summary = DashboardSummary {
        total_leads,
        total_applications,
        total_students,
        total_universities,
        total_courses,
        leads_by_status,
        applications_by_status,
        students_by_university,
        total_commission_amount,
        average_commission_per_student,
    };

    Ok((StatusCode::OK, Json(summary)))
}
