// src/handlers/students.rs

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
    models::pipeline::{EnrollStudentPayload, Student, UpdateStudentPayload},
};

// GET /api/students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "Students",
    responses((status = 200, description = "Estudantes visíveis ao usuário", body = Vec<Student>)),
    security(("api_jwt" = []))
)]
pub async fn list_students(
    State(app_state): State<AppState>,
    scope: AccessScope,
) -> Result<impl IntoResponse, AppError> {
    let students = app_state.student_service.list(&scope).await?;
    Ok((StatusCode::OK, Json(students)))
}

// POST /api/students
// Matrícula: exige application aprovada e promove-a para `enrolled`
// na mesma transação.
#[utoipa::path(
    post,
    path = "/api/students",
    tag = "Students",
    request_body = EnrollStudentPayload,
    responses(
        (status = 201, description = "Estudante matriculado", body = Student),
        (status = 404, description = "Application não encontrada"),
        (status = 422, description = "Application não está aprovada")
    ),
    security(("api_jwt" = []))
)]
pub async fn enroll_student(
    State(app_state): State<AppState>,
    scope: AccessScope,
    Json(payload): Json<EnrollStudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let student = app_state.student_service.enroll(&scope, &payload).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

// PUT /api/students/{id}
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "Students",
    request_body = UpdateStudentPayload,
    params(("id" = Uuid, Path, description = "ID do estudante")),
    responses(
        (status = 200, description = "Estudante atualizado", body = Student),
        (status = 404, description = "Estudante não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_student(
    State(app_state): State<AppState>,
    scope: AccessScope,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let student = app_state
        .student_service
        .update(&scope, id, &payload)
        .await?;
    Ok((StatusCode::OK, Json(student)))
}

// DELETE /api/students/{id}
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = Uuid, Path, description = "ID do estudante")),
    responses(
        (status = 204, description = "Estudante removido"),
        (status = 404, description = "Estudante não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_student(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.student_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
