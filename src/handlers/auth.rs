// src/handlers/auth.rs

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{
        AuthResponse, ConsultantRegisterPayload, LoginPayload, SetupPayload, User,
        VerifyEmailPayload, VerifyEmailResponse,
    },
};

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Autenticado", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// POST /api/auth/setup
// Bootstrap: cria o primeiro super admin enquanto não existir nenhum usuário.
#[utoipa::path(
    post,
    path = "/api/auth/setup",
    tag = "Auth",
    request_body = SetupPayload,
    responses(
        (status = 201, description = "Super admin inicial criado", body = AuthResponse),
        (status = 409, description = "Sistema já inicializado")
    )
)]
pub async fn setup(
    State(app_state): State<AppState>,
    Json(payload): Json<SetupPayload>,
) -> Result<(axum::http::StatusCode, Json<AuthResponse>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .setup_admin(&payload.email, &payload.password, &payload.name)
        .await?;

    Ok((axum::http::StatusCode::CREATED, Json(AuthResponse { token })))
}

// POST /api/auth/consultant/verify-email
#[utoipa::path(
    post,
    path = "/api/auth/consultant/verify-email",
    tag = "Auth",
    request_body = VerifyEmailPayload,
    responses(
        (status = 200, description = "E-mail pré-cadastrado e disponível", body = VerifyEmailResponse),
        (status = 409, description = "E-mail não encontrado ou já registrado")
    )
)]
pub async fn verify_consultant_email(
    State(app_state): State<AppState>,
    Json(payload): Json<VerifyEmailPayload>,
) -> Result<Json<VerifyEmailResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let response = app_state
        .auth_service
        .verify_consultant_email(&payload.email)
        .await?;

    Ok(Json(response))
}

// POST /api/auth/consultant/register
#[utoipa::path(
    post,
    path = "/api/auth/consultant/register",
    tag = "Auth",
    request_body = ConsultantRegisterPayload,
    responses(
        (status = 200, description = "Conta ativada", body = AuthResponse),
        (status = 409, description = "E-mail não encontrado ou já registrado")
    )
)]
pub async fn register_consultant(
    State(app_state): State<AppState>,
    Json(payload): Json<ConsultantRegisterPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .register_consultant(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses((status = 200, description = "Usuário autenticado", body = User)),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}
