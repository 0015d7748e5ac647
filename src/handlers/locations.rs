// src/handlers/locations.rs

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
    models::locations::{CityPayload, CountryPayload, StatePayload},
};

// CRUD de localizações. Leitura liberada para qualquer usuário autenticado;
// escrita restrita ao super admin.

// --- PAÍSES ---

pub async fn list_countries(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let countries = app_state.location_repo.list_countries().await?;
    Ok((StatusCode::OK, Json(countries)))
}

pub async fn create_country(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<CountryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let country = app_state.location_repo.create_country(&payload).await?;
    Ok((StatusCode::CREATED, Json(country)))
}

pub async fn update_country(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CountryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let country = app_state
        .location_repo
        .update_country(id, &payload)
        .await?
        .ok_or(AppError::ReferenceNotFound("País"))?;
    Ok((StatusCode::OK, Json(country)))
}

pub async fn delete_country(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.location_repo.delete_country(id).await?;
    if deleted == 0 {
        return Err(AppError::ReferenceNotFound("País"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- ESTADOS ---

pub async fn list_states(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let states = app_state.location_repo.list_states().await?;
    Ok((StatusCode::OK, Json(states)))
}

pub async fn create_state(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<StatePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let state = app_state.location_repo.create_state(&payload).await?;
    Ok((StatusCode::CREATED, Json(state)))
}

pub async fn update_state(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let state = app_state
        .location_repo
        .update_state(id, &payload)
        .await?
        .ok_or(AppError::ReferenceNotFound("Estado"))?;
    Ok((StatusCode::OK, Json(state)))
}

pub async fn delete_state(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.location_repo.delete_state(id).await?;
    if deleted == 0 {
        return Err(AppError::ReferenceNotFound("Estado"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- CIDADES ---

pub async fn list_cities(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cities = app_state.location_repo.list_cities().await?;
    Ok((StatusCode::OK, Json(cities)))
}

pub async fn create_city(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Json(payload): Json<CityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let city = app_state.location_repo.create_city(&payload).await?;
    Ok((StatusCode::CREATED, Json(city)))
}

pub async fn update_city(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    let city = app_state
        .location_repo
        .update_city(id, &payload)
        .await?
        .ok_or(AppError::ReferenceNotFound("Cidade"))?;
    Ok((StatusCode::OK, Json(city)))
}

pub async fn delete_city(
    State(app_state): State<AppState>,
    _guard: RequireRole<SuperAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.location_repo.delete_city(id).await?;
    if deleted == 0 {
        return Err(AppError::ReferenceNotFound("Cidade"));
    }
    Ok(StatusCode::NO_CONTENT)
}
