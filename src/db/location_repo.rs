// src/db/location_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::locations::{City, CityPayload, Country, CountryPayload, State, StatePayload},
};

#[derive(Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  PAÍSES
    // =========================================================================

    pub async fn list_countries(&self) -> Result<Vec<Country>, AppError> {
        let countries =
            sqlx::query_as::<_, Country>("SELECT * FROM countries ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(countries)
    }

    pub async fn create_country(&self, payload: &CountryPayload) -> Result<Country, AppError> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            INSERT INTO countries (name, code, flag_url, details, top_university_ids)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.code)
        .bind(&payload.flag_url)
        .bind(&payload.details)
        .bind(&payload.top_university_ids)
        .fetch_one(&self.pool)
        .await?;
        Ok(country)
    }

    pub async fn update_country(
        &self,
        id: Uuid,
        payload: &CountryPayload,
    ) -> Result<Option<Country>, AppError> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            UPDATE countries
            SET name = $2, code = $3, flag_url = $4, details = $5,
                top_university_ids = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.code)
        .bind(&payload.flag_url)
        .bind(&payload.details)
        .bind(&payload.top_university_ids)
        .fetch_optional(&self.pool)
        .await?;
        Ok(country)
    }

    pub async fn delete_country(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  ESTADOS
    // =========================================================================

    pub async fn list_states(&self) -> Result<Vec<State>, AppError> {
        let states = sqlx::query_as::<_, State>("SELECT * FROM states ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(states)
    }

    pub async fn create_state(&self, payload: &StatePayload) -> Result<State, AppError> {
        let state = sqlx::query_as::<_, State>(
            r#"
            INSERT INTO states (country_id, name, code)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(payload.country_id)
        .bind(&payload.name)
        .bind(&payload.code)
        .fetch_one(&self.pool)
        .await?;
        Ok(state)
    }

    pub async fn update_state(
        &self,
        id: Uuid,
        payload: &StatePayload,
    ) -> Result<Option<State>, AppError> {
        let state = sqlx::query_as::<_, State>(
            r#"
            UPDATE states
            SET country_id = $2, name = $3, code = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.country_id)
        .bind(&payload.name)
        .bind(&payload.code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(state)
    }

    pub async fn delete_state(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM states WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  CIDADES
    // =========================================================================

    pub async fn list_cities(&self) -> Result<Vec<City>, AppError> {
        let cities = sqlx::query_as::<_, City>("SELECT * FROM cities ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(cities)
    }

    pub async fn create_city(&self, payload: &CityPayload) -> Result<City, AppError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (state_id, country_id, name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(payload.state_id)
        .bind(payload.country_id)
        .bind(&payload.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(city)
    }

    pub async fn update_city(
        &self,
        id: Uuid,
        payload: &CityPayload,
    ) -> Result<Option<City>, AppError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            UPDATE cities
            SET state_id = $2, country_id = $3, name = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.state_id)
        .bind(payload.country_id)
        .bind(&payload.name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(city)
    }

    pub async fn delete_city(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
