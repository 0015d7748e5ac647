// src/db/user_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{User, UserRole},
};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo seu e-mail
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // O primeiro super admin nasce já registrado e com senha
    pub async fn create_super_admin(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, name, role, registered)
            VALUES ($1, $2, $3, 'super_admin', TRUE)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(unique_email_to_conflict)?;
        Ok(user)
    }

    // Pré-cadastro feito pelo admin: sem senha, registered = false.
    // O consultor reivindica a conta depois, no fluxo de dois passos.
    pub async fn create_consultant(
        &self,
        email: &str,
        name: &str,
        phone: Option<&str>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, phone, role, registered)
            VALUES ($1, $2, $3, 'consultant', FALSE)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(unique_email_to_conflict)?;
        Ok(user)
    }

    pub async fn list_consultants(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE role = $1 ORDER BY name ASC",
        )
        .bind(UserRole::Consultant)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn update_consultant(
        &self,
        id: Uuid,
        name: &str,
        phone: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, phone = $3, updated_at = NOW()
            WHERE id = $1 AND role = 'consultant'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn set_assigned_universities(
        &self,
        id: Uuid,
        university_ids: &[Uuid],
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET assigned_university_ids = $2, updated_at = NOW()
            WHERE id = $1 AND role = 'consultant'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(university_ids)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1 AND role = 'consultant'")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // --- FLUXO DE REGISTRO EM DOIS PASSOS ---
    // Executor genérico: o passo 2 roda dentro de uma transação,
    // com FOR UPDATE para fechar a janela entre verificação e escrita.

    pub async fn find_unregistered_consultant<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<Option<User>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE email = $1 AND role = 'consultant' AND registered = FALSE
            FOR UPDATE
            "#,
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;
        Ok(user)
    }

    pub async fn claim_account<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, registered = TRUE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(executor)
        .await?;
        Ok(())
    }
}

// Converte violação de chave única do e-mail num erro mais amigável
fn unique_email_to_conflict(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::EmailAlreadyExists;
        }
    }
    e.into()
}
