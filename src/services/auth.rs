// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, User, VerifyEmailResponse},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, pool: PgPool) -> Self {
        Self {
            user_repo,
            jwt_secret,
            pool,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Consultor pré-cadastrado que ainda não reivindicou a conta
        // não tem senha e não pode entrar.
        let password_hash = match (&user.password_hash, user.registered) {
            (Some(h), true) => h.clone(),
            _ => return Err(AppError::InvalidCredentials),
        };

        let password_clone = password.to_owned();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(user.id)
    }

    /// Cria o primeiro super admin. Só funciona enquanto a tabela de
    /// usuários estiver vazia; depois disso o endpoint fica inerte.
    pub async fn setup_admin(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<String, AppError> {
        if self.user_repo.count().await? > 0 {
            return Err(AppError::SetupAlreadyCompleted);
        }

        let hashed_password = self.hash_password(password).await?;
        let user = self
            .user_repo
            .create_super_admin(email, &hashed_password, name)
            .await?;

        tracing::info!("👤 Super admin inicial criado: {}", user.email);
        self.create_token(user.id)
    }

    // --- REGISTRO DO CONSULTOR EM DOIS PASSOS ---

    /// Passo 1: o consultor confirma que o e-mail foi pré-cadastrado pelo
    /// admin e ainda não foi reivindicado.
    pub async fn verify_consultant_email(
        &self,
        email: &str,
    ) -> Result<VerifyEmailResponse, AppError> {
        let user = self
            .user_repo
            .find_unregistered_consultant(&self.pool, email)
            .await?
            .ok_or(AppError::RegistrationNotAvailable)?;

        Ok(VerifyEmailResponse {
            id: user.id,
            name: user.name,
        })
    }

    /// Passo 2: define a senha e ativa a conta. A condição do passo 1 é
    /// re-verificada dentro de uma transação (com lock), então uma segunda
    /// tentativa para o mesmo e-mail é rejeitada.
    pub async fn register_consultant(
        &self,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        // O hashing fica fora da transação, pois não toca no banco
        let hashed_password = self.hash_password(password).await?;

        let mut tx = self.pool.begin().await?;

        let user = self
            .user_repo
            .find_unregistered_consultant(&mut *tx, email)
            .await?
            .ok_or(AppError::RegistrationNotAvailable)?;

        self.user_repo
            .claim_account(&mut *tx, user.id, &hashed_password)
            .await?;

        tx.commit().await?;

        tracing::info!("🔗 Consultor {} concluiu o registro.", email);
        self.create_token(user.id)
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        self.user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)
    }

    async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password_clone = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }

    fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
