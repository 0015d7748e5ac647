// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        ApplicationRepository, CatalogRepository, CommissionRepository, DashboardRepository,
        EnquiryRepository, LeadRepository, LocationRepository, MetadataRepository,
        StudentRepository, UserRepository,
    },
    services::{
        application_service::ApplicationService, auth::AuthService,
        catalog_service::CatalogService, commission_service::CommissionService,
        lead_service::LeadService, student_service::StudentService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,

    pub auth_service: AuthService,
    pub lead_service: LeadService,
    pub application_service: ApplicationService,
    pub student_service: StudentService,
    pub commission_service: CommissionService,
    pub catalog_service: CatalogService,

    // Repositórios de CRUD simples, usados direto pelos handlers
    pub user_repo: UserRepository,
    pub location_repo: LocationRepository,
    pub metadata_repo: MetadataRepository,
    pub enquiry_repo: EnquiryRepository,
    pub dashboard_repo: DashboardRepository,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let location_repo = LocationRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let metadata_repo = MetadataRepository::new(db_pool.clone());
        let lead_repo = LeadRepository::new(db_pool.clone());
        let application_repo = ApplicationRepository::new(db_pool.clone());
        let student_repo = StudentRepository::new(db_pool.clone());
        let commission_repo = CommissionRepository::new(db_pool.clone());
        let enquiry_repo = EnquiryRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service =
            AuthService::new(user_repo.clone(), jwt_secret.clone(), db_pool.clone());
        let lead_service = LeadService::new(lead_repo.clone(), location_repo.clone());
        let application_service = ApplicationService::new(
            application_repo.clone(),
            lead_repo.clone(),
            catalog_repo.clone(),
        );
        let student_service = StudentService::new(
            student_repo.clone(),
            application_repo.clone(),
            db_pool.clone(),
        );
        let commission_service = CommissionService::new(
            commission_repo.clone(),
            student_repo.clone(),
            catalog_repo.clone(),
        );
        let catalog_service = CatalogService::new(catalog_repo);

        Ok(Self {
            db_pool,
            jwt_secret,
            auth_service,
            lead_service,
            application_service,
            student_service,
            commission_service,
            catalog_service,
            user_repo,
            location_repo,
            metadata_repo,
            enquiry_repo,
            dashboard_repo,
        })
    }
}
