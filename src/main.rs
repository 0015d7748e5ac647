// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/setup", post(handlers::auth::setup))
        .route(
            "/consultant/verify-email",
            post(handlers::auth::verify_consultant_email),
        )
        .route(
            "/consultant/register",
            post(handlers::auth::register_consultant),
        );

    // /me é a única rota de auth protegida
    let me_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Rotas públicas do site institucional
    let public_routes = Router::new()
        .route("/countries", get(handlers::public::list_countries))
        .route("/universities", get(handlers::public::list_universities))
        .route("/enquiries", post(handlers::public::create_enquiry));

    let location_routes = Router::new()
        .route(
            "/countries",
            get(handlers::locations::list_countries).post(handlers::locations::create_country),
        )
        .route(
            "/countries/{id}",
            put(handlers::locations::update_country).delete(handlers::locations::delete_country),
        )
        .route(
            "/states",
            get(handlers::locations::list_states).post(handlers::locations::create_state),
        )
        .route(
            "/states/{id}",
            put(handlers::locations::update_state).delete(handlers::locations::delete_state),
        )
        .route(
            "/cities",
            get(handlers::locations::list_cities).post(handlers::locations::create_city),
        )
        .route(
            "/cities/{id}",
            put(handlers::locations::update_city).delete(handlers::locations::delete_city),
        );

    let catalog_routes = Router::new()
        .route(
            "/universities",
            get(handlers::catalog::list_universities).post(handlers::catalog::create_university),
        )
        .route(
            "/universities/{id}",
            put(handlers::catalog::update_university)
                .delete(handlers::catalog::delete_university),
        )
        .route(
            "/colleges",
            get(handlers::catalog::list_colleges).post(handlers::catalog::create_college),
        )
        .route(
            "/colleges/{id}",
            put(handlers::catalog::update_college).delete(handlers::catalog::delete_college),
        )
        .route(
            "/courses",
            get(handlers::catalog::list_courses).post(handlers::catalog::create_course),
        )
        .route(
            "/courses/{id}",
            put(handlers::catalog::update_course).delete(handlers::catalog::delete_course),
        );

    let metadata_routes = Router::new()
        .route(
            "/faculties",
            get(handlers::metadata::list_faculties).post(handlers::metadata::create_faculty),
        )
        .route(
            "/faculties/{id}",
            put(handlers::metadata::update_faculty).delete(handlers::metadata::delete_faculty),
        )
        .route(
            "/recognitions",
            get(handlers::metadata::list_recognitions)
                .post(handlers::metadata::create_recognition),
        )
        .route(
            "/recognitions/{id}",
            axum::routing::delete(handlers::metadata::delete_recognition),
        )
        .route(
            "/mediums",
            get(handlers::metadata::list_mediums).post(handlers::metadata::create_medium),
        )
        .route(
            "/mediums/{id}",
            axum::routing::delete(handlers::metadata::delete_medium),
        )
        .route(
            "/streams",
            get(handlers::metadata::list_streams).post(handlers::metadata::create_stream),
        )
        .route(
            "/streams/{id}",
            put(handlers::metadata::update_stream).delete(handlers::metadata::delete_stream),
        );

    let lead_routes = Router::new()
        .route(
            "/",
            get(handlers::leads::list_leads).post(handlers::leads::create_lead),
        )
        .route(
            "/{id}",
            put(handlers::leads::update_lead).delete(handlers::leads::delete_lead),
        )
        .route("/import", post(handlers::leads::import_leads))
        .route("/import/template", get(handlers::leads::download_template));

    let application_routes = Router::new()
        .route(
            "/",
            get(handlers::applications::list_applications)
                .post(handlers::applications::create_application),
        )
        .route(
            "/{id}",
            put(handlers::applications::update_application)
                .delete(handlers::applications::delete_application),
        );

    let student_routes = Router::new()
        .route(
            "/",
            get(handlers::students::list_students).post(handlers::students::enroll_student),
        )
        .route(
            "/{id}",
            put(handlers::students::update_student).delete(handlers::students::delete_student),
        );

    let commission_routes = Router::new()
        .route("/", get(handlers::commissions::list_commissions))
        .route("/summary", get(handlers::commissions::commission_summary))
        .route(
            "/generate",
            post(handlers::commissions::generate_commissions),
        )
        .route("/{id}/pay", post(handlers::commissions::mark_commission_paid));

    let consultant_routes = Router::new()
        .route(
            "/",
            get(handlers::consultants::list_consultants)
                .post(handlers::consultants::create_consultant),
        )
        .route(
            "/{id}",
            put(handlers::consultants::update_consultant)
                .delete(handlers::consultants::delete_consultant),
        )
        .route(
            "/{id}/universities",
            put(handlers::consultants::assign_universities),
        );

    let dashboard_routes =
        Router::new().route("/summary", get(handlers::dashboard::get_summary));

    let enquiry_routes = Router::new().route("/", get(handlers::public::list_enquiries));

    // Tudo que é CRM fica atrás do auth_guard; o papel é verificado
    // rota a rota pelos extractors (RequireRole / AccessScope).
    let protected = Router::new()
        .merge(location_routes)
        .merge(catalog_routes)
        .merge(metadata_routes)
        .nest("/leads", lead_routes)
        .nest("/applications", application_routes)
        .nest("/students", student_routes)
        .nest("/commissions", commission_routes)
        .nest("/consultants", consultant_routes)
        .nest("/dashboard", dashboard_routes)
        .nest("/enquiries", enquiry_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/auth", me_routes)
        .nest("/api/public", public_routes)
        .nest("/api", protected)
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
