// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::setup,
        handlers::auth::verify_consultant_email,
        handlers::auth::register_consultant,
        handlers::auth::get_me,

        // --- Leads ---
        handlers::leads::list_leads,
        handlers::leads::create_lead,
        handlers::leads::update_lead,
        handlers::leads::delete_lead,
        handlers::leads::import_leads,
        handlers::leads::download_template,

        // --- Applications ---
        handlers::applications::list_applications,
        handlers::applications::create_application,
        handlers::applications::update_application,
        handlers::applications::delete_application,

        // --- Students ---
        handlers::students::list_students,
        handlers::students::enroll_student,
        handlers::students::update_student,
        handlers::students::delete_student,

        // --- Commissions ---
        handlers::commissions::list_commissions,
        handlers::commissions::commission_summary,
        handlers::commissions::generate_commissions,
        handlers::commissions::mark_commission_paid,

        // --- Consultants ---
        handlers::consultants::list_consultants,
        handlers::consultants::create_consultant,
        handlers::consultants::update_consultant,
        handlers::consultants::assign_universities,
        handlers::consultants::delete_consultant,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::User,
            models::auth::LoginPayload,
            models::auth::SetupPayload,
            models::auth::VerifyEmailPayload,
            models::auth::VerifyEmailResponse,
            models::auth::ConsultantRegisterPayload,
            models::auth::AuthResponse,

            // --- Pipeline ---
            models::pipeline::LeadStatus,
            models::pipeline::ApplicationStatus,
            models::pipeline::Lead,
            models::pipeline::Application,
            models::pipeline::Student,
            models::pipeline::LeadPayload,
            models::pipeline::CreateApplicationPayload,
            models::pipeline::UpdateApplicationPayload,
            models::pipeline::EnrollStudentPayload,
            models::pipeline::UpdateStudentPayload,
            models::pipeline::ImportReport,

            // --- Commissions ---
            models::commission::CommissionStatus,
            models::commission::Commission,
            models::commission::CommissionSummary,
            models::commission::GenerateReport,

            // --- Dashboard ---
            models::dashboard::LeadStatusBreakdown,
            models::dashboard::ApplicationStatusBreakdown,
            models::dashboard::UniversityStudentCount,
            models::dashboard::DashboardSummary,

            // --- Consultants ---
            handlers::consultants::CreateConsultantPayload,
            handlers::consultants::UpdateConsultantPayload,
            handlers::consultants::AssignUniversitiesPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e registro de consultores"),
        (name = "Leads", description = "Gestão de leads e importação de CSV"),
        (name = "Applications", description = "Pipeline de applications"),
        (name = "Students", description = "Matrículas"),
        (name = "Commissions", description = "Geração e pagamento de comissões"),
        (name = "Consultants", description = "Gestão de consultores (super admin)"),
        (name = "Dashboard", description = "Indicadores e relatórios")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
