// src/models/pipeline.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "lead_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    /// Arestas permitidas: new -> contacted -> qualified -> converted,
    /// com `lost` alcançável de qualquer estado não-terminal.
    /// Reescrever o mesmo status é um no-op permitido.
    pub fn can_transition(self, to: LeadStatus) -> bool {
        use LeadStatus::*;
        if self == to {
            return true;
        }
        match (self, to) {
            (New, Contacted) | (Contacted, Qualified) | (Qualified, Converted) => true,
            (New | Contacted | Qualified, Lost) => true,
            _ => false,
        }
    }

    /// Apenas leads qualificados ou convertidos podem originar uma application.
    pub fn can_source_application(self) -> bool {
        matches!(self, LeadStatus::Qualified | LeadStatus::Converted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    Enrolled,
}

impl ApplicationStatus {
    /// Arestas permitidas por edição direta:
    /// draft -> submitted -> under_review -> {approved, rejected}.
    /// `enrolled` NUNCA é alcançável por aqui: só a matrícula do estudante
    /// promove approved -> enrolled, e nada reverte enrolled.
    pub fn can_transition(self, to: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        if self == to {
            return true;
        }
        matches!(
            (self, to),
            (Draft, Submitted)
                | (Submitted, UnderReview)
                | (UnderReview, Approved)
                | (UnderReview, Rejected)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Enrolled => "enrolled",
        }
    }
}

// --- ENTIDADES ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,

    pub country_id: Uuid,
    pub state_id: Option<Uuid>,
    pub city_id: Option<Uuid>,

    // Nomes livres (não são referências) separados por ; na importação
    pub interested_countries: Vec<String>,
    pub interested_courses: Vec<String>,
    pub notes: Option<String>,

    pub status: LeadStatus,
    pub assigned_consultant: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub lead_id: Uuid,

    // Copiados do lead na criação; NÃO são ressincronizados depois
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,

    pub university_id: Uuid,
    pub college_id: Uuid,
    pub course_id: Uuid,

    pub status: ApplicationStatus,
    pub application_date: NaiveDate,

    // URLs opacas no blob store externo
    pub documents: Vec<String>,
    pub assigned_consultant: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Um estudante não tem status próprio: existir já é o estado terminal
// do pipeline para a application de origem.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub application_id: Uuid,
    pub lead_id: Uuid,

    pub name: String,
    pub email: String,
    pub phone: String,

    pub university_id: Uuid,
    pub college_id: Uuid,
    pub course_id: Uuid,

    pub enrollment_date: NaiveDate,
    pub expected_graduation: NaiveDate,
    pub documents: Vec<String>,
    pub assigned_consultant: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- PAYLOADS ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "John Doe")]
    pub name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "john@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "+1234567890")]
    pub phone: String,

    pub country_id: Uuid,
    pub state_id: Option<Uuid>,
    pub city_id: Option<Uuid>,

    #[serde(default)]
    #[schema(example = json!(["United Kingdom", "Canada"]))]
    pub interested_countries: Vec<String>,
    #[serde(default)]
    #[schema(example = json!(["Computer Science", "MBA"]))]
    pub interested_courses: Vec<String>,
    pub notes: Option<String>,

    #[serde(default = "LeadPayload::default_status")]
    pub status: LeadStatus,
}

impl LeadPayload {
    fn default_status() -> LeadStatus {
        LeadStatus::New
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationPayload {
    pub lead_id: Uuid,
    pub university_id: Uuid,
    pub college_id: Uuid,
    pub course_id: Uuid,

    // A criação aceita qualquer status do fluxo de revisão,
    // mas nunca `enrolled` (verificado no serviço).
    #[serde(default = "CreateApplicationPayload::default_status")]
    pub status: ApplicationStatus,
    pub application_date: NaiveDate,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl CreateApplicationPayload {
    fn default_status() -> ApplicationStatus {
        ApplicationStatus::Draft
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationPayload {
    pub university_id: Uuid,
    pub college_id: Uuid,
    pub course_id: Uuid,
    pub status: ApplicationStatus,
    pub application_date: NaiveDate,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollStudentPayload {
    pub application_id: Uuid,
    pub enrollment_date: NaiveDate,
    pub expected_graduation: NaiveDate,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentPayload {
    pub enrollment_date: NaiveDate,
    pub expected_graduation: NaiveDate,
    #[serde(default)]
    pub documents: Vec<String>,
}

// Resultado agregado da importação de CSV: as três causas de erro
// (linha malformada, país desconhecido, falha de escrita) não são
// distinguidas no contador.
#[derive(Debug, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub imported: u64,
    pub errored: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_follows_forward_chain() {
        assert!(LeadStatus::New.can_transition(LeadStatus::Contacted));
        assert!(LeadStatus::Contacted.can_transition(LeadStatus::Qualified));
        assert!(LeadStatus::Qualified.can_transition(LeadStatus::Converted));
        // pular etapas não é permitido
        assert!(!LeadStatus::New.can_transition(LeadStatus::Qualified));
        assert!(!LeadStatus::Contacted.can_transition(LeadStatus::Converted));
        // nem voltar atrás
        assert!(!LeadStatus::Qualified.can_transition(LeadStatus::Contacted));
    }

    #[test]
    fn lost_reachable_from_non_terminal_only() {
        assert!(LeadStatus::New.can_transition(LeadStatus::Lost));
        assert!(LeadStatus::Contacted.can_transition(LeadStatus::Lost));
        assert!(LeadStatus::Qualified.can_transition(LeadStatus::Lost));
        assert!(!LeadStatus::Converted.can_transition(LeadStatus::Lost));
        assert!(!LeadStatus::Lost.can_transition(LeadStatus::New));
    }

    #[test]
    fn same_status_is_a_noop() {
        assert!(LeadStatus::Lost.can_transition(LeadStatus::Lost));
        assert!(ApplicationStatus::Enrolled.can_transition(ApplicationStatus::Enrolled));
    }

    #[test]
    fn only_qualified_or_converted_source_applications() {
        assert!(LeadStatus::Qualified.can_source_application());
        assert!(LeadStatus::Converted.can_source_application());
        assert!(!LeadStatus::New.can_source_application());
        assert!(!LeadStatus::Contacted.can_source_application());
        assert!(!LeadStatus::Lost.can_source_application());
    }

    #[test]
    fn application_review_chain() {
        use ApplicationStatus::*;
        assert!(Draft.can_transition(Submitted));
        assert!(Submitted.can_transition(UnderReview));
        assert!(UnderReview.can_transition(Approved));
        assert!(UnderReview.can_transition(Rejected));
        assert!(!Draft.can_transition(Approved));
        assert!(!Rejected.can_transition(UnderReview));
    }

    #[test]
    fn enrolled_unreachable_by_direct_edit() {
        use ApplicationStatus::*;
        for from in [Draft, Submitted, UnderReview, Approved, Rejected] {
            assert!(!from.can_transition(Enrolled), "{:?} -> enrolled deveria ser bloqueado", from);
        }
        // e nada reverte enrolled
        for to in [Draft, Submitted, UnderReview, Approved, Rejected] {
            assert!(!Enrolled.can_transition(to));
        }
    }
}
