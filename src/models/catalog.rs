// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "intake_period")]
pub enum IntakePeriod {
    January,
    September,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "course_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Undergraduate,
    Postgraduate,
    Diploma,
    Certificate,
}

// --- TABELA DE TAXAS ANO A ANO ---
// Guardada como JSONB na universidade. Serve apenas para exibição no site;
// a fonte canônica de valores para comissão é o curso.

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct YearFees {
    pub tuition_fees: Decimal,
    pub hostel_fees: Decimal,
    pub mess_charges: Decimal,
    pub other_charges: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FeesStructure {
    pub year1: YearFees,
    pub year2: YearFees,
    pub year3: YearFees,
    pub year4: YearFees,
    pub year5: YearFees,
    pub year6: YearFees,
}

// --- UNIVERSIDADE ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,

    pub country_id: Uuid,
    pub state_id: Uuid,
    pub city_id: Uuid,
    pub address: String,

    // Reconhecimentos (NMC, WHO, ECFMG...) e idiomas de ensino
    pub recognitions: Vec<String>,
    pub medium_of_teaching: Vec<String>,

    pub course_duration: String,
    pub eligibility_criteria: Option<String>,
    pub neet_required: bool,
    pub currently_enrolled_students: i32,
    pub intake_period: IntakePeriod,
    pub youtube_video_url: Option<String>,

    pub faculty_ids: Vec<Uuid>,

    #[schema(value_type = FeesStructure)]
    pub fees_structure: Json<FeesStructure>,
    pub commission_percentage: Decimal,

    // Consultores com visibilidade sobre esta universidade
    pub assigned_consultants: Vec<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub id: Uuid,
    pub university_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub college_id: Uuid,
    pub university_id: Uuid,
    pub name: String,
    pub duration: String,
    pub level: CourseLevel,

    #[schema(example = "50000.00")]
    pub tuition_fee: Decimal,
    #[schema(example = "150.00")]
    pub application_fee: Decimal,
    #[schema(example = "10.00")]
    pub commission_percentage: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- METADADOS DO CATÁLOGO ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: Uuid,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub experience: String, // Ex: "10 years"
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recognition {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Medium {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: Uuid,
    pub name: String,
    pub university_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- PAYLOADS ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniversityPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Tbilisi State Medical University")]
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,

    pub country_id: Uuid,
    pub state_id: Uuid,
    pub city_id: Uuid,
    #[validate(length(min = 1, message = "required"))]
    pub address: String,

    #[serde(default)]
    pub recognitions: Vec<String>,
    #[serde(default)]
    pub medium_of_teaching: Vec<String>,

    #[schema(example = "6 years")]
    pub course_duration: String,
    pub eligibility_criteria: Option<String>,
    #[serde(default)]
    pub neet_required: bool,
    #[serde(default)]
    pub currently_enrolled_students: i32,
    pub intake_period: IntakePeriod,
    pub youtube_video_url: Option<String>,

    #[serde(default)]
    pub faculty_ids: Vec<Uuid>,

    #[serde(default)]
    pub fees_structure: FeesStructure,
    #[serde(default)]
    #[schema(value_type = f64, example = 10.0)]
    pub commission_percentage: Decimal,

    #[serde(default)]
    pub assigned_consultants: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollegePayload {
    pub university_id: Uuid,
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub college_id: Uuid,
    pub university_id: Uuid,
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "MBBS")]
    pub name: String,
    #[schema(example = "6 years")]
    pub duration: String,
    pub level: CourseLevel,
    #[serde(default)]
    #[schema(value_type = f64, example = 50000.0)]
    pub tuition_fee: Decimal,
    #[serde(default)]
    #[schema(value_type = f64, example = 150.0)]
    pub application_fee: Decimal,
    #[serde(default)]
    #[schema(value_type = f64, example = 10.0)]
    pub commission_percentage: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacultyPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    pub designation: String,
    pub department: String,
    pub experience: String,
    pub profile_image_url: Option<String>,
}

// Recognitions e mediums são registros que só carregam um nome
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NamePayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StreamPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    #[serde(default)]
    pub university_ids: Vec<Uuid>,
}
