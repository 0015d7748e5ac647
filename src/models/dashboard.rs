// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadStatusBreakdown {
    pub new: i64,
    pub contacted: i64,
    pub qualified: i64,
    pub converted: i64,
    pub lost: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatusBreakdown {
    pub draft: i64,
    pub submitted: i64,
    pub under_review: i64,
    pub approved: i64,
    pub rejected: i64,
    pub enrolled: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniversityStudentCount {
    pub university_id: Uuid,
    pub university_name: String,
    pub student_count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_leads: i64,
    pub total_applications: i64,
    pub total_students: i64,
    pub total_universities: i64,
    pub total_courses: i64,

    pub leads_by_status: LeadStatusBreakdown,
    pub applications_by_status: ApplicationStatusBreakdown,
    pub students_by_university: Vec<UniversityStudentCount>,

    pub total_commission_amount: Decimal,
    pub average_commission_per_student: Decimal,
}
