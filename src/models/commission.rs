// src/models/commission.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "commission_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CommissionStatus {
    Pending,
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: Uuid,
    pub student_id: Uuid,
    pub application_id: Uuid,
    pub consultant_id: Option<Uuid>,
    pub course_id: Uuid,

    // Snapshot no momento da geração; edições posteriores do curso
    // não alteram comissões já emitidas.
    #[schema(example = "50000.00")]
    pub tuition_fee: Decimal,
    #[schema(example = "10.00")]
    pub commission_percentage: Decimal,
    #[schema(example = "5000.00")]
    pub commission_amount: Decimal,

    pub status: CommissionStatus,
    pub paid_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Comissão planejada pela geração em lote, ainda não persistida
#[derive(Debug, Clone, PartialEq)]
pub struct NewCommission {
    pub student_id: Uuid,
    pub application_id: Uuid,
    pub consultant_id: Option<Uuid>,
    pub course_id: Uuid,
    pub tuition_fee: Decimal,
    pub commission_percentage: Decimal,
    pub commission_amount: Decimal,
}

// Totais exibidos nos cards da tela de comissões
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSummary {
    pub total: Decimal,
    pub pending: Decimal,
    pub paid: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    pub generated: u64,
}
