use actix_web::{web, HttpResponse};
use bigdecimal::ToPrimitive;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::money::format_price;
use crate::domain::prescription::{IssuedPrescription, PrescriptionDetails};
use crate::errors::AppError;

use super::{fields, AppState, MessageResponse};

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuePrescriptionRequest {
    #[schema(value_type = String, example = "P-001")]
    pub patient_id: Option<Value>,
    /// Accepted as a number or a numeric string.
    #[schema(value_type = String, example = "1")]
    pub drug_id: Option<Value>,
    #[schema(value_type = String, example = "1 tablet twice daily")]
    pub dosage: Option<Value>,
    #[schema(value_type = String, format = Date, example = "2025-01-01")]
    pub issue_date: Option<Value>,
}

/// Everything the client needs to print the prescription.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionData {
    pub prescription_id: i32,
    pub patient_id: String,
    pub drug_name: String,
    pub dosage: String,
    pub issue_date: NaiveDate,
    pub price: f64,
    pub price_display: String,
    pub remaining_stock: i32,
}

impl From<IssuedPrescription> for PrescriptionData {
    fn from(issued: IssuedPrescription) -> Self {
        Self {
            prescription_id: issued.prescription.id,
            patient_id: issued.prescription.patient_id,
            drug_name: issued.drug_name,
            dosage: issued.prescription.dosage,
            issue_date: issued.prescription.issue_date,
            price: issued.drug_price.to_f64().unwrap_or_default(),
            price_display: format_price(&issued.drug_price),
            remaining_stock: issued.remaining_stock,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuePrescriptionResponse {
    pub success: bool,
    pub message: String,
    pub prescription_data: PrescriptionData,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrescriptionRowResponse {
    pub id: i32,
    pub patient_id: String,
    pub drug_name: String,
    pub drug_price: f64,
    pub dosage: String,
    pub issue_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<PrescriptionDetails> for PrescriptionRowResponse {
    fn from(p: PrescriptionDetails) -> Self {
        Self {
            id: p.id,
            patient_id: p.patient_id,
            drug_name: p.drug_name,
            drug_price: p.drug_price.to_f64().unwrap_or_default(),
            dosage: p.dosage,
            issue_date: p.issue_date,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrescriptionListResponse {
    pub prescriptions: Vec<PrescriptionRowResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDetailResponse {
    pub id: i32,
    pub patient_id: String,
    pub drug_name: String,
    pub drug_price: f64,
    pub drug_price_display: String,
    pub dosage: String,
    pub issue_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<PrescriptionDetails> for PrescriptionDetailResponse {
    fn from(p: PrescriptionDetails) -> Self {
        Self {
            id: p.id,
            patient_id: p.patient_id,
            drug_name: p.drug_name,
            drug_price: p.drug_price.to_f64().unwrap_or_default(),
            drug_price_display: format_price(&p.drug_price),
            dosage: p.dosage,
            issue_date: p.issue_date,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetPrescriptionResponse {
    pub success: bool,
    pub prescription: PrescriptionDetailResponse,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /issuePrescription
///
/// Records the prescription and takes one unit of the drug out of stock in a
/// single transaction. Unknown or depleted drugs leave both tables untouched.
#[utoipa::path(
    post,
    path = "/issuePrescription",
    request_body = IssuePrescriptionRequest,
    responses(
        (status = 200, description = "Prescription issued", body = IssuePrescriptionResponse),
        (status = 400, description = "Missing field, unknown drug or out of stock", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "prescriptions"
)]
pub async fn issue_prescription(
    state: web::Data<AppState>,
    body: web::Json<IssuePrescriptionRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    fields::require_all(&[
        body.patient_id.as_ref(),
        body.drug_id.as_ref(),
        body.dosage.as_ref(),
        body.issue_date.as_ref(),
    ])?;
    let patient_id = fields::text(body.patient_id.as_ref(), "patientId")?;
    let drug_id = fields::int32(body.drug_id.as_ref(), "drugId")?;
    let dosage = fields::text(body.dosage.as_ref(), "dosage")?;
    let issue_date = fields::date(body.issue_date.as_ref(), "issueDate")?;

    let issued = web::block(move || {
        state
            .prescriptions
            .issue_prescription(&patient_id, drug_id, &dosage, issue_date)
    })
    .await??;

    Ok(HttpResponse::Ok().json(IssuePrescriptionResponse {
        success: true,
        message: format!("Prescription issued successfully for {}", issued.drug_name),
        prescription_data: issued.into(),
    }))
}

/// GET /getPrescriptions
///
/// Newest issue date first, each joined with its drug's current name and price.
#[utoipa::path(
    get,
    path = "/getPrescriptions",
    responses(
        (status = 200, description = "All prescriptions", body = PrescriptionListResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "prescriptions"
)]
pub async fn get_prescriptions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = web::block(move || state.prescriptions.get_prescriptions()).await??;

    Ok(HttpResponse::Ok().json(PrescriptionListResponse {
        prescriptions: rows.into_iter().map(Into::into).collect(),
    }))
}

/// GET /getPrescription/{id}
#[utoipa::path(
    get,
    path = "/getPrescription/{id}",
    params(
        ("id" = i32, Path, description = "Prescription id"),
    ),
    responses(
        (status = 200, description = "Prescription found", body = GetPrescriptionResponse),
        (status = 404, description = "Prescription not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "prescriptions"
)]
pub async fn get_prescription(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let prescription = web::block(move || state.prescriptions.get_prescription(id)).await??;

    Ok(HttpResponse::Ok().json(GetPrescriptionResponse {
        success: true,
        prescription: prescription.into(),
    }))
}
