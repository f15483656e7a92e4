use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::patient::Patient;
use crate::errors::AppError;

use super::{fields, AppState, MessageResponse};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddPatientRequest {
    #[schema(value_type = String, example = "P-001")]
    pub patient_id: Option<Value>,
    #[schema(value_type = String, example = "Mwila Banda")]
    pub name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub phone: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub address: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub patient_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Patient> for PatientResponse {
    fn from(p: Patient) -> Self {
        Self {
            patient_id: p.patient_id,
            name: p.name,
            phone: p.phone,
            address: p.address,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PatientListResponse {
    pub patients: Vec<PatientResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetPatientResponse {
    pub success: bool,
    pub patient: PatientResponse,
}

/// POST /addPatient
#[utoipa::path(
    post,
    path = "/addPatient",
    request_body = AddPatientRequest,
    responses(
        (status = 200, description = "Patient registered", body = MessageResponse),
        (status = 400, description = "Missing field", body = MessageResponse),
        (status = 409, description = "Patient id already registered", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "patients"
)]
pub async fn add_patient(
    state: web::Data<AppState>,
    body: web::Json<AddPatientRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    fields::require_all(&[body.patient_id.as_ref(), body.name.as_ref()])?;
    let patient_id = fields::text(body.patient_id.as_ref(), "patientId")?;
    let name = fields::text(body.name.as_ref(), "name")?;
    let phone = fields::optional_text(body.phone.as_ref());
    let address = fields::optional_text(body.address.as_ref());

    let patient = web::block(move || {
        state.patients.register_patient(
            &patient_id,
            &name,
            phone.as_deref(),
            address.as_deref(),
        )
    })
    .await??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: format!("Patient {} registered successfully", patient.patient_id),
    }))
}

/// GET /getPatients
#[utoipa::path(
    get,
    path = "/getPatients",
    responses(
        (status = 200, description = "Registered patients ordered by name", body = PatientListResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "patients"
)]
pub async fn get_patients(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let patients = web::block(move || state.patients.list_patients()).await??;

    Ok(HttpResponse::Ok().json(PatientListResponse {
        patients: patients.into_iter().map(Into::into).collect(),
    }))
}

/// GET /getPatient/{id}
#[utoipa::path(
    get,
    path = "/getPatient/{id}",
    params(
        ("id" = String, Path, description = "Patient id"),
    ),
    responses(
        (status = 200, description = "Patient found", body = GetPatientResponse),
        (status = 404, description = "Patient not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "patients"
)]
pub async fn get_patient(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let patient_id = path.into_inner();

    let patient = web::block(move || state.patients.get_patient(&patient_id)).await??;

    Ok(HttpResponse::Ok().json(GetPatientResponse {
        success: true,
        patient: patient.into(),
    }))
}
