use actix_web::{web, HttpResponse};
use bigdecimal::ToPrimitive;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::today;
use crate::domain::drug::Drug;
use crate::errors::AppError;

use super::{fields, AppState, MessageResponse};

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Fields may be JSON numbers or numeric strings.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddDrugRequest {
    #[schema(value_type = String, example = "Aspirin")]
    pub drug_name: Option<Value>,
    #[schema(value_type = i32, example = 100)]
    pub quantity: Option<Value>,
    #[schema(value_type = f64, example = 5.99)]
    pub price: Option<Value>,
    #[schema(value_type = String, format = Date, example = "2030-01-01")]
    pub expiration_date: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddDrugResponse {
    pub success: bool,
    pub message: String,
    pub drug_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DrugResponse {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub exp_date: NaiveDate,
    /// Derived label: Good, Low Stock, Critical Low, Out of Stock,
    /// Expiring Soon or Expired.
    pub status: String,
}

impl DrugResponse {
    fn new(drug: Drug, today: NaiveDate) -> Self {
        let status = drug.status(today).label().to_string();
        Self {
            id: drug.id,
            name: drug.name,
            quantity: drug.quantity,
            price: drug.price.to_f64().unwrap_or_default(),
            exp_date: drug.expiry_date,
            status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DrugListResponse {
    pub drugs: Vec<DrugResponse>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /getDrugs
///
/// Lists the whole inventory ordered by name.
#[utoipa::path(
    get,
    path = "/getDrugs",
    responses(
        (status = 200, description = "Inventory ordered by name", body = DrugListResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "inventory"
)]
pub async fn get_drugs(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let drugs = web::block(move || state.inventory.list_drugs()).await??;

    let today = today();
    Ok(HttpResponse::Ok().json(DrugListResponse {
        drugs: drugs
            .into_iter()
            .map(|d| DrugResponse::new(d, today))
            .collect(),
    }))
}

/// POST /addDrug
#[utoipa::path(
    post,
    path = "/addDrug",
    request_body = AddDrugRequest,
    responses(
        (status = 200, description = "Drug added", body = AddDrugResponse),
        (status = 400, description = "Missing or invalid field", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "inventory"
)]
pub async fn add_drug(
    state: web::Data<AppState>,
    body: web::Json<AddDrugRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    fields::require_all(&[
        body.drug_name.as_ref(),
        body.quantity.as_ref(),
        body.price.as_ref(),
        body.expiration_date.as_ref(),
    ])?;
    let name = fields::text(body.drug_name.as_ref(), "drugName")?;
    let quantity = fields::int32(body.quantity.as_ref(), "quantity")?;
    let price = fields::decimal(body.price.as_ref(), "price")?;
    let expiry_date = fields::date(body.expiration_date.as_ref(), "expirationDate")?;

    let message = format!("{} added to inventory successfully", name);
    let drug_id = web::block(move || {
        state
            .inventory
            .add_drug(&name, quantity, price, expiry_date)
    })
    .await??;

    Ok(HttpResponse::Ok().json(AddDrugResponse {
        success: true,
        message,
        drug_id,
    }))
}
