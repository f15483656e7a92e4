use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::today;
use crate::domain::stats::PharmacyStats;
use crate::errors::AppError;

use super::{AppState, MessageResponse};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsBody {
    pub total_drugs: i64,
    pub low_stock_items: i64,
    pub expired_drugs: i64,
    pub total_prescriptions: i64,
}

impl From<PharmacyStats> for StatsBody {
    fn from(s: PharmacyStats) -> Self {
        Self {
            total_drugs: s.total_drugs,
            low_stock_items: s.low_stock_items,
            expired_drugs: s.expired_drugs,
            total_prescriptions: s.total_prescriptions,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: StatsBody,
}

/// GET /getStats
#[utoipa::path(
    get,
    path = "/getStats",
    responses(
        (status = 200, description = "Inventory and prescription counts", body = StatsResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "stats"
)]
pub async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = web::block(move || state.stats.stats(today())).await??;

    Ok(HttpResponse::Ok().json(StatsResponse {
        success: true,
        stats: stats.into(),
    }))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use actix_web::{test, web, App};
    use bigdecimal::BigDecimal;
    use chrono::{Days, NaiveDate};
    use serde_json::Value;

    use crate::application::today;
    use crate::domain::drug::NewDrug;
    use crate::domain::ports::{InventoryRepository, PrescriptionRepository};
    use crate::domain::prescription::NewPrescription;
    use crate::handlers::configure;
    use crate::handlers::test_app::memory_state;

    fn new_drug(name: &str, quantity: i32, expiry: NaiveDate) -> NewDrug {
        NewDrug::new(
            name,
            quantity,
            BigDecimal::from_str("2.50").expect("valid decimal"),
            expiry,
        )
        .expect("valid drug")
    }

    #[actix_web::test]
    async fn stats_reflect_inventory_and_prescriptions() {
        let (state, store) = memory_state();
        let next_year = today() + Days::new(365);
        let yesterday = today() - Days::new(1);
        let aspirin = store
            .add(new_drug("Aspirin", 100, next_year))
            .expect("add");
        store.add(new_drug("Paracetamol", 4, next_year)).expect("add");
        store.add(new_drug("Ibuprofen", 50, yesterday)).expect("add");
        store
            .issue(
                NewPrescription::new("P-001", aspirin, "1 tablet", today())
                    .expect("valid prescription"),
            )
            .expect("issue");

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/getStats").to_request();
        let resp: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["success"], true);
        assert_eq!(resp["stats"]["totalDrugs"], 3);
        assert_eq!(resp["stats"]["lowStockItems"], 1);
        assert_eq!(resp["stats"]["expiredDrugs"], 1);
        assert_eq!(resp["stats"]["totalPrescriptions"], 1);
    }
}
