pub mod drugs;
pub mod fields;
pub mod patients;
pub mod prescriptions;
pub mod stats;

use std::sync::Arc;

use actix_web::web;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::application::inventory_service::InventoryService;
use crate::application::patient_service::PatientService;
use crate::application::prescription_service::PrescriptionService;
use crate::application::stats_service::StatsService;
use crate::db::DbPool;
use crate::domain::ports::{InventoryRepository, PatientRepository, PrescriptionRepository};
use crate::errors::AppError;
use crate::infrastructure::inventory_repo::DieselInventoryRepository;
use crate::infrastructure::patient_repo::DieselPatientRepository;
use crate::infrastructure::prescription_repo::DieselPrescriptionRepository;

pub type SharedInventory = Arc<dyn InventoryRepository>;
pub type SharedPrescriptions = Arc<dyn PrescriptionRepository>;
pub type SharedPatients = Arc<dyn PatientRepository>;

/// Services shared by every worker.
pub struct AppState {
    pub inventory: InventoryService<SharedInventory>,
    pub prescriptions: PrescriptionService<SharedPrescriptions>,
    pub stats: StatsService<SharedInventory, SharedPrescriptions>,
    pub patients: PatientService<SharedPatients>,
}

impl AppState {
    pub fn new(
        inventory: SharedInventory,
        prescriptions: SharedPrescriptions,
        patients: SharedPatients,
    ) -> Self {
        Self {
            inventory: InventoryService::new(Arc::clone(&inventory)),
            prescriptions: PrescriptionService::new(Arc::clone(&prescriptions)),
            stats: StatsService::new(inventory, prescriptions),
            patients: PatientService::new(patients),
        }
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(
            Arc::new(DieselInventoryRepository::new(pool.clone())),
            Arc::new(DieselPrescriptionRepository::new(pool.clone())),
            Arc::new(DieselPatientRepository::new(pool)),
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        drugs::get_drugs,
        drugs::add_drug,
        prescriptions::issue_prescription,
        prescriptions::get_prescriptions,
        prescriptions::get_prescription,
        stats::get_stats,
        patients::add_patient,
        patients::get_patients,
        patients::get_patient,
    ),
    components(schemas(MessageResponse)),
    tags(
        (name = "inventory", description = "Drug stock"),
        (name = "prescriptions", description = "Issuing and viewing prescriptions"),
        (name = "stats", description = "Dashboard figures"),
        (name = "patients", description = "Patient register"),
    )
)]
pub struct ApiDoc;

/// Register every route plus JSON and path extractors that report malformed
/// input in the same `{success, message}` shape as other errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid request body: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid path: {}", err)).into()
    }))
    .route("/getDrugs", web::get().to(drugs::get_drugs))
    .route("/addDrug", web::post().to(drugs::add_drug))
    .route(
        "/issuePrescription",
        web::post().to(prescriptions::issue_prescription),
    )
    .route(
        "/getPrescriptions",
        web::get().to(prescriptions::get_prescriptions),
    )
    .route(
        "/getPrescription/{id}",
        web::get().to(prescriptions::get_prescription),
    )
    .route("/getStats", web::get().to(stats::get_stats))
    .route("/addPatient", web::post().to(patients::add_patient))
    .route("/getPatients", web::get().to(patients::get_patients))
    .route("/getPatient/{id}", web::get().to(patients::get_patient));
}

#[cfg(test)]
pub(crate) mod test_app {
    use std::sync::Arc;

    use super::AppState;
    use crate::infrastructure::memory::InMemoryPharmacy;

    /// App state backed by one in-memory store, returned alongside it so
    /// tests can inspect what the handlers wrote.
    pub(crate) fn memory_state() -> (AppState, Arc<InMemoryPharmacy>) {
        let store = Arc::new(InMemoryPharmacy::default());
        let state = AppState::new(store.clone(), store.clone(), store.clone());
        (state, store)
    }
}
