//! In-memory adapter used by service and handler tests. A single mutex
//! serializes every write, which gives issuance the same all-or-nothing
//! behaviour as the Postgres transaction.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};

use crate::domain::drug::{Drug, DrugId, NewDrug};
use crate::domain::errors::DomainError;
use crate::domain::patient::{NewPatient, Patient};
use crate::domain::ports::{InventoryRepository, PatientRepository, PrescriptionRepository};
use crate::domain::prescription::{
    IssuedPrescription, NewPrescription, Prescription, PrescriptionDetails, PrescriptionId,
};
use crate::domain::stats::InventorySummary;

#[derive(Debug, Default)]
struct State {
    drugs: BTreeMap<DrugId, Drug>,
    prescriptions: BTreeMap<PrescriptionId, Prescription>,
    patients: BTreeMap<String, Patient>,
    next_drug_id: DrugId,
    next_prescription_id: PrescriptionId,
}

impl State {
    fn details(&self, p: &Prescription) -> Option<PrescriptionDetails> {
        let drug = self.drugs.get(&p.drug_id)?;
        Some(PrescriptionDetails {
            id: p.id,
            patient_id: p.patient_id.clone(),
            drug_id: p.drug_id,
            drug_name: drug.name.clone(),
            drug_price: drug.price.clone(),
            dosage: p.dosage.clone(),
            issue_date: p.issue_date,
            created_at: p.created_at,
        })
    }
}

#[derive(Debug, Default)]
pub(crate) struct InMemoryPharmacy {
    state: Mutex<State>,
}

impl InMemoryPharmacy {
    fn lock(&self) -> Result<MutexGuard<'_, State>, DomainError> {
        self.state
            .lock()
            .map_err(|_| DomainError::Store("in-memory store poisoned".to_string()))
    }
}

impl InventoryRepository for InMemoryPharmacy {
    fn add(&self, drug: NewDrug) -> Result<DrugId, DomainError> {
        let mut state = self.lock()?;
        state.next_drug_id += 1;
        let id = state.next_drug_id;
        let now = Utc::now();
        state.drugs.insert(
            id,
            Drug {
                id,
                name: drug.name,
                quantity: drug.quantity,
                price: drug.price,
                expiry_date: drug.expiry_date,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Drug>, DomainError> {
        let mut drugs: Vec<Drug> = self.lock()?.drugs.values().cloned().collect();
        drugs.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(drugs)
    }

    fn find_by_id(&self, id: DrugId) -> Result<Option<Drug>, DomainError> {
        Ok(self.lock()?.drugs.get(&id).cloned())
    }

    fn decrement_stock(&self, id: DrugId, amount: i32) -> Result<Drug, DomainError> {
        let mut state = self.lock()?;
        let drug = state.drugs.get_mut(&id).ok_or(DomainError::DrugNotFound)?;
        if drug.quantity < amount {
            return Err(DomainError::InsufficientStock {
                requested: amount,
                available: drug.quantity,
            });
        }
        drug.quantity -= amount;
        drug.updated_at = Utc::now();
        Ok(drug.clone())
    }

    fn summary(
        &self,
        low_stock_threshold: i32,
        today: NaiveDate,
    ) -> Result<InventorySummary, DomainError> {
        let state = self.lock()?;
        let count = |pred: &dyn Fn(&Drug) -> bool| state.drugs.values().filter(|d| pred(d)).count();
        Ok(InventorySummary {
            total_drugs: state.drugs.len() as i64,
            low_stock_items: count(&|d| d.quantity <= low_stock_threshold) as i64,
            expired_drugs: count(&|d| d.expiry_date < today) as i64,
        })
    }
}

impl PrescriptionRepository for InMemoryPharmacy {
    fn issue(&self, prescription: NewPrescription) -> Result<IssuedPrescription, DomainError> {
        let mut state = self.lock()?;
        let drug = state
            .drugs
            .get_mut(&prescription.drug_id)
            .ok_or(DomainError::DrugNotFound)?;
        if drug.quantity <= 0 {
            return Err(DomainError::OutOfStock(drug.name.clone()));
        }
        drug.quantity -= 1;
        drug.updated_at = Utc::now();
        let (drug_name, drug_price, remaining_stock) =
            (drug.name.clone(), drug.price.clone(), drug.quantity);

        state.next_prescription_id += 1;
        let row = Prescription {
            id: state.next_prescription_id,
            patient_id: prescription.patient_id,
            drug_id: prescription.drug_id,
            dosage: prescription.dosage,
            issue_date: prescription.issue_date,
            created_at: Utc::now(),
        };
        state.prescriptions.insert(row.id, row.clone());

        Ok(IssuedPrescription {
            prescription: row,
            drug_name,
            drug_price,
            remaining_stock,
        })
    }

    fn list(&self) -> Result<Vec<PrescriptionDetails>, DomainError> {
        let state = self.lock()?;
        let mut rows: Vec<PrescriptionDetails> = state
            .prescriptions
            .values()
            .filter_map(|p| state.details(p))
            .collect();
        rows.sort_by(|a, b| {
            b.issue_date
                .cmp(&a.issue_date)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    fn find_by_id(&self, id: PrescriptionId) -> Result<Option<PrescriptionDetails>, DomainError> {
        let state = self.lock()?;
        Ok(state.prescriptions.get(&id).and_then(|p| state.details(p)))
    }

    fn count(&self) -> Result<i64, DomainError> {
        Ok(self.lock()?.prescriptions.len() as i64)
    }
}

impl PatientRepository for InMemoryPharmacy {
    fn register(&self, patient: NewPatient) -> Result<Patient, DomainError> {
        let mut state = self.lock()?;
        if state.patients.contains_key(&patient.patient_id) {
            return Err(DomainError::PatientExists(patient.patient_id));
        }
        let row = Patient {
            patient_id: patient.patient_id,
            name: patient.name,
            phone: patient.phone,
            address: patient.address,
            created_at: Utc::now(),
        };
        state.patients.insert(row.patient_id.clone(), row.clone());
        Ok(row)
    }

    fn find_by_id(&self, patient_id: &str) -> Result<Option<Patient>, DomainError> {
        Ok(self.lock()?.patients.get(patient_id).cloned())
    }

    fn list(&self) -> Result<Vec<Patient>, DomainError> {
        let mut patients: Vec<Patient> = self.lock()?.patients.values().cloned().collect();
        patients.sort_by(|a, b| a.name.cmp(&b.name).then(a.patient_id.cmp(&b.patient_id)));
        Ok(patients)
    }
}
