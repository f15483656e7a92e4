use std::sync::Arc;

use chrono::NaiveDate;

use super::drug::{Drug, DrugId, NewDrug};
use super::errors::DomainError;
use super::patient::{NewPatient, Patient};
use super::prescription::{IssuedPrescription, NewPrescription, PrescriptionDetails, PrescriptionId};
use super::stats::InventorySummary;

pub trait InventoryRepository: Send + Sync + 'static {
    fn add(&self, drug: NewDrug) -> Result<DrugId, DomainError>;
    /// All drugs ordered by name.
    fn list(&self) -> Result<Vec<Drug>, DomainError>;
    fn find_by_id(&self, id: DrugId) -> Result<Option<Drug>, DomainError>;
    /// Atomically reduce stock by `amount`, failing if fewer are on hand.
    fn decrement_stock(&self, id: DrugId, amount: i32) -> Result<Drug, DomainError>;
    fn summary(
        &self,
        low_stock_threshold: i32,
        today: NaiveDate,
    ) -> Result<InventorySummary, DomainError>;
}

pub trait PrescriptionRepository: Send + Sync + 'static {
    /// Check stock, record the prescription and decrement the drug as one unit.
    fn issue(&self, prescription: NewPrescription) -> Result<IssuedPrescription, DomainError>;
    /// Newest issue date first.
    fn list(&self) -> Result<Vec<PrescriptionDetails>, DomainError>;
    fn find_by_id(&self, id: PrescriptionId) -> Result<Option<PrescriptionDetails>, DomainError>;
    fn count(&self) -> Result<i64, DomainError>;
}

pub trait PatientRepository: Send + Sync + 'static {
    fn register(&self, patient: NewPatient) -> Result<Patient, DomainError>;
    fn find_by_id(&self, patient_id: &str) -> Result<Option<Patient>, DomainError>;
    fn list(&self) -> Result<Vec<Patient>, DomainError>;
}

impl<T: InventoryRepository + ?Sized> InventoryRepository for Arc<T> {
    fn add(&self, drug: NewDrug) -> Result<DrugId, DomainError> {
        (**self).add(drug)
    }

    fn list(&self) -> Result<Vec<Drug>, DomainError> {
        (**self).list()
    }

    fn find_by_id(&self, id: DrugId) -> Result<Option<Drug>, DomainError> {
        (**self).find_by_id(id)
    }

    fn decrement_stock(&self, id: DrugId, amount: i32) -> Result<Drug, DomainError> {
        (**self).decrement_stock(id, amount)
    }

    fn summary(
        &self,
        low_stock_threshold: i32,
        today: NaiveDate,
    ) -> Result<InventorySummary, DomainError> {
        (**self).summary(low_stock_threshold, today)
    }
}

impl<T: PrescriptionRepository + ?Sized> PrescriptionRepository for Arc<T> {
    fn issue(&self, prescription: NewPrescription) -> Result<IssuedPrescription, DomainError> {
        (**self).issue(prescription)
    }

    fn list(&self) -> Result<Vec<PrescriptionDetails>, DomainError> {
        (**self).list()
    }

    fn find_by_id(&self, id: PrescriptionId) -> Result<Option<PrescriptionDetails>, DomainError> {
        (**self).find_by_id(id)
    }

    fn count(&self) -> Result<i64, DomainError> {
        (**self).count()
    }
}

impl<T: PatientRepository + ?Sized> PatientRepository for Arc<T> {
    fn register(&self, patient: NewPatient) -> Result<Patient, DomainError> {
        (**self).register(patient)
    }

    fn find_by_id(&self, patient_id: &str) -> Result<Option<Patient>, DomainError> {
        (**self).find_by_id(patient_id)
    }

    fn list(&self) -> Result<Vec<Patient>, DomainError> {
        (**self).list()
    }
}
