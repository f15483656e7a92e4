use chrono::NaiveDate;

use crate::domain::drug::DrugId;
use crate::domain::errors::DomainError;
use crate::domain::ports::PrescriptionRepository;
use crate::domain::prescription::{
    IssuedPrescription, NewPrescription, PrescriptionDetails, PrescriptionId,
};

pub struct PrescriptionService<R> {
    repo: R,
}

impl<R: PrescriptionRepository> PrescriptionService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate the request, then record it and take one unit of the drug
    /// out of stock. Either both happen or neither does.
    pub fn issue_prescription(
        &self,
        patient_id: &str,
        drug_id: DrugId,
        dosage: &str,
        issue_date: NaiveDate,
    ) -> Result<IssuedPrescription, DomainError> {
        let request = NewPrescription::new(patient_id, drug_id, dosage, issue_date)?;

        match self.repo.issue(request) {
            Ok(issued) => {
                log::info!(
                    "Issued prescription {} of {} to patient {}, {} left in stock",
                    issued.prescription.id,
                    issued.drug_name,
                    issued.prescription.patient_id,
                    issued.remaining_stock
                );
                Ok(issued)
            }
            Err(e @ (DomainError::DrugNotFound | DomainError::OutOfStock(_))) => {
                log::warn!("Prescription for drug {} rejected: {}", drug_id, e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub fn get_prescriptions(&self) -> Result<Vec<PrescriptionDetails>, DomainError> {
        self.repo.list()
    }

    pub fn get_prescription(&self, id: PrescriptionId) -> Result<PrescriptionDetails, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or(DomainError::PrescriptionNotFound)
    }
}
