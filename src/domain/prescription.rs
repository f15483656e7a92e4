use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};

use super::drug::DrugId;
use super::errors::DomainError;
use super::patient::MAX_PATIENT_ID_CHARS;

pub type PrescriptionId = i32;

#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub id: PrescriptionId,
    pub patient_id: String,
    pub drug_id: DrugId,
    pub dosage: String,
    pub issue_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A validated prescription request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPrescription {
    pub patient_id: String,
    pub drug_id: DrugId,
    pub dosage: String,
    pub issue_date: NaiveDate,
}

impl NewPrescription {
    pub fn new(
        patient_id: &str,
        drug_id: DrugId,
        dosage: &str,
        issue_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        let patient_id = patient_id.trim();
        let dosage = dosage.trim();
        if patient_id.is_empty() || dosage.is_empty() {
            return Err(DomainError::validation("All fields are required"));
        }
        if patient_id.chars().count() > MAX_PATIENT_ID_CHARS {
            return Err(DomainError::Validation(format!(
                "Patient id must be at most {} characters",
                MAX_PATIENT_ID_CHARS
            )));
        }
        if drug_id <= 0 {
            return Err(DomainError::validation("Drug id must be a positive integer"));
        }
        Ok(Self {
            patient_id: patient_id.to_string(),
            drug_id,
            dosage: dosage.to_string(),
            issue_date,
        })
    }
}

/// Outcome of a successful issuance. Drug name and price are captured in the
/// same transaction so callers can print without another lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedPrescription {
    pub prescription: Prescription,
    pub drug_name: String,
    pub drug_price: BigDecimal,
    pub remaining_stock: i32,
}

/// A prescription joined with its drug's current name and price.
#[derive(Debug, Clone, PartialEq)]
pub struct PrescriptionDetails {
    pub id: PrescriptionId,
    pub patient_id: String,
    pub drug_id: DrugId,
    pub drug_name: String,
    pub drug_price: BigDecimal,
    pub dosage: String,
    pub issue_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
