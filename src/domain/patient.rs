use chrono::{DateTime, Utc};

use super::errors::DomainError;

pub const MAX_PATIENT_ID_CHARS: usize = 64;
pub const MAX_PATIENT_NAME_CHARS: usize = 255;
pub const MAX_PHONE_CHARS: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub patient_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPatient {
    pub patient_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl NewPatient {
    pub fn new(
        patient_id: &str,
        name: &str,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> Result<Self, DomainError> {
        let patient_id = patient_id.trim();
        let name = name.trim();
        if patient_id.is_empty() || name.is_empty() {
            return Err(DomainError::validation("Patient id and name are required"));
        }
        let phone = non_blank(phone);
        check_length("Patient id", patient_id, MAX_PATIENT_ID_CHARS)?;
        check_length("Patient name", name, MAX_PATIENT_NAME_CHARS)?;
        if let Some(phone) = &phone {
            check_length("Phone", phone, MAX_PHONE_CHARS)?;
        }
        Ok(Self {
            patient_id: patient_id.to_string(),
            name: name.to_string(),
            phone,
            address: non_blank(address),
        })
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
