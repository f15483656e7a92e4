use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("Drug not found in inventory")]
    DrugNotFound,
    #[error("{0} is out of stock")]
    OutOfStock(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i32, available: i32 },
    #[error("Prescription not found")]
    PrescriptionNotFound,
    #[error("Patient not found")]
    PatientNotFound,
    #[error("Patient {0} already exists")]
    PatientExists(String),
    #[error("Store error: {0}")]
    Store(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}
