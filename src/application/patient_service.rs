use crate::domain::errors::DomainError;
use crate::domain::patient::{NewPatient, Patient};
use crate::domain::ports::PatientRepository;

pub struct PatientService<R> {
    repo: R,
}

impl<R: PatientRepository> PatientService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn register_patient(
        &self,
        patient_id: &str,
        name: &str,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> Result<Patient, DomainError> {
        let patient = self
            .repo
            .register(NewPatient::new(patient_id, name, phone, address)?)?;
        log::info!("Registered patient {}", patient.patient_id);
        Ok(patient)
    }

    pub fn get_patient(&self, patient_id: &str) -> Result<Patient, DomainError> {
        self.repo
            .find_by_id(patient_id)?
            .ok_or(DomainError::PatientNotFound)
    }

    pub fn list_patients(&self) -> Result<Vec<Patient>, DomainError> {
        self.repo.list()
    }
}
