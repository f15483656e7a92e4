use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::patient::{NewPatient, Patient};
use crate::domain::ports::PatientRepository;
use crate::schema::patients;

use super::models::{NewPatientRow, PatientRow};

pub struct DieselPatientRepository {
    pool: DbPool,
}

impl DieselPatientRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl PatientRepository for DieselPatientRepository {
    fn register(&self, patient: NewPatient) -> Result<Patient, DomainError> {
        let mut conn = self.pool.get()?;
        let patient_id = patient.patient_id.clone();

        diesel::insert_into(patients::table)
            .values(&NewPatientRow::from(patient))
            .returning(PatientRow::as_returning())
            .get_result(&mut conn)
            .map(Patient::from)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    DomainError::PatientExists(patient_id)
                }
                other => other.into(),
            })
    }

    fn find_by_id(&self, patient_id: &str) -> Result<Option<Patient>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = patients::table
            .find(patient_id)
            .select(PatientRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Patient::from))
    }

    fn list(&self) -> Result<Vec<Patient>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = patients::table
            .select(PatientRow::as_select())
            .order((patients::patient_name.asc(), patients::patient_id.asc()))
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Patient::from).collect())
    }
}
