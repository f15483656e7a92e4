use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::drug::{Drug, NewDrug};
use crate::domain::patient::{NewPatient, Patient};
use crate::domain::prescription::{NewPrescription, Prescription};
use crate::schema::{inventory, patients, prescriptions};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = inventory)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DrugRow {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub exp_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DrugRow> for Drug {
    fn from(row: DrugRow) -> Self {
        Drug {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            price: row.price,
            expiry_date: row.exp_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = inventory)]
pub struct NewDrugRow {
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub exp_date: NaiveDate,
}

impl From<NewDrug> for NewDrugRow {
    fn from(drug: NewDrug) -> Self {
        NewDrugRow {
            name: drug.name,
            quantity: drug.quantity,
            price: drug.price,
            exp_date: drug.expiry_date,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = prescriptions)]
#[diesel(belongs_to(DrugRow, foreign_key = drug_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PrescriptionRow {
    pub id: i32,
    pub patient_id: String,
    pub drug_id: i32,
    pub dosage: String,
    pub issue_dt: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<PrescriptionRow> for Prescription {
    fn from(row: PrescriptionRow) -> Self {
        Prescription {
            id: row.id,
            patient_id: row.patient_id,
            drug_id: row.drug_id,
            dosage: row.dosage,
            issue_date: row.issue_dt,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = prescriptions)]
pub struct NewPrescriptionRow {
    pub patient_id: String,
    pub drug_id: i32,
    pub dosage: String,
    pub issue_dt: NaiveDate,
}

impl From<NewPrescription> for NewPrescriptionRow {
    fn from(p: NewPrescription) -> Self {
        NewPrescriptionRow {
            patient_id: p.patient_id,
            drug_id: p.drug_id,
            dosage: p.dosage,
            issue_dt: p.issue_date,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = patients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PatientRow {
    pub patient_id: String,
    pub patient_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Patient {
            patient_id: row.patient_id,
            name: row.patient_name,
            phone: row.phone,
            address: row.address,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = patients)]
pub struct NewPatientRow {
    pub patient_id: String,
    pub patient_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<NewPatient> for NewPatientRow {
    fn from(p: NewPatient) -> Self {
        NewPatientRow {
            patient_id: p.patient_id,
            patient_name: p.name,
            phone: p.phone,
            address: p.address,
        }
    }
}
