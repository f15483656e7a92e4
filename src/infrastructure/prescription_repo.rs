use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::PrescriptionRepository;
use crate::domain::prescription::{
    IssuedPrescription, NewPrescription, PrescriptionDetails, PrescriptionId,
};
use crate::schema::{inventory, prescriptions};

use super::inventory_repo::decrement_stock_in;
use super::models::{DrugRow, NewPrescriptionRow, PrescriptionRow};

type DetailsRow = (PrescriptionRow, String, BigDecimal);

fn into_details((p, drug_name, drug_price): DetailsRow) -> PrescriptionDetails {
    PrescriptionDetails {
        id: p.id,
        patient_id: p.patient_id,
        drug_id: p.drug_id,
        drug_name,
        drug_price,
        dosage: p.dosage,
        issue_date: p.issue_dt,
        created_at: p.created_at,
    }
}

pub struct DieselPrescriptionRepository {
    pool: DbPool,
}

impl DieselPrescriptionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl PrescriptionRepository for DieselPrescriptionRepository {
    fn issue(&self, prescription: NewPrescription) -> Result<IssuedPrescription, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Lock the drug row. A concurrent issuer waits here until we
            //    commit and then sees the decremented quantity.
            let drug = inventory::table
                .find(prescription.drug_id)
                .select(DrugRow::as_select())
                .for_update()
                .first(conn)
                .optional()?
                .ok_or(DomainError::DrugNotFound)?;

            if drug.quantity <= 0 {
                return Err(DomainError::OutOfStock(drug.name));
            }

            // 2. Record the prescription.
            let row = diesel::insert_into(prescriptions::table)
                .values(&NewPrescriptionRow::from(prescription))
                .returning(PrescriptionRow::as_returning())
                .get_result(conn)?;

            // 3. Take one unit out of stock. Any error here rolls back the insert.
            let updated = decrement_stock_in(conn, drug.id, 1).map_err(|e| match e {
                DomainError::InsufficientStock { .. } => DomainError::OutOfStock(drug.name.clone()),
                other => other,
            })?;

            Ok(IssuedPrescription {
                prescription: row.into(),
                drug_name: updated.name,
                drug_price: updated.price,
                remaining_stock: updated.quantity,
            })
        })
    }

    fn list(&self) -> Result<Vec<PrescriptionDetails>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = prescriptions::table
            .inner_join(inventory::table)
            .select((PrescriptionRow::as_select(), inventory::name, inventory::price))
            .order((
                prescriptions::issue_dt.desc(),
                prescriptions::created_at.desc(),
                prescriptions::id.desc(),
            ))
            .load::<DetailsRow>(&mut conn)?;
        Ok(rows.into_iter().map(into_details).collect())
    }

    fn find_by_id(&self, id: PrescriptionId) -> Result<Option<PrescriptionDetails>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = prescriptions::table
            .inner_join(inventory::table)
            .filter(prescriptions::id.eq(id))
            .select((PrescriptionRow::as_select(), inventory::name, inventory::price))
            .first::<DetailsRow>(&mut conn)
            .optional()?;
        Ok(row.map(into_details))
    }

    fn count(&self) -> Result<i64, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(prescriptions::table.count().get_result(&mut conn)?)
    }
}
