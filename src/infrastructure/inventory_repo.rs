use chrono::{NaiveDate, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::drug::{Drug, DrugId, NewDrug};
use crate::domain::errors::DomainError;
use crate::domain::ports::InventoryRepository;
use crate::domain::stats::InventorySummary;
use crate::schema::inventory;

use super::models::{DrugRow, NewDrugRow};

/// Take `amount` units of drug `id` out of stock.
///
/// The check and the decrement are one conditional `UPDATE`, so concurrent
/// callers serialize on the row lock and the second one re-reads the
/// committed quantity. When nothing matches, a follow-up read tells a
/// missing drug apart from one without enough stock.
pub(crate) fn decrement_stock_in(
    conn: &mut PgConnection,
    id: DrugId,
    amount: i32,
) -> Result<DrugRow, DomainError> {
    let updated = diesel::update(
        inventory::table
            .filter(inventory::id.eq(id))
            .filter(inventory::quantity.ge(amount)),
    )
    .set((
        inventory::quantity.eq(inventory::quantity - amount),
        inventory::updated_at.eq(Utc::now()),
    ))
    .returning(DrugRow::as_returning())
    .get_result(conn)
    .optional()?;

    if let Some(row) = updated {
        return Ok(row);
    }

    let available = inventory::table
        .find(id)
        .select(inventory::quantity)
        .first::<i32>(conn)
        .optional()?;

    match available {
        Some(available) => Err(DomainError::InsufficientStock {
            requested: amount,
            available,
        }),
        None => Err(DomainError::DrugNotFound),
    }
}

pub struct DieselInventoryRepository {
    pool: DbPool,
}

impl DieselInventoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl InventoryRepository for DieselInventoryRepository {
    fn add(&self, drug: NewDrug) -> Result<DrugId, DomainError> {
        let mut conn = self.pool.get()?;

        let id = diesel::insert_into(inventory::table)
            .values(&NewDrugRow::from(drug))
            .returning(inventory::id)
            .get_result(&mut conn)?;
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Drug>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = inventory::table
            .select(DrugRow::as_select())
            .order((inventory::name.asc(), inventory::id.asc()))
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Drug::from).collect())
    }

    fn find_by_id(&self, id: DrugId) -> Result<Option<Drug>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = inventory::table
            .find(id)
            .select(DrugRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Drug::from))
    }

    fn decrement_stock(&self, id: DrugId, amount: i32) -> Result<Drug, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| decrement_stock_in(conn, id, amount))
            .map(Drug::from)
    }

    fn summary(
        &self,
        low_stock_threshold: i32,
        today: NaiveDate,
    ) -> Result<InventorySummary, DomainError> {
        let mut conn = self.pool.get()?;

        // One read-only transaction so the three counts see the same snapshot.
        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run::<_, DomainError, _>(|conn| {
                let total_drugs: i64 = inventory::table.count().get_result(conn)?;
                let low_stock_items: i64 = inventory::table
                    .filter(inventory::quantity.le(low_stock_threshold))
                    .count()
                    .get_result(conn)?;
                let expired_drugs: i64 = inventory::table
                    .filter(inventory::exp_date.lt(today))
                    .count()
                    .get_result(conn)?;

                Ok(InventorySummary {
                    total_drugs,
                    low_stock_items,
                    expired_drugs,
                })
            })
    }
}
