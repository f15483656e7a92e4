use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::domain::drug::{Drug, DrugId, NewDrug};
use crate::domain::errors::DomainError;
use crate::domain::ports::InventoryRepository;

pub struct InventoryService<R> {
    repo: R,
}

impl<R: InventoryRepository> InventoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_drug(
        &self,
        name: &str,
        quantity: i32,
        price: BigDecimal,
        expiry_date: NaiveDate,
    ) -> Result<DrugId, DomainError> {
        let drug = NewDrug::new(name, quantity, price, expiry_date)?;
        let name = drug.name.clone();
        let id = self.repo.add(drug)?;
        log::info!("Added drug {} ({}) with quantity {}", id, name, quantity);
        Ok(id)
    }

    pub fn list_drugs(&self) -> Result<Vec<Drug>, DomainError> {
        self.repo.list()
    }

    pub fn get_drug(&self, id: DrugId) -> Result<Drug, DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::DrugNotFound)
    }

    pub fn decrement_stock(&self, id: DrugId, amount: i32) -> Result<Drug, DomainError> {
        if amount <= 0 {
            return Err(DomainError::validation("Amount must be greater than 0"));
        }
        let drug = self.repo.decrement_stock(id, amount)?;
        log::info!(
            "Decremented stock of drug {} by {}, {} remaining",
            id,
            amount,
            drug.quantity
        );
        Ok(drug)
    }
}
