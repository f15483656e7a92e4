use chrono::NaiveDate;

use crate::domain::drug::LOW_STOCK_THRESHOLD;
use crate::domain::errors::DomainError;
use crate::domain::ports::{InventoryRepository, PrescriptionRepository};
use crate::domain::stats::PharmacyStats;

/// Read-only dashboard figures, recomputed on every call.
pub struct StatsService<I, P> {
    inventory: I,
    prescriptions: P,
}

impl<I: InventoryRepository, P: PrescriptionRepository> StatsService<I, P> {
    pub fn new(inventory: I, prescriptions: P) -> Self {
        Self {
            inventory,
            prescriptions,
        }
    }

    pub fn stats(&self, today: NaiveDate) -> Result<PharmacyStats, DomainError> {
        let inventory = self.inventory.summary(LOW_STOCK_THRESHOLD, today)?;
        let total_prescriptions = self.prescriptions.count()?;
        Ok(PharmacyStats::from_parts(inventory, total_prescriptions))
    }
}
