/// Counts read from the inventory table in one consistent snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub total_drugs: i64,
    pub low_stock_items: i64,
    pub expired_drugs: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PharmacyStats {
    pub total_drugs: i64,
    pub low_stock_items: i64,
    pub expired_drugs: i64,
    pub total_prescriptions: i64,
}

impl PharmacyStats {
    pub fn from_parts(inventory: InventorySummary, total_prescriptions: i64) -> Self {
        Self {
            total_drugs: inventory.total_drugs,
            low_stock_items: inventory.low_stock_items,
            expired_drugs: inventory.expired_drugs,
            total_prescriptions,
        }
    }
}
