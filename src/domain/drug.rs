use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, NaiveDate, Utc};

use super::errors::DomainError;

pub type DrugId = i32;

/// Quantity at or below which a drug counts as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;
/// Quantity at or below which a drug counts as critically low.
pub const CRITICAL_STOCK_THRESHOLD: i32 = 5;
/// Days before expiry at which a drug is flagged as expiring soon.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Column limits of `inventory`: `VARCHAR(255)` name, `NUMERIC(10, 2)` price.
pub const MAX_DRUG_NAME_CHARS: usize = 255;
const PRICE_SCALE: i64 = 2;
const PRICE_INTEGER_DIGITS: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Drug {
    pub id: DrugId,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub expiry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Drug {
    pub fn status(&self, today: NaiveDate) -> StockStatus {
        StockStatus::evaluate(self.quantity, self.expiry_date, today)
    }
}

/// A validated drug that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDrug {
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub expiry_date: NaiveDate,
}

impl NewDrug {
    pub fn new(
        name: &str,
        quantity: i32,
        price: BigDecimal,
        expiry_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Drug name is required"));
        }
        if name.chars().count() > MAX_DRUG_NAME_CHARS {
            return Err(DomainError::Validation(format!(
                "Drug name must be at most {} characters",
                MAX_DRUG_NAME_CHARS
            )));
        }
        if quantity <= 0 {
            return Err(DomainError::validation("Quantity must be greater than 0"));
        }
        if price < BigDecimal::zero() {
            return Err(DomainError::validation("Price cannot be negative"));
        }
        if price.with_scale(PRICE_SCALE) != price {
            return Err(DomainError::validation(
                "Price must have at most 2 decimal places",
            ));
        }
        if price >= BigDecimal::from(10u64.pow(PRICE_INTEGER_DIGITS)) {
            return Err(DomainError::validation("Price must be less than 100000000"));
        }
        Ok(Self {
            name: name.to_string(),
            quantity,
            price,
            expiry_date,
        })
    }
}

/// Display status derived from stock level and expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Good,
    LowStock,
    CriticalLow,
    OutOfStock,
    ExpiringSoon,
    Expired,
}

impl StockStatus {
    /// Expiry wins over stock level: expired, expiring soon, out of stock,
    /// critically low, low, good.
    pub fn evaluate(quantity: i32, expiry_date: NaiveDate, today: NaiveDate) -> Self {
        let days_until_expiry = (expiry_date - today).num_days();
        if days_until_expiry < 0 {
            StockStatus::Expired
        } else if days_until_expiry < EXPIRY_WARNING_DAYS {
            StockStatus::ExpiringSoon
        } else if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity <= CRITICAL_STOCK_THRESHOLD {
            StockStatus::CriticalLow
        } else if quantity <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::Good
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Good => "Good",
            StockStatus::LowStock => "Low Stock",
            StockStatus::CriticalLow => "Critical Low",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::ExpiringSoon => "Expiring Soon",
            StockStatus::Expired => "Expired",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).expect("valid date")
    }

    fn price(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    #[test]
    fn new_drug_trims_name() {
        let drug = NewDrug::new("  Aspirin ", 100, price("5.99"), date("2030-01-01"))
            .expect("valid drug");
        assert_eq!(drug.name, "Aspirin");
        assert_eq!(drug.quantity, 100);
    }

    #[test]
    fn new_drug_rejects_blank_name() {
        let err = NewDrug::new("   ", 1, price("1.00"), date("2030-01-01")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_drug_rejects_non_positive_quantity() {
        for quantity in [0, -1] {
            let err = NewDrug::new("Aspirin", quantity, price("1.00"), date("2030-01-01"))
                .unwrap_err();
            assert_eq!(err.to_string(), "Quantity must be greater than 0");
        }
    }

    #[test]
    fn new_drug_rejects_negative_price() {
        let err = NewDrug::new("Aspirin", 1, price("-0.01"), date("2030-01-01")).unwrap_err();
        assert_eq!(err.to_string(), "Price cannot be negative");
    }

    #[test]
    fn new_drug_rejects_name_longer_than_column() {
        let name = "A".repeat(MAX_DRUG_NAME_CHARS + 1);
        let err = NewDrug::new(&name, 1, price("1.00"), date("2030-01-01")).unwrap_err();
        assert_eq!(err.to_string(), "Drug name must be at most 255 characters");

        let name = "é".repeat(MAX_DRUG_NAME_CHARS);
        assert!(NewDrug::new(&name, 1, price("1.00"), date("2030-01-01")).is_ok());
    }

    #[test]
    fn new_drug_rejects_sub_cent_price() {
        let err = NewDrug::new("Aspirin", 1, price("5.999"), date("2030-01-01")).unwrap_err();
        assert_eq!(err.to_string(), "Price must have at most 2 decimal places");

        let drug = NewDrug::new("Aspirin", 1, price("5.990"), date("2030-01-01"))
            .expect("trailing zero is still cents");
        assert_eq!(drug.price, price("5.99"));
    }

    #[test]
    fn new_drug_rejects_price_beyond_column_precision() {
        let err = NewDrug::new("Aspirin", 1, price("100000000"), date("2030-01-01"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Price must be less than 100000000");
        assert!(NewDrug::new("Aspirin", 1, price("99999999.99"), date("2030-01-01")).is_ok());
    }

    #[test]
    fn new_drug_accepts_zero_price() {
        assert!(NewDrug::new("Sample", 1, price("0"), date("2030-01-01")).is_ok());
    }

    #[test]
    fn expired_takes_precedence_over_stock() {
        let today = date("2025-06-01");
        assert_eq!(
            StockStatus::evaluate(0, date("2025-05-31"), today),
            StockStatus::Expired
        );
    }

    #[test]
    fn expiring_soon_takes_precedence_over_low_stock() {
        let today = date("2025-06-01");
        assert_eq!(
            StockStatus::evaluate(3, date("2025-06-30"), today),
            StockStatus::ExpiringSoon
        );
        assert_eq!(
            StockStatus::evaluate(3, date("2025-06-01"), today),
            StockStatus::ExpiringSoon
        );
    }

    #[test]
    fn stock_levels_when_expiry_is_far() {
        let today = date("2025-06-01");
        let far = date("2025-07-01");
        assert_eq!(StockStatus::evaluate(0, far, today), StockStatus::OutOfStock);
        assert_eq!(StockStatus::evaluate(5, far, today), StockStatus::CriticalLow);
        assert_eq!(StockStatus::evaluate(6, far, today), StockStatus::LowStock);
        assert_eq!(StockStatus::evaluate(10, far, today), StockStatus::LowStock);
        assert_eq!(StockStatus::evaluate(11, far, today), StockStatus::Good);
    }

    #[test]
    fn labels() {
        assert_eq!(StockStatus::CriticalLow.label(), "Critical Low");
        assert_eq!(StockStatus::OutOfStock.label(), "Out of Stock");
    }
}
