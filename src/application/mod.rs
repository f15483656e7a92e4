pub mod inventory_service;
pub mod patient_service;
pub mod prescription_service;
pub mod stats_service;

use chrono::{Local, NaiveDate};

/// The pharmacy's calendar date, used for expiry checks.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
