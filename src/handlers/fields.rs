//! Decoding of loosely typed form fields. The browser sends `drugId` as a
//! string and numbers as numbers, so numeric fields accept either.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::errors::DomainError;

pub const MISSING_FIELDS: &str = "All fields are required";

/// Absent, `null` and blank strings count as missing; `0` does not.
fn present(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(v) => Some(v),
    }
}

pub fn require_all(values: &[Option<&Value>]) -> Result<(), DomainError> {
    if values.iter().all(|v| present(*v).is_some()) {
        Ok(())
    } else {
        Err(DomainError::validation(MISSING_FIELDS))
    }
}

fn invalid(field: &str) -> DomainError {
    DomainError::Validation(format!("Invalid value for {}", field))
}

pub fn text(value: Option<&Value>, field: &str) -> Result<String, DomainError> {
    match present(value) {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(invalid(field)),
        None => Err(DomainError::validation(MISSING_FIELDS)),
    }
}

pub fn optional_text(value: Option<&Value>) -> Option<String> {
    match present(value) {
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

pub fn int32(value: Option<&Value>, field: &str) -> Result<i32, DomainError> {
    let n = match present(value) {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| invalid(field))?,
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid(field))?,
        Some(_) => return Err(invalid(field)),
        None => return Err(DomainError::validation(MISSING_FIELDS)),
    };
    i32::try_from(n).map_err(|_| DomainError::Validation(format!("{} is out of range", field)))
}

pub fn decimal(value: Option<&Value>, field: &str) -> Result<BigDecimal, DomainError> {
    let raw = match present(value) {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(_) => return Err(invalid(field)),
        None => return Err(DomainError::validation(MISSING_FIELDS)),
    };
    BigDecimal::from_str(&raw).map_err(|_| invalid(field))
}

pub fn date(value: Option<&Value>, field: &str) -> Result<NaiveDate, DomainError> {
    match present(value) {
        Some(Value::String(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            DomainError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s.trim()))
        }),
        Some(_) => Err(invalid(field)),
        None => Err(DomainError::validation(MISSING_FIELDS)),
    }
}
