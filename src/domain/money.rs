use bigdecimal::{BigDecimal, RoundingMode};

/// Prices are displayed in Zambian Kwacha.
pub const CURRENCY_CODE: &str = "ZMW";

/// Format a price for display, e.g. `ZMW 5.99`.
pub fn format_price(price: &BigDecimal) -> String {
    format!(
        "{} {}",
        CURRENCY_CODE,
        price.with_scale_round(2, RoundingMode::HalfUp)
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn pads_to_two_decimals() {
        let price = BigDecimal::from_str("5").expect("valid decimal");
        assert_eq!(format_price(&price), "ZMW 5.00");
    }

    #[test]
    fn rounds_half_up() {
        let price = BigDecimal::from_str("7.005").expect("valid decimal");
        assert_eq!(format_price(&price), "ZMW 7.01");
    }

    #[test]
    fn zero_price() {
        let price = BigDecimal::from_str("0").expect("valid decimal");
        assert_eq!(format_price(&price), "ZMW 0.00");
    }
}
