use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Car {
    pub id: i64,
    pub model: String,
    pub year: i64,
    pub price: Decimal,
    pub price_with_discount: Decimal,
}

impl Car {
    /// Discount rate: the digit sum of the year, as a percentage.
    ///
    /// 2014 → 2+0+1+4 = 7 → 0.07.
    #[must_use]
    pub fn discount_rate(&self) -> Decimal {
        let digit_sum: i64 = self
            .year
            .unsigned_abs()
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(i64::from)
            .sum();
        Decimal::new(digit_sum, 2)
    }

    /// Price after the year-based discount, rounded to cents.
    #[must_use]
    pub fn discounted_price(&self) -> Decimal {
        (self.price - self.price * self.discount_rate()).round_dp(2)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewCar {
    pub model: String,
    pub year: i64,
    pub price: Decimal,
}

impl Validate for NewCar {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("model", &self.model))
            .check(rules::max_length("model", &self.model, 40))
            .check(rules::non_negative("year", self.year))
            .check(rules::decimal_digits("price", self.price, 10, 2))
            .finish()
    }
}

/// Projection returned by the recent-cars query.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CarPrice {
    pub model: String,
    pub price_with_discount: Decimal,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn car(year: i64, price: &str) -> Car {
        Car {
            id: 1,
            model: "Mercedes C63 AMG".into(),
            year,
            price: Decimal::from_str(price).unwrap(),
            price_with_discount: Decimal::ZERO,
        }
    }

    #[test]
    fn discount_uses_year_digit_sum() {
        let c = car(2019, "120000.00");
        assert_eq!(c.discount_rate(), Decimal::from_str("0.12").unwrap());
        assert_eq!(c.discounted_price(), Decimal::from_str("105600.00").unwrap());
    }

    #[test]
    fn discount_rounds_to_cents() {
        let c = car(2014, "99.99");
        // 99.99 - 6.9993 = 92.9907
        assert_eq!(c.discounted_price(), Decimal::from_str("92.99").unwrap());
    }
}
