use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: Decimal,
    pub unit: String,
    pub min_threshold: Decimal,
    pub price_per_unit: Decimal,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Strictly below the minimum threshold. Equality is not an alert.
    pub fn is_below_threshold(&self) -> bool {
        self.quantity < self.min_threshold
    }

    /// Fraction of the minimum threshold still in stock. `None` when the
    /// threshold is zero, which also means the product can never alert.
    pub fn severity_ratio(&self) -> Option<Decimal> {
        if self.min_threshold.is_zero() {
            None
        } else {
            Some(self.quantity / self.min_threshold)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(quantity: Decimal, min_threshold: Decimal) -> Product {
        Product {
            id: 1,
            name: "Virgin olive oil".to_string(),
            category: "Groceries".to_string(),
            quantity,
            unit: "L".to_string(),
            min_threshold,
            price_per_unit: dec!(4.50),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn severity_ratio_is_quantity_over_threshold() {
        let p = product(dec!(18), dec!(20));
        assert_eq!(p.severity_ratio(), Some(dec!(0.9)));
    }

    #[test]
    fn severity_ratio_is_none_for_zero_threshold() {
        let p = product(dec!(5), dec!(0));
        assert_eq!(p.severity_ratio(), None);
    }

    #[test]
    fn below_threshold_is_strict() {
        assert!(product(dec!(18), dec!(20)).is_below_threshold());
        assert!(!product(dec!(20), dec!(20)).is_below_threshold());
        assert!(!product(dec!(21), dec!(20)).is_below_threshold());
    }

    #[test]
    fn zero_threshold_never_alerts() {
        // quantity can never go below zero, so the filter can never match
        assert!(!product(dec!(0), dec!(0)).is_below_threshold());
        assert!(!product(dec!(3), dec!(0)).is_below_threshold());
    }
}
