use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MovementType {
    Inbound,
    Outbound,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Inbound => "Inbound",
            MovementType::Outbound => "Outbound",
        }
    }

    /// Signed delta this movement applies to the stock level.
    pub fn signed(&self, quantity: Decimal) -> Decimal {
        match self {
            MovementType::Inbound => quantity,
            MovementType::Outbound => -quantity,
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Inbound" => Ok(MovementType::Inbound),
            "Outbound" => Ok(MovementType::Outbound),
            other => Err(format!("invalid movement type: {other}")),
        }
    }
}

// Stored as VARCHAR, so encode and decode through &str.
impl sqlx::Type<sqlx::Postgres> for MovementType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for MovementType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(s.parse()?)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for MovementType {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

/// Stock level after applying a movement. Outbound movements that overdraw
/// the stock clamp the result to zero instead of failing.
pub fn next_quantity(current: Decimal, movement_type: MovementType, quantity: Decimal) -> Decimal {
    (current + movement_type.signed(quantity)).max(Decimal::ZERO)
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movement {
    pub id: i32,
    pub product_id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: Decimal,
    pub date: NaiveDate,
    pub comment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Movement joined with the product it touches, for list views.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MovementWithProduct {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: Decimal,
    pub date: NaiveDate,
    pub comment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn inbound_adds_exactly() {
        assert_eq!(
            next_quantity(dec!(10.50), MovementType::Inbound, dec!(2.25)),
            dec!(12.75)
        );
    }

    #[test]
    fn outbound_subtracts_exactly() {
        assert_eq!(
            next_quantity(dec!(10.50), MovementType::Outbound, dec!(2.25)),
            dec!(8.25)
        );
    }

    #[test]
    fn outbound_overdraw_clamps_to_zero() {
        // removing 15 from a stock of 10 floors at zero
        assert_eq!(
            next_quantity(dec!(10), MovementType::Outbound, dec!(15)),
            Decimal::ZERO
        );
    }

    #[test]
    fn outbound_exact_drain_reaches_zero() {
        assert_eq!(
            next_quantity(dec!(7.25), MovementType::Outbound, dec!(7.25)),
            Decimal::ZERO
        );
    }

    #[test]
    fn arithmetic_keeps_two_decimal_places() {
        assert_eq!(
            next_quantity(dec!(0.30), MovementType::Outbound, dec!(0.20)),
            dec!(0.10)
        );
    }

    #[test]
    fn unknown_type_string_is_rejected() {
        assert!("Bogus".parse::<MovementType>().is_err());
        assert!(serde_json::from_str::<MovementType>("\"Entry\"").is_err());
        assert_eq!(
            serde_json::from_str::<MovementType>("\"Inbound\"").unwrap(),
            MovementType::Inbound
        );
    }

    fn decimal_qty() -> impl Strategy<Value = Decimal> {
        // NUMERIC(10,2) range, two decimal places
        (0i64..=10_000_000).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #[test]
        fn stock_level_never_negative(current in decimal_qty(), qty in decimal_qty()) {
            let next = next_quantity(current, MovementType::Outbound, qty);
            prop_assert!(next >= Decimal::ZERO);
        }

        #[test]
        fn inbound_is_exact_addition(current in decimal_qty(), qty in decimal_qty()) {
            prop_assert_eq!(next_quantity(current, MovementType::Inbound, qty), current + qty);
        }

        #[test]
        fn outbound_matches_clamped_subtraction(current in decimal_qty(), qty in decimal_qty()) {
            let next = next_quantity(current, MovementType::Outbound, qty);
            if qty <= current {
                prop_assert_eq!(next, current - qty);
            } else {
                prop_assert_eq!(next, Decimal::ZERO);
            }
        }
    }
}
