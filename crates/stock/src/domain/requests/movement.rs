use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::model::movement::MovementType;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllMovements {
    /// Restrict to movements of one product.
    pub product_id: Option<i32>,

    #[serde(rename = "type")]
    pub movement_type: Option<MovementType>,

    /// Inclusive lower bound on the movement date.
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper bound on the movement date.
    pub date_to: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Limit must be at least 1"))]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMovementRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[serde(rename = "type")]
    pub movement_type: MovementType,

    #[validate(custom(function = positive, message = "Quantity must be greater than 0"))]
    #[schema(example = 5.0)]
    pub quantity: Decimal,

    /// Calendar date of the movement, no time of day.
    pub date: NaiveDate,

    pub comment: Option<String>,
}

fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_create() -> CreateMovementRequest {
        CreateMovementRequest {
            product_id: 1,
            movement_type: MovementType::Outbound,
            quantity: dec!(5),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            comment: None,
        }
    }

    #[test]
    fn accepts_a_positive_quantity() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut req = valid_create();
        req.quantity = Decimal::ZERO;
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_negative_quantity() {
        let mut req = valid_create();
        req.quantity = dec!(-2.5);
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_limit() {
        let req = FindAllMovements {
            product_id: None,
            movement_type: None,
            date_from: None,
            date_to: None,
            limit: Some(0),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn unknown_type_fails_to_deserialize() {
        let err = serde_json::from_str::<CreateMovementRequest>(
            r#"{"product_id":1,"type":"Entry","quantity":5,"date":"2025-03-10"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn body_quantity_accepts_json_numbers() {
        let req: CreateMovementRequest = serde_json::from_str(
            r#"{"product_id":1,"type":"Inbound","quantity":2.5,"date":"2025-03-10","comment":"delivery"}"#,
        )
        .unwrap();
        assert_eq!(req.quantity, dec!(2.5));
        assert_eq!(req.movement_type, MovementType::Inbound);
    }
}
