use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    /// Exact category filter.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "Virgin olive oil")]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    #[schema(example = "Groceries")]
    pub category: String,

    #[validate(custom(function = non_negative, message = "Quantity must not be negative"))]
    #[schema(example = 18.0)]
    pub quantity: Decimal,

    #[validate(length(min = 1, max = 50, message = "Unit is required"))]
    #[schema(example = "L")]
    pub unit: String,

    #[validate(custom(function = non_negative, message = "Minimum threshold must not be negative"))]
    #[schema(example = 20.0)]
    pub min_threshold: Decimal,

    #[validate(custom(function = non_negative, message = "Price per unit must not be negative"))]
    #[schema(example = 4.5)]
    pub price_per_unit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    /// Filled from the path, not the body.
    #[serde(skip_deserializing)]
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "Virgin olive oil")]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    #[schema(example = "Groceries")]
    pub category: String,

    #[validate(custom(function = non_negative, message = "Quantity must not be negative"))]
    #[schema(example = 18.0)]
    pub quantity: Decimal,

    #[validate(length(min = 1, max = 50, message = "Unit is required"))]
    #[schema(example = "L")]
    pub unit: String,

    #[validate(custom(function = non_negative, message = "Minimum threshold must not be negative"))]
    #[schema(example = 20.0)]
    pub min_threshold: Decimal,

    #[validate(custom(function = non_negative, message = "Price per unit must not be negative"))]
    #[schema(example = 4.5)]
    pub price_per_unit: Decimal,
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_create() -> CreateProductRequest {
        CreateProductRequest {
            name: "Virgin olive oil".to_string(),
            category: "Groceries".to_string(),
            quantity: dec!(18),
            unit: "L".to_string(),
            min_threshold: dec!(20),
            price_per_unit: dec!(4.50),
        }
    }

    #[test]
    fn accepts_a_complete_product() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let mut req = valid_create();
        req.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_negative_decimals() {
        let mut req = valid_create();
        req.quantity = dec!(-1);
        assert!(req.validate().is_err());

        let mut req = valid_create();
        req.min_threshold = dec!(-0.01);
        assert!(req.validate().is_err());

        let mut req = valid_create();
        req.price_per_unit = dec!(-3);
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_quantities_are_allowed() {
        let mut req = valid_create();
        req.quantity = Decimal::ZERO;
        req.min_threshold = Decimal::ZERO;
        req.price_per_unit = Decimal::ZERO;
        assert!(req.validate().is_ok());
    }
}
