use crate::model::product::Product;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
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

// model to response
impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            category: value.category,
            quantity: value.quantity,
            unit: value.unit,
            min_threshold: value.min_threshold,
            price_per_unit: value.price_per_unit,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
