use crate::model::movement::{MovementType, MovementWithProduct};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MovementResponse {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: Decimal,
    pub date: NaiveDate,
    pub comment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

// model to response
impl From<MovementWithProduct> for MovementResponse {
    fn from(value: MovementWithProduct) -> Self {
        MovementResponse {
            id: value.id,
            product_id: value.product_id,
            product_name: value.product_name,
            movement_type: value.movement_type,
            quantity: value.quantity,
            date: value.date,
            comment: value.comment,
            created_at: value.created_at,
        }
    }
}
