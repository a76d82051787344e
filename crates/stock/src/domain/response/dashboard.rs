use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DashboardStatsResponse {
    pub total_products: i64,
    pub low_stock_count: i64,
    pub today_movements: i64,
    pub total_stock_value: Decimal,
}
