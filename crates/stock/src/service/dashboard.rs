use crate::{
    abstract_trait::{
        dashboard::DashboardServiceTrait,
        movement::repository::DynMovementQueryRepository,
        product::repository::DynProductQueryRepository,
    },
    domain::{requests::product::FindAllProducts, response::dashboard::DashboardStatsResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use rust_decimal::Decimal;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct DashboardService {
    pub products: DynProductQueryRepository,
    pub movements: DynMovementQueryRepository,
}

impl DashboardService {
    pub fn new(
        products: DynProductQueryRepository,
        movements: DynMovementQueryRepository,
    ) -> Self {
        Self {
            products,
            movements,
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn stats(&self) -> Result<DashboardStatsResponse, ServiceError> {
        info!("📊 Computing dashboard statistics");

        let products = match self
            .products
            .find_all(&FindAllProducts { category: None })
            .await
        {
            Ok(products) => products,
            Err(e) => {
                error!("❌ Failed to fetch products for dashboard: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        let today = Local::now().date_naive();
        let today_movements = match self.movements.count_on_date(today).await {
            Ok(count) => count,
            Err(e) => {
                error!("❌ Failed to count today's movements: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        let low_stock_count = products.iter().filter(|p| p.is_below_threshold()).count() as i64;
        let total_stock_value: Decimal =
            products.iter().map(|p| p.quantity * p.price_per_unit).sum();

        let stats = DashboardStatsResponse {
            total_products: products.len() as i64,
            low_stock_count,
            today_movements,
            total_stock_value,
        };

        info!(
            "✅ Dashboard ready: {} products, {} low on stock, {} movements today",
            stats.total_products, stats.low_stock_count, stats.today_movements
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            movement::repository::MovementQueryRepositoryTrait,
            product::repository::ProductQueryRepositoryTrait,
        },
        domain::requests::movement::FindAllMovements,
        model::{movement::MovementWithProduct, product::Product as ProductModel},
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    struct StubProductRepository {
        products: Vec<ProductModel>,
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for StubProductRepository {
        async fn find_all(
            &self,
            _req: &FindAllProducts,
        ) -> Result<Vec<ProductModel>, RepositoryError> {
            Ok(self.products.clone())
        }

        async fn find_below_threshold(&self) -> Result<Vec<ProductModel>, RepositoryError> {
            Ok(self
                .products
                .iter()
                .filter(|p| p.is_below_threshold())
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
            Ok(self.products.iter().find(|p| p.id == id).cloned())
        }
    }

    struct StubMovementRepository {
        today_count: i64,
    }

    #[async_trait]
    impl MovementQueryRepositoryTrait for StubMovementRepository {
        async fn find_all(
            &self,
            _req: &FindAllMovements,
        ) -> Result<Vec<MovementWithProduct>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn count_on_date(&self, _date: NaiveDate) -> Result<i64, RepositoryError> {
            Ok(self.today_count)
        }
    }

    fn product(
        id: i32,
        quantity: rust_decimal::Decimal,
        min_threshold: rust_decimal::Decimal,
        price_per_unit: rust_decimal::Decimal,
    ) -> ProductModel {
        ProductModel {
            id,
            name: format!("Product {id}"),
            category: "Groceries".to_string(),
            quantity,
            unit: "kg".to_string(),
            min_threshold,
            price_per_unit,
            created_at: None,
            updated_at: None,
        }
    }

    fn service(products: Vec<ProductModel>, today_count: i64) -> DashboardService {
        DashboardService::new(
            Arc::new(StubProductRepository { products }),
            Arc::new(StubMovementRepository { today_count }),
        )
    }

    #[tokio::test]
    async fn stock_value_is_summed_exactly() {
        let service = service(
            vec![
                product(1, dec!(120), dec!(50), dec!(0.85)),
                product(2, dec!(80), dec!(30), dec!(0.95)),
            ],
            3,
        );

        let stats = service.stats().await.unwrap();

        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.low_stock_count, 0);
        assert_eq!(stats.today_movements, 3);
        assert_eq!(stats.total_stock_value, dec!(178.00));
    }

    #[tokio::test]
    async fn cheap_items_do_not_lose_cents() {
        let service = service(vec![product(1, dec!(1), dec!(0), dec!(0.10))], 0);

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_stock_value, dec!(0.10));
    }

    #[tokio::test]
    async fn low_stock_count_is_strictly_below_threshold() {
        let service = service(
            vec![
                product(1, dec!(18), dec!(20), dec!(1)),
                product(2, dec!(20), dec!(20), dec!(1)),
                product(3, dec!(21), dec!(20), dec!(1)),
            ],
            0,
        );

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.low_stock_count, 1);
    }

    #[tokio::test]
    async fn empty_catalog_yields_zeroed_stats() {
        let stats = service(Vec::new(), 0).stats().await.unwrap();

        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.low_stock_count, 0);
        assert_eq!(stats.today_movements, 0);
        assert_eq!(stats.total_stock_value, rust_decimal::Decimal::ZERO);
    }
}
