use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{requests::product::FindAllProducts, response::product::ProductResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::cmp::Ordering;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductResponse>, ServiceError> {
        info!(
            "🔍 Finding all products | Category: '{}'",
            req.category.as_deref().unwrap_or("")
        );

        let products = match self.query.find_all(req).await {
            Ok(products) => {
                info!("✅ Retrieved {} products", products.len());
                products
            }
            Err(e) => {
                error!("❌ Failed to fetch products: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_alerts(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🚨 Finding products below their minimum threshold");

        let mut products = match self.query.find_below_threshold().await {
            Ok(products) => {
                info!("✅ {} products are below their threshold", products.len());
                products
            }
            Err(e) => {
                error!("❌ Failed to fetch threshold alerts: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        // Most critical first. Products without a usable ratio sort last;
        // the sort is stable, so name order from the repository breaks ties.
        products.sort_by(|a, b| match (a.severity_ratio(), b.severity_ratio()) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                info!("✅ Found product: '{}' (ID: {id})", product.name);
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                error!("❌ Product not found with ID: {id}");
                Err(ServiceError::NotFound("Product".to_string()))
            }
            Err(e) => {
                error!("❌ Database error while finding product ID {id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::repository::ProductQueryRepositoryTrait,
        model::product::Product as ProductModel,
    };
    use rust_decimal::Decimal;
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
            req: &FindAllProducts,
        ) -> Result<Vec<ProductModel>, RepositoryError> {
            let products = self
                .products
                .iter()
                .filter(|p| match req.category.as_deref() {
                    Some(category) => p.category == category,
                    None => true,
                })
                .cloned()
                .collect();
            Ok(products)
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

    fn product(id: i32, name: &str, quantity: Decimal, min_threshold: Decimal) -> ProductModel {
        ProductModel {
            id,
            name: name.to_string(),
            category: "Groceries".to_string(),
            quantity,
            unit: "kg".to_string(),
            min_threshold,
            price_per_unit: dec!(1.00),
            created_at: None,
            updated_at: None,
        }
    }

    fn service(products: Vec<ProductModel>) -> ProductQueryService {
        ProductQueryService::new(Arc::new(StubProductRepository { products }))
    }

    #[tokio::test]
    async fn alerts_rank_most_critical_first() {
        let service = service(vec![
            product(1, "Wheat flour T55", dec!(18), dec!(20)),
            product(2, "Unsalted butter", dec!(1), dec!(10)),
            product(3, "Semi-skimmed milk", dec!(20), dec!(40)),
            product(4, "Long grain rice", dec!(150), dec!(50)),
        ]);

        let alerts = service.find_alerts().await.unwrap();

        let names: Vec<&str> = alerts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Unsalted butter", "Semi-skimmed milk", "Wheat flour T55"]
        );
    }

    #[tokio::test]
    async fn alert_ratios_are_ascending() {
        let service = service(vec![
            product(1, "A", dec!(5), dec!(8)),
            product(2, "B", dec!(0), dec!(4)),
            product(3, "C", dec!(7), dec!(30)),
            product(4, "D", dec!(11), dec!(12)),
            product(5, "E", dec!(2), dec!(20)),
        ]);

        let alerts = service.find_alerts().await.unwrap();
        assert_eq!(alerts.len(), 5);

        for pair in alerts.windows(2) {
            let ra = pair[0].quantity / pair[0].min_threshold;
            let rb = pair[1].quantity / pair[1].min_threshold;
            assert!(ra <= rb, "{} ranked before {}", pair[0].name, pair[1].name);
        }
    }

    #[tokio::test]
    async fn zero_threshold_products_never_alert() {
        let service = service(vec![product(1, "Fine salt", dec!(0), dec!(0))]);

        let alerts = service.find_alerts().await.unwrap();
        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn at_threshold_is_not_an_alert() {
        let service = service(vec![product(1, "Caster sugar", dec!(30), dec!(30))]);

        let alerts = service.find_alerts().await.unwrap();
        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn find_all_filters_by_category() {
        let mut hygiene = product(2, "Liquid hand soap", dec!(20), dec!(10));
        hygiene.category = "Hygiene".to_string();
        let service = service(vec![product(1, "Carrots", dec!(50), dec!(20)), hygiene]);

        let all = service
            .find_all(&FindAllProducts { category: None })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let groceries = service
            .find_all(&FindAllProducts {
                category: Some("Groceries".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(groceries.len(), 1);
        assert_eq!(groceries[0].name, "Carrots");
    }

    #[tokio::test]
    async fn find_by_id_missing_product_is_not_found() {
        let service = service(vec![product(1, "Gala apples", dec!(40), dec!(20))]);

        let err = service.find_by_id(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
