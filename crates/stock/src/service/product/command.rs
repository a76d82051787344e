use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("✨ Creating product: '{}'", req.name);

        match self.command.create_product(req).await {
            Ok(product) => {
                info!("✅ Product created with ID: {}", product.id);
                Ok(ProductResponse::from(product))
            }
            Err(e) => {
                error!("❌ Failed to create product '{}': {e:?}", req.name);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("📝 Updating product ID: {:?}", req.id);

        match self.command.update_product(req).await {
            Ok(Some(product)) => {
                info!("✅ Product updated: '{}' (ID: {})", product.name, product.id);
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                error!("❌ Product not found with ID: {:?}", req.id);
                Err(ServiceError::NotFound("Product".to_string()))
            }
            Err(e) => {
                error!("❌ Failed to update product ID {:?}: {e:?}", req.id);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID: {id}");

        match self.command.delete_product(id).await {
            Ok(true) => {
                info!("✅ Product deleted with ID: {id}");
                Ok(())
            }
            Ok(false) => {
                error!("❌ Product not found with ID: {id}");
                Err(ServiceError::NotFound("Product".to_string()))
            }
            Err(e) => {
                error!("❌ Failed to delete product ID {id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::repository::ProductCommandRepositoryTrait,
        model::product::Product as ProductModel,
    };
    use rust_decimal_macros::dec;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    struct StubCommandRepository {
        existing_id: i32,
    }

    #[async_trait]
    impl ProductCommandRepositoryTrait for StubCommandRepository {
        async fn create_product(
            &self,
            req: &CreateProductRequest,
        ) -> Result<ProductModel, RepositoryError> {
            Ok(ProductModel {
                id: self.existing_id,
                name: req.name.clone(),
                category: req.category.clone(),
                quantity: req.quantity,
                unit: req.unit.clone(),
                min_threshold: req.min_threshold,
                price_per_unit: req.price_per_unit,
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_product(
            &self,
            req: &UpdateProductRequest,
        ) -> Result<Option<ProductModel>, RepositoryError> {
            if req.id != Some(self.existing_id) {
                return Ok(None);
            }
            Ok(Some(ProductModel {
                id: self.existing_id,
                name: req.name.clone(),
                category: req.category.clone(),
                quantity: req.quantity,
                unit: req.unit.clone(),
                min_threshold: req.min_threshold,
                price_per_unit: req.price_per_unit,
                created_at: None,
                updated_at: None,
            }))
        }

        async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
            Ok(id == self.existing_id)
        }
    }

    fn service() -> ProductCommandService {
        ProductCommandService::new(Arc::new(StubCommandRepository { existing_id: 7 }))
    }

    #[tokio::test]
    async fn create_returns_the_stored_product() {
        let req = CreateProductRequest {
            name: "Fusilli pasta".to_string(),
            category: "Groceries".to_string(),
            quantity: dec!(200),
            unit: "kg".to_string(),
            min_threshold: dec!(60),
            price_per_unit: dec!(1.20),
        };

        let created = service().create_product(&req).await.unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created.name, "Fusilli pasta");
        assert_eq!(created.quantity, dec!(200));
    }

    #[tokio::test]
    async fn update_missing_product_is_not_found() {
        let req = UpdateProductRequest {
            id: Some(99),
            name: "Canned tuna".to_string(),
            category: "Meat & Fish".to_string(),
            quantity: dec!(36),
            unit: "cans".to_string(),
            min_threshold: dec!(24),
            price_per_unit: dec!(2.40),
        };

        let err = service().update_product(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_product_is_not_found() {
        let err = service().delete_product(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        assert!(service().delete_product(7).await.is_ok());
    }
}
