use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        info!("✨ Creating product: '{}'", req.name);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, category, quantity, unit, min_threshold, price_per_unit)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id,
                name,
                category,
                quantity,
                unit,
                min_threshold,
                price_per_unit,
                created_at,
                updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.category)
        .bind(req.quantity)
        .bind(&req.unit)
        .bind(req.min_threshold)
        .bind(req.price_per_unit)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert product: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Product created with ID: {}", product.id);

        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("Product id is required".to_string()))?;

        info!("📝 Updating product ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        // Full-record replace; every field is overwritten.
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET
                name = $2,
                category = $3,
                quantity = $4,
                unit = $5,
                min_threshold = $6,
                price_per_unit = $7,
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING
                id,
                name,
                category,
                quantity,
                unit,
                min_threshold,
                price_per_unit,
                created_at,
                updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.category)
        .bind(req.quantity)
        .bind(&req.unit)
        .bind(req.min_threshold)
        .bind(req.price_per_unit)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product ID {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting product ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        // Movements go with it through the FK cascade.
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product ID {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
