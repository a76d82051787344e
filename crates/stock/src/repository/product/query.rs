use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::product::FindAllProducts, model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching products with category: {:?}", req.category);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let category = match req.category.as_deref() {
            Some(c) if !c.trim().is_empty() => Some(c),
            _ => None,
        };

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                id,
                name,
                category,
                quantity,
                unit,
                min_threshold,
                price_per_unit,
                created_at,
                updated_at
            FROM products
            WHERE ($1::TEXT IS NULL OR category = $1)
            ORDER BY name ASC
            "#,
        )
        .bind(category)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_below_threshold(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🚨 Fetching products below their minimum threshold");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        // Name order makes ranking ties deterministic.
        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                id,
                name,
                category,
                quantity,
                unit,
                min_threshold,
                price_per_unit,
                created_at,
                updated_at
            FROM products
            WHERE quantity < min_threshold
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch alert products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                id,
                name,
                category,
                quantity,
                unit,
                min_threshold,
                price_per_unit,
                created_at,
                updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
