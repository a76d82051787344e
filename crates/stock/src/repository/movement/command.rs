use crate::{
    abstract_trait::movement::repository::MovementCommandRepositoryTrait,
    domain::requests::movement::CreateMovementRequest,
    model::{
        movement::{Movement, MovementWithProduct, next_quantity},
        product::Product as ProductModel,
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct MovementCommandRepository {
    db: ConnectionPool,
}

impl MovementCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovementCommandRepositoryTrait for MovementCommandRepository {
    async fn create_movement(
        &self,
        req: &CreateMovementRequest,
    ) -> Result<MovementWithProduct, RepositoryError> {
        info!(
            "📦 Applying {} movement of {} to product ID {}",
            req.movement_type, req.quantity, req.product_id
        );

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        // Row lock; concurrent movements on the same product serialize here.
        let product = sqlx::query_as::<_, ProductModel>(
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
            FOR UPDATE
            "#,
        )
        .bind(req.product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to lock product ID {}: {:?}", req.product_id, e);
            RepositoryError::from(e)
        })?;

        let Some(product) = product else {
            error!("❌ Product not found with ID: {}", req.product_id);
            return Err(RepositoryError::NotFound);
        };

        let new_quantity = next_quantity(product.quantity, req.movement_type, req.quantity);

        sqlx::query(
            "UPDATE products SET quantity = $2, updated_at = current_timestamp WHERE id = $1",
        )
        .bind(req.product_id)
        .bind(new_quantity)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to update stock level: {:?}", e);
            RepositoryError::from(e)
        })?;

        let movement = sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO movements (product_id, type, quantity, date, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_id, type, quantity, date, comment, created_at
            "#,
        )
        .bind(req.product_id)
        .bind(req.movement_type)
        .bind(req.quantity)
        .bind(req.date)
        .bind(req.comment.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert movement: {:?}", e);
            RepositoryError::from(e)
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit movement transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Movement {} recorded; stock level of product ID {} is now {}",
            movement.id, req.product_id, new_quantity
        );

        Ok(MovementWithProduct {
            id: movement.id,
            product_id: movement.product_id,
            product_name: product.name,
            movement_type: movement.movement_type,
            quantity: movement.quantity,
            date: movement.date,
            comment: movement.comment,
            created_at: movement.created_at,
        })
    }
}
