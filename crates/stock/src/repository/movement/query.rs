use crate::{
    abstract_trait::movement::repository::MovementQueryRepositoryTrait,
    domain::requests::movement::FindAllMovements, model::movement::MovementWithProduct,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct MovementQueryRepository {
    db: ConnectionPool,
}

impl MovementQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovementQueryRepositoryTrait for MovementQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllMovements,
    ) -> Result<Vec<MovementWithProduct>, RepositoryError> {
        info!(
            "🔍 Fetching movements | product: {:?}, type: {:?}, from: {:?}, to: {:?}, limit: {:?}",
            req.product_id, req.movement_type, req.date_from, req.date_to, req.limit
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let movements = sqlx::query_as::<_, MovementWithProduct>(
            r#"
            SELECT
                m.id,
                m.product_id,
                p.name AS product_name,
                m.type,
                m.quantity,
                m.date,
                m.comment,
                m.created_at
            FROM movements m
            JOIN products p ON p.id = m.product_id
            WHERE ($1::INT4 IS NULL OR m.product_id = $1)
              AND ($2::TEXT IS NULL OR m.type = $2)
              AND ($3::DATE IS NULL OR m.date >= $3)
              AND ($4::DATE IS NULL OR m.date <= $4)
            ORDER BY m.date DESC, m.id DESC
            LIMIT $5
            "#,
        )
        .bind(req.product_id)
        .bind(req.movement_type)
        .bind(req.date_from)
        .bind(req.date_to)
        .bind(req.limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch movements: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(movements)
    }

    async fn count_on_date(&self, date: NaiveDate) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movements WHERE date = $1")
            .bind(date)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count movements on {}: {:?}", date, e);
                RepositoryError::from(e)
            })?;

        Ok(count)
    }
}
