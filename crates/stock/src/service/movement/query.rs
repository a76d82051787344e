use crate::{
    abstract_trait::movement::{
        repository::DynMovementQueryRepository, service::MovementQueryServiceTrait,
    },
    domain::{requests::movement::FindAllMovements, response::movement::MovementResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct MovementQueryService {
    pub query: DynMovementQueryRepository,
}

impl MovementQueryService {
    pub fn new(query: DynMovementQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl MovementQueryServiceTrait for MovementQueryService {
    async fn find_all(
        &self,
        req: &FindAllMovements,
    ) -> Result<Vec<MovementResponse>, ServiceError> {
        info!(
            "🔍 Finding movements | Product: {:?}, Type: {:?}, From: {:?}, To: {:?}, Limit: {:?}",
            req.product_id, req.movement_type, req.date_from, req.date_to, req.limit
        );

        let movements = match self.query.find_all(req).await {
            Ok(movements) => {
                info!("✅ Retrieved {} movements", movements.len());
                movements
            }
            Err(e) => {
                error!("❌ Failed to fetch movements: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        Ok(movements.into_iter().map(MovementResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::movement::repository::MovementQueryRepositoryTrait,
        model::movement::{MovementType, MovementWithProduct},
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    struct StubMovementRepository {
        movements: Vec<MovementWithProduct>,
    }

    #[async_trait]
    impl MovementQueryRepositoryTrait for StubMovementRepository {
        async fn find_all(
            &self,
            _req: &FindAllMovements,
        ) -> Result<Vec<MovementWithProduct>, RepositoryError> {
            Ok(self.movements.clone())
        }

        async fn count_on_date(&self, date: NaiveDate) -> Result<i64, RepositoryError> {
            Ok(self.movements.iter().filter(|m| m.date == date).count() as i64)
        }
    }

    #[tokio::test]
    async fn find_all_maps_the_joined_product_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let service = MovementQueryService::new(Arc::new(StubMovementRepository {
            movements: vec![MovementWithProduct {
                id: 1,
                product_id: 3,
                product_name: "Semi-skimmed milk".to_string(),
                movement_type: MovementType::Outbound,
                quantity: dec!(15),
                date,
                comment: Some("Milk desserts".to_string()),
                created_at: None,
            }],
        }));

        let movements = service
            .find_all(&FindAllMovements {
                product_id: None,
                movement_type: None,
                date_from: None,
                date_to: None,
                limit: None,
            })
            .await
            .unwrap();

        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].product_name, "Semi-skimmed milk");
        assert_eq!(movements[0].movement_type, MovementType::Outbound);
        assert_eq!(movements[0].quantity, dec!(15));
    }
}
