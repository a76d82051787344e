use crate::{
    abstract_trait::movement::{
        repository::DynMovementCommandRepository, service::MovementCommandServiceTrait,
    },
    domain::{requests::movement::CreateMovementRequest, response::movement::MovementResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

#[derive(Clone)]
pub struct MovementCommandService {
    pub command: DynMovementCommandRepository,
}

impl MovementCommandService {
    pub fn new(command: DynMovementCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl MovementCommandServiceTrait for MovementCommandService {
    async fn create_movement(
        &self,
        req: &CreateMovementRequest,
    ) -> Result<MovementResponse, ServiceError> {
        info!(
            "✨ Recording {} movement of {} for product ID {}",
            req.movement_type, req.quantity, req.product_id
        );

        match self.command.create_movement(req).await {
            Ok(movement) => {
                info!("✅ Movement recorded with ID: {}", movement.id);
                Ok(MovementResponse::from(movement))
            }
            Err(RepositoryError::NotFound) => {
                error!("❌ Product not found with ID: {}", req.product_id);
                Err(ServiceError::NotFound("Product".to_string()))
            }
            Err(e) => {
                error!("❌ Failed to record movement: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::movement::{MovementType, MovementWithProduct, next_quantity};
    use crate::abstract_trait::movement::repository::MovementCommandRepositoryTrait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    struct StubLedgerRepository {
        product_id: i32,
        product_name: String,
        stock: Mutex<Decimal>,
    }

    #[async_trait]
    impl MovementCommandRepositoryTrait for StubLedgerRepository {
        async fn create_movement(
            &self,
            req: &CreateMovementRequest,
        ) -> Result<MovementWithProduct, RepositoryError> {
            if req.product_id != self.product_id {
                return Err(RepositoryError::NotFound);
            }
            let mut stock = self.stock.lock().unwrap();
            *stock = next_quantity(*stock, req.movement_type, req.quantity);
            Ok(MovementWithProduct {
                id: 1,
                product_id: req.product_id,
                product_name: self.product_name.clone(),
                movement_type: req.movement_type,
                quantity: req.quantity,
                date: req.date,
                comment: req.comment.clone(),
                created_at: None,
            })
        }
    }

    fn request(product_id: i32, quantity: Decimal) -> CreateMovementRequest {
        CreateMovementRequest {
            product_id,
            movement_type: MovementType::Outbound,
            quantity,
            date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            comment: None,
        }
    }

    #[tokio::test]
    async fn movement_for_missing_product_is_not_found() {
        let service = MovementCommandService::new(Arc::new(StubLedgerRepository {
            product_id: 1,
            product_name: "Carrots".to_string(),
            stock: Mutex::new(dec!(50)),
        }));

        let err = service.create_movement(&request(42, dec!(5))).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn response_carries_the_product_name() {
        let repo = Arc::new(StubLedgerRepository {
            product_id: 1,
            product_name: "Carrots".to_string(),
            stock: Mutex::new(dec!(50)),
        });
        let service = MovementCommandService::new(repo.clone());

        let movement = service.create_movement(&request(1, dec!(60))).await.unwrap();

        assert_eq!(movement.product_name, "Carrots");
        assert_eq!(movement.quantity, dec!(60));
        // The ledger clamps the stock level, not the recorded movement.
        assert_eq!(*repo.stock.lock().unwrap(), Decimal::ZERO);
    }
}
