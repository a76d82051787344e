use crate::domain::{requests::movement::FindAllMovements, response::movement::MovementResponse};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynMovementQueryService = Arc<dyn MovementQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait MovementQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllMovements,
    ) -> Result<Vec<MovementResponse>, ServiceError>;
}
