use crate::domain::{
    requests::movement::CreateMovementRequest, response::movement::MovementResponse,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynMovementCommandService = Arc<dyn MovementCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait MovementCommandServiceTrait {
    async fn create_movement(
        &self,
        req: &CreateMovementRequest,
    ) -> Result<MovementResponse, ServiceError>;
}
