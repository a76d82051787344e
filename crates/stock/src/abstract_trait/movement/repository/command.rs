use crate::{
    domain::requests::movement::CreateMovementRequest, model::movement::MovementWithProduct,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynMovementCommandRepository = Arc<dyn MovementCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MovementCommandRepositoryTrait {
    /// Records the movement and adjusts the product's stock level in one
    /// transaction.
    async fn create_movement(
        &self,
        req: &CreateMovementRequest,
    ) -> Result<MovementWithProduct, RepositoryError>;
}
