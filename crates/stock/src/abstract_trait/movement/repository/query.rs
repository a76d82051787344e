use crate::{
    domain::requests::movement::FindAllMovements, model::movement::MovementWithProduct,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynMovementQueryRepository = Arc<dyn MovementQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MovementQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllMovements,
    ) -> Result<Vec<MovementWithProduct>, RepositoryError>;
    async fn count_on_date(&self, date: NaiveDate) -> Result<i64, RepositoryError>;
}
