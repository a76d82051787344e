mod command;
mod query;

pub use self::{
    command::{DynMovementCommandRepository, MovementCommandRepositoryTrait},
    query::{DynMovementQueryRepository, MovementQueryRepositoryTrait},
};
