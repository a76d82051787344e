mod command;
mod query;

pub use self::{
    command::{DynMovementCommandService, MovementCommandServiceTrait},
    query::{DynMovementQueryService, MovementQueryServiceTrait},
};
