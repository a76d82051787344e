mod command;
mod query;

pub use self::{
    command::{DynProductCommandRepository, ProductCommandRepositoryTrait},
    query::{DynProductQueryRepository, ProductQueryRepositoryTrait},
};
