mod command;
mod query;

pub use self::{
    command::{DynProductCommandService, ProductCommandServiceTrait},
    query::{DynProductQueryService, ProductQueryServiceTrait},
};
