mod command;
mod query;

pub use self::command::MovementCommandService;
pub use self::query::MovementQueryService;
