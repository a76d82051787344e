mod command;
mod query;

pub use self::command::MovementCommandRepository;
pub use self::query::MovementQueryRepository;
