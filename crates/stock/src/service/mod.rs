pub mod dashboard;
pub mod movement;
pub mod product;
