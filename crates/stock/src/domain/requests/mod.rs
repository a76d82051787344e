pub mod movement;
pub mod product;
