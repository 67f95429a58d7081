pub mod creation;
pub mod modification;
pub mod shape;
