mod add_shape;
mod modify_shape;

pub use add_shape::AddShape;
pub use modify_shape::{ModifyShape, ShapeChange, ShapeChangeReport};
