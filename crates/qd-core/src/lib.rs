pub mod error;
pub mod geometry;
pub mod id;
pub mod scene;
pub mod selection;
pub mod shape;

pub use error::ShapeError;
pub use geometry::{Geometry, Point, Rect, Segment};
pub use id::ShapeId;
pub use scene::Scene;
pub use selection::Selection;
pub use shape::*;
