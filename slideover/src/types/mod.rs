mod edge;
mod geometry;

pub use edge::Edge;
pub use geometry::{Point, Size};
