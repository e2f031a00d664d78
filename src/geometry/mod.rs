mod point_set;
mod polygon;
mod segment;

pub use point_set::PointSet;
pub use polygon::Polygon;
pub use segment::Segment;
