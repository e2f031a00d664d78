//! Greedy construction of a simple closed contour around a 2D point set.
//!
//! ```
//! use enchanter::{Enchant, PointSet};
//!
//! let mut points = PointSet::from_coordinates(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])?;
//! points.create();
//! let contour = Enchant::new(&points).execute()?;
//! assert_eq!(contour.len(), 4);
//! # Ok::<(), enchanter::EnchanterError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{EnchanterError, ErrorKind, Result};
pub use geometry::{PointSet, Polygon, Segment};
pub use operations::{ContourParams, CrossingRule, Enchant};
pub use topology::IndexSequence;
