pub mod contour;

pub use contour::{ContourParams, CrossingRule, Enchant};
