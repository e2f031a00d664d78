pub mod bounds_2d;
pub mod intersect_2d;
pub mod polygon_2d;

use crate::error::{GeometryError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Decimal places kept when comparing an intersection against a segment's extent.
pub const X_RANGE_DECIMALS: i32 = 3;

const _: () = assert!(X_RANGE_DECIMALS >= 0);

/// Rounds `value` to `decimals` places, halves away from zero.
///
/// # Errors
///
/// Returns `GeometryError::InvalidPrecision` if `decimals` is negative.
pub fn round_to(value: f64, decimals: i32) -> Result<f64> {
    if decimals < 0 {
        return Err(GeometryError::InvalidPrecision { decimals }.into());
    }
    Ok(round_places(value, decimals))
}

/// Rounding behind [`round_to`], for callers whose precision is already
/// known to be non-negative.
pub(crate) fn round_places(value: f64, decimals: i32) -> f64 {
    debug_assert!(decimals >= 0);
    let scale = 10.0_f64.powi(decimals);
    (value * scale).round() / scale
}
