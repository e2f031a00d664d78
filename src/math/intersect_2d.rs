use super::{round_places, Point2, X_RANGE_DECIMALS};
use crate::error::{ErrorKind, GeometryError, Result};
use crate::geometry::Segment;

/// Rounds to [`X_RANGE_DECIMALS`] places to suppress floating-point jitter.
fn rounded(value: f64) -> f64 {
    round_places(value, X_RANGE_DECIMALS)
}

/// Returns `true` if `x`, rounded to three places, lies within the closed
/// x-extent of `segment`.
///
/// Only the x-axis is checked; the y-coordinate plays no part.
#[must_use]
pub fn point_on_segment_x_range(segment: &Segment, x: f64) -> bool {
    let x = rounded(x);
    segment.min_x() <= x && x <= segment.max_x()
}

/// Returns `true` if `point`, rounded to three places on both axes, lies
/// within the bounding box of `segment`.
#[must_use]
pub fn point_on_segment_range(segment: &Segment, point: &Point2) -> bool {
    let y = rounded(point.y);
    point_on_segment_x_range(segment, point.x) && segment.min_y() <= y && y <= segment.max_y()
}

/// Solves for the x-coordinate where the infinite lines through `a` and `b`
/// intersect.
///
/// Each line is written as its direction vector anchored at its start point
/// and the resulting 2x2 system is solved for `x`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSystem` if the determinant is exactly
/// zero (parallel or coincident lines, or a zero-length segment).
pub fn solve_intersection_x(a: &Segment, b: &Segment) -> Result<f64> {
    let shift_a = a.start;
    let shift_b = b.start;
    let eq_a = a.direction();
    let eq_b = b.direction();
    let denominator = determinant(a, b)?;

    let alpha = eq_a.y * shift_a.x * eq_b.x;
    let beta = -(eq_b.y * shift_b.x * eq_a.x);
    let gamma = (eq_a.x * eq_b.x) * (shift_b.y - shift_a.y);

    Ok((alpha + beta + gamma) / denominator)
}

/// Solves for the full intersection point of the infinite lines through
/// `a` and `b`.
///
/// The x-coordinate is exactly [`solve_intersection_x`]; the y-coordinate
/// uses the same system with the axes swapped.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSystem` under the same conditions as
/// [`solve_intersection_x`].
pub fn solve_intersection(a: &Segment, b: &Segment) -> Result<Point2> {
    let x = solve_intersection_x(a, b)?;

    let shift_a = a.start;
    let shift_b = b.start;
    let eq_a = a.direction();
    let eq_b = b.direction();
    let denominator = -determinant(a, b)?;

    let alpha = eq_a.x * shift_a.y * eq_b.y;
    let beta = -(eq_b.x * shift_b.y * eq_a.y);
    let gamma = (eq_a.y * eq_b.y) * (shift_b.x - shift_a.x);

    Ok(Point2::new(x, (alpha + beta + gamma) / denominator))
}

/// `dir_a.y * dir_b.x - dir_a.x * dir_b.y`, rejected when exactly zero.
#[allow(clippy::float_cmp)]
fn determinant(a: &Segment, b: &Segment) -> Result<f64> {
    let eq_a = a.direction();
    let eq_b = b.direction();
    let det = (eq_a.y * eq_b.x) - (eq_a.x * eq_b.y);
    if det == 0.0 {
        return Err(GeometryError::DegenerateSystem.into());
    }
    Ok(det)
}

/// Returns `true` if the supporting lines of `a` and `b` meet at an x that
/// lies within both segments' x-extents.
///
/// Parallel or coincident lines count as crossing.
#[must_use]
pub fn segments_cross(a: &Segment, b: &Segment) -> bool {
    match solve_intersection_x(a, b) {
        Ok(x) => point_on_segment_x_range(a, x) && point_on_segment_x_range(b, x),
        Err(err) => {
            debug_assert_eq!(err.kind(), ErrorKind::DegenerateSystem);
            true
        }
    }
}

/// Returns `true` if the supporting lines of `a` and `b` meet at a point
/// inside both segments' bounding boxes.
///
/// Parallel or coincident lines count as crossing, as in [`segments_cross`].
#[must_use]
pub fn segments_cross_bounded(a: &Segment, b: &Segment) -> bool {
    match solve_intersection(a, b) {
        Ok(p) => point_on_segment_range(a, &p) && point_on_segment_range(b, &p),
        Err(err) => {
            debug_assert_eq!(err.kind(), ErrorKind::DegenerateSystem);
            true
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn x_range_is_closed() {
        let s = seg(2.0, 0.0, -1.0, 5.0);
        assert!(point_on_segment_x_range(&s, -1.0));
        assert!(point_on_segment_x_range(&s, 2.0));
        assert!(point_on_segment_x_range(&s, 0.5));
        assert!(!point_on_segment_x_range(&s, 2.01));
    }

    #[test]
    fn x_range_absorbs_rounding_jitter() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        assert!(point_on_segment_x_range(&s, 1.0004));
        assert!(!point_on_segment_x_range(&s, 1.0006));
    }

    #[test]
    fn x_range_ignores_y() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert!(point_on_segment_x_range(&s, 1.0));
        assert!(!point_on_segment_range(&s, &Point2::new(1.0, 3.0)));
        assert!(point_on_segment_range(&s, &Point2::new(1.0, 0.0)));
    }

    #[test]
    fn intersection_x_of_diagonals() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        assert_relative_eq!(solve_intersection_x(&a, &b).unwrap(), 1.0);
        let p = solve_intersection(&a, &b).unwrap();
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);
    }

    #[test]
    fn intersection_with_vertical_line() {
        let a = seg(0.0, -0.5, 0.0, -1.0);
        let b = seg(-2.0, -2.0, 2.0, -2.0);
        assert_relative_eq!(solve_intersection_x(&a, &b).unwrap(), 0.0);
        let p = solve_intersection(&a, &b).unwrap();
        assert_relative_eq!(p.y, -2.0);
    }

    #[test]
    fn parallel_lines_are_degenerate() {
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(0.0, 1.0, 1.0, 2.0);
        let err = solve_intersection_x(&a, &b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateSystem);
    }

    #[test]
    fn zero_length_segment_is_degenerate() {
        let a = seg(1.0, 1.0, 1.0, 1.0);
        let b = seg(0.0, 0.0, 3.0, 2.0);
        assert!(solve_intersection_x(&a, &b).is_err());
    }

    #[test]
    fn degenerate_counts_as_crossing() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(5.0, 3.0, 6.0, 3.0);
        assert!(segments_cross(&a, &b));
        assert!(segments_cross_bounded(&a, &b));
    }

    #[test]
    fn crossing_diagonals() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        assert!(segments_cross(&a, &b));
        assert!(segments_cross_bounded(&a, &b));
    }

    #[test]
    fn disjoint_x_extents_do_not_cross() {
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(3.0, 0.0, 4.0, -2.0);
        assert!(!segments_cross(&a, &b));
        assert!(!segments_cross_bounded(&a, &b));
    }

    #[test]
    fn vertical_segment_crosses_by_x_range_only() {
        // Lines meet at (0, -2), outside the vertical segment's y-extent.
        let a = seg(0.0, -0.5, 0.0, -1.0);
        let b = seg(-2.0, -2.0, 2.0, -2.0);
        assert!(segments_cross(&a, &b));
        assert!(!segments_cross_bounded(&a, &b));
    }

    proptest! {
        #[test]
        fn crossing_is_symmetric(
            ax in -50.0..50.0f64, ay in -50.0..50.0f64,
            bx in -50.0..50.0f64, by in -50.0..50.0f64,
            cx in -50.0..50.0f64, cy in -50.0..50.0f64,
            dx in -50.0..50.0f64, dy in -50.0..50.0f64,
        ) {
            let a = seg(ax, ay, bx, by);
            let b = seg(cx, cy, dx, dy);
            prop_assert_eq!(segments_cross(&a, &b), segments_cross(&b, &a));
            prop_assert_eq!(segments_cross_bounded(&a, &b), segments_cross_bounded(&b, &a));
        }
    }
}
