use super::CrossingRule;
use crate::error::Result;
use crate::geometry::{PointSet, Polygon, Segment};
use crate::math::Point2;
use crate::topology::IndexSequence;

/// Classification of a point relative to a partial contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    /// The contour has no segments yet.
    NoBoundary,
    /// The ray from the centroid to the point crosses no edge.
    Inside,
    /// The ray crosses at least one edge; `edge` is the crossed edge whose
    /// midpoint is nearest to the point.
    Outside { edge: usize },
}

/// Returns the index in `unselected` farthest from the point set origin.
///
/// Scans in sequence order and keeps the first maximum.
///
/// # Errors
///
/// Returns `LookupError::IndexOutOfRange` if `unselected` is empty or names
/// a point that `points` does not have.
pub fn farthest_unselected(points: &PointSet, unselected: &IndexSequence) -> Result<usize> {
    let mut max_index = unselected.get_value(0)?;
    let mut max_distance = points.get_distance(max_index)?;

    for index in unselected.iter().skip(1) {
        let distance = points.get_distance(index)?;
        if distance > max_distance {
            max_distance = distance;
            max_index = index;
        }
    }

    Ok(max_index)
}

/// Finds the edge crossed by the centroid-to-`point` ray whose midpoint is
/// nearest to `point`.
///
/// Among equally near edges the last one in boundary order wins. Returns
/// `None` when no edge is crossed or the polygon is empty.
#[must_use]
pub fn nearest_crossed_edge(point: &Point2, polygon: &Polygon, rule: CrossingRule) -> Option<usize> {
    let centroid = polygon.get_centroid(false)?;
    let ray = Segment::new(centroid, *point);

    let mut nearest: Option<(usize, f64)> = None;
    for (i, edge) in polygon.segments().iter().enumerate() {
        if !rule.crosses(&ray, edge) {
            continue;
        }
        let distance = nalgebra::distance(point, &edge.midpoint());
        let closer = match nearest {
            Some((_, min_distance)) => distance <= min_distance,
            None => true,
        };
        if closer {
            nearest = Some((i, distance));
        }
    }

    nearest.map(|(i, _)| i)
}

/// Classifies `point` (origin-relative) against `polygon`.
#[must_use]
pub fn classify_point(point: &Point2, polygon: &Polygon, rule: CrossingRule) -> PointClassification {
    if polygon.is_empty() {
        return PointClassification::NoBoundary;
    }
    match nearest_crossed_edge(point, polygon, rule) {
        Some(edge) => PointClassification::Outside { edge },
        None => PointClassification::Inside,
    }
}
