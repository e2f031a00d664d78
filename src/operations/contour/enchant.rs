use super::classify::{classify_point, farthest_unselected, PointClassification};
use super::ContourParams;
use crate::error::Result;
use crate::geometry::{PointSet, Polygon};
use crate::topology::IndexSequence;

/// Point sets smaller than this are returned as-is, in input order.
pub const MIN_CONTOUR_POINTS: usize = 3;

/// Builds a closed contour around a point set by greedy farthest-point
/// insertion.
///
/// Points are visited in order of decreasing distance from the point set
/// origin. Each one is tested against the contour built so far: a point
/// whose centroid ray crosses no edge is interior and dropped for good;
/// otherwise it is inserted after the crossed edge whose midpoint is
/// nearest to it.
#[derive(Debug)]
pub struct Enchant<'a> {
    points: &'a PointSet,
    params: ContourParams,
}

impl<'a> Enchant<'a> {
    /// Creates a contour operation with default parameters.
    #[must_use]
    pub fn new(points: &'a PointSet) -> Self {
        Self::with_params(points, ContourParams::default())
    }

    /// Creates a contour operation with the given parameters.
    #[must_use]
    pub fn with_params(points: &'a PointSet, params: ContourParams) -> Self {
        Self { points, params }
    }

    /// Executes the construction, returning the contour polygon.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` or `InputError` if the contour bookkeeping is
    /// violated; parallel edges never surface as errors.
    pub fn execute(&self) -> Result<Polygon> {
        let contour = self.execute_indices()?;
        Polygon::new(self.points, &contour)
    }

    /// Executes the construction, returning the contour as point indices
    /// in boundary order.
    ///
    /// # Errors
    ///
    /// Same as [`Enchant::execute`].
    pub fn execute_indices(&self) -> Result<IndexSequence> {
        let n = self.points.len();
        if n < MIN_CONTOUR_POINTS {
            return Ok(IndexSequence::from_point_set(self.points));
        }

        let mut unselected = IndexSequence::from_point_set(self.points);
        let mut contour = IndexSequence::new();

        for step in 0..n {
            let farthest_index = farthest_unselected(self.points, &unselected)?;
            let farthest = self.points.get_point(farthest_index, false)?;
            let figure = Polygon::new(self.points, &contour)?;

            let classification = classify_point(&farthest, &figure, self.params.crossing_rule);
            tracing::trace!(step, point = farthest_index, ?classification, "classified");

            match classification {
                PointClassification::NoBoundary => contour.append(farthest_index)?,
                PointClassification::Inside => {}
                PointClassification::Outside { edge } => {
                    contour.insert_after(edge, farthest_index)?;
                }
            }
            unselected.remove_by_value(farthest_index)?;
        }

        tracing::debug!(
            points = n,
            contour = contour.len(),
            rule = ?self.params.crossing_rule,
            "contour built"
        );
        Ok(contour)
    }
}
