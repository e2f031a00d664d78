use super::{PointSet, Segment};
use crate::error::{LookupError, Result};
use crate::math::polygon_2d::{mean_point, signed_area_2d};
use crate::math::{Point2, Vector2};
use crate::topology::IndexSequence;

/// A closed polygon snapshot built from a point set and an index order.
///
/// Segment `i` runs from point `indices[i]` to point `indices[i + 1]`,
/// wrapping from the last index back to the first. Segments are stored
/// origin-relative; the `zero_origin` accessors translate back to input
/// coordinates.
#[derive(Debug, Clone)]
pub struct Polygon {
    segments: Vec<Segment>,
    indices: Vec<usize>,
    origin: Point2,
    centroid: Option<Point2>,
}

impl Polygon {
    /// Builds the polygon visiting `points` in the order given by `order`.
    ///
    /// The centroid is the mean of the segment start points.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::IndexOutOfRange` if `order` names a point that
    /// `points` does not have.
    pub fn new(points: &PointSet, order: &IndexSequence) -> Result<Self> {
        let indices = order.as_slice().to_vec();
        let n = indices.len();
        let mut segments = Vec::with_capacity(n);
        let mut starts = Vec::with_capacity(n);

        for (i, &index_start) in indices.iter().enumerate() {
            let index_end = indices[(i + 1) % n];
            let start = points.get_point(index_start, false)?;
            let end = points.get_point(index_end, false)?;
            segments.push(Segment::new(start, end));
            starts.push(start);
        }

        Ok(Self {
            segments,
            indices,
            origin: points.origin(),
            centroid: mean_point(&starts),
        })
    }

    /// Builds the polygon over every point in input order.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`Polygon::new`].
    pub fn from_all_points(points: &PointSet) -> Result<Self> {
        Self::new(points, &IndexSequence::from_point_set(points))
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the origin of the point set this polygon was built from.
    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Origin-relative segments in boundary order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Point indices in boundary order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns segment `index`, translated to input coordinates if
    /// `zero_origin` is set.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::IndexOutOfRange` if `index >= len()`.
    pub fn get_segment(&self, index: usize, zero_origin: bool) -> Result<Segment> {
        let segment = self
            .segments
            .get(index)
            .copied()
            .ok_or(LookupError::IndexOutOfRange {
                container: "Polygon",
                index,
                len: self.segments.len(),
            })?;
        if zero_origin {
            Ok(segment.translated(&self.origin.coords))
        } else {
            Ok(segment)
        }
    }

    /// Returns the origin-relative midpoint of segment `index`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::IndexOutOfRange` if `index >= len()`.
    pub fn get_segment_midpoint(&self, index: usize) -> Result<Point2> {
        Ok(self.get_segment(index, false)?.midpoint())
    }

    /// Returns the centroid, or `None` for an empty polygon.
    #[must_use]
    pub fn get_centroid(&self, zero_origin: bool) -> Option<Point2> {
        let centroid = self.centroid?;
        if zero_origin {
            Some(centroid + self.origin.coords)
        } else {
            Some(centroid)
        }
    }

    /// Returns the segment start points in boundary order.
    #[must_use]
    pub fn vertices(&self, zero_origin: bool) -> Vec<Point2> {
        let shift = if zero_origin {
            self.origin.coords
        } else {
            Vector2::zeros()
        };
        self.segments.iter().map(|s| s.start + shift).collect()
    }

    /// Shoelace area of the vertex loop; positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices(false))
    }
}
