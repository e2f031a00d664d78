use crate::error::{InputError, LookupError, Result};
use crate::math::bounds_2d::Aabb2;
use crate::math::Point2;

/// A fixed collection of points normalized around their bounding-box center.
///
/// Points are stored relative to [`origin`](Self::origin) together with
/// their distance to `{0, 0}`. Until [`create`](Self::create) is called the
/// origin is `{0, 0}` and the points are the raw input; afterwards the
/// origin is the center of the input's bounding box. In both states
/// `get_point(i, true)` yields the input coordinate `i`.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point2>,
    distances: Vec<f64>,
    origin: Point2,
    created: bool,
}

impl PointSet {
    /// Creates a point set from raw input coordinates.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyPointSet` if `points` is empty, or
    /// `InputError::NonFiniteCoordinate` if any coordinate is NaN or infinite.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.is_empty() {
            return Err(InputError::EmptyPointSet.into());
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(InputError::NonFiniteCoordinate { index }.into());
        }
        let distances = points.iter().map(|p| p.coords.norm()).collect();
        Ok(Self {
            points,
            distances,
            origin: Point2::origin(),
            created: false,
        })
    }

    /// Creates a point set from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`PointSet::new`].
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Result<Self> {
        Self::new(
            coordinates
                .iter()
                .map(|&(x, y)| Point2::new(x, y))
                .collect(),
        )
    }

    /// Creates a point set and immediately normalizes it.
    ///
    /// # Errors
    ///
    /// Same as [`PointSet::new`].
    pub fn prepared(points: Vec<Point2>) -> Result<Self> {
        let mut set = Self::new(points)?;
        set.create();
        Ok(set)
    }

    /// Moves the origin to the bounding-box center and recomputes distances.
    ///
    /// Only the first call has an effect.
    pub fn create(&mut self) {
        if self.created {
            tracing::info!("point set already created");
            return;
        }

        if let Some(bounds) = Aabb2::from_points(&self.points) {
            self.origin = bounds.center();
        }

        let shift = self.origin.coords;
        for (point, distance) in self.points.iter_mut().zip(self.distances.iter_mut()) {
            *point -= shift;
            *distance = point.coords.norm();
        }
        self.created = true;

        tracing::debug!(len = self.points.len(), origin = ?self.origin, "point set created");
    }

    /// Returns `true` once [`create`](Self::create) has run.
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a point set holds at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the normalization origin in input coordinates.
    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Returns point `index`, origin-relative unless `zero_origin` is set.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::IndexOutOfRange` if `index >= len()`.
    pub fn get_point(&self, index: usize, zero_origin: bool) -> Result<Point2> {
        self.check_index(index)?;
        let point = self.points[index];
        if zero_origin {
            Ok(point + self.origin.coords)
        } else {
            Ok(point)
        }
    }

    /// Returns the distance of point `index` from the origin.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::IndexOutOfRange` if `index >= len()`.
    pub fn get_distance(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.distances[index])
    }

    /// Origin-relative points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Distances of the origin-relative points to `{0, 0}`.
    #[must_use]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.points.len() {
            return Err(LookupError::IndexOutOfRange {
                container: "PointSet",
                index,
                len: self.points.len(),
            }
            .into());
        }
        Ok(())
    }
}
