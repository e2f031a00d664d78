use super::Point2;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Computes the bounding box of `points` in a single scan.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            if max.x < p.x {
                max.x = p.x;
            }
            if min.x > p.x {
                min.x = p.x;
            }
            if max.y < p.y {
                max.y = p.y;
            }
            if min.y > p.y {
                min.y = p.y;
            }
        }
        Some(Self { min, max })
    }

    /// Center of the box, computed as `min + (max - min) / 2` per axis.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.max.x - self.min.x) / 2.0 + self.min.x,
            (self.max.y - self.min.y) / 2.0 + self.min.y,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_box() {
        assert!(Aabb2::from_points(&[]).is_none());
    }

    #[test]
    fn single_point_box_is_the_point() {
        let bb = Aabb2::from_points(&[Point2::new(3.0, -1.0)]).unwrap();
        assert_eq!(bb.min, bb.max);
        assert_eq!(bb.center(), Point2::new(3.0, -1.0));
    }

    #[test]
    fn center_of_scattered_points() {
        let pts = [
            Point2::new(0.0, 1.0),
            Point2::new(4.0, -3.0),
            Point2::new(1.0, 5.0),
        ];
        let bb = Aabb2::from_points(&pts).unwrap();
        assert_eq!(bb.min, Point2::new(0.0, -3.0));
        assert_eq!(bb.max, Point2::new(4.0, 5.0));
        assert_eq!(bb.center(), Point2::new(2.0, 1.0));
    }
}
