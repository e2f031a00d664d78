use crate::math::{Point2, Vector2};

/// A directed line segment from `start` to `end`.
///
/// Direction matters for the crossing math: the segment's line is
/// anchored at `start` and runs along `end - start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Anchor of the segment's line.
    pub start: Point2,
    /// End point; `end - start` is the direction.
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Returns `true` if both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns the segment moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self {
            start: self.start + *offset,
            end: self.end + *offset,
        }
    }

    /// Smallest x-coordinate of the two endpoints.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.start.x.min(self.end.x)
    }

    /// Largest x-coordinate of the two endpoints.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.start.x.max(self.end.x)
    }

    /// Smallest y-coordinate of the two endpoints.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    /// Largest y-coordinate of the two endpoints.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn midpoint_and_length() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_eq!(s.midpoint(), Point2::new(1.5, 2.0));
        assert_relative_eq!(s.length(), 5.0);
        assert_eq!(s.direction(), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn extents_ignore_direction() {
        let s = Segment::new(Point2::new(2.0, -1.0), Point2::new(-3.0, 4.0));
        assert_relative_eq!(s.min_x(), -3.0);
        assert_relative_eq!(s.max_x(), 2.0);
        assert_relative_eq!(s.min_y(), -1.0);
        assert_relative_eq!(s.max_y(), 4.0);
    }

    #[test]
    fn translate_moves_both_ends() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let t = s.translated(&Vector2::new(2.0, -1.0));
        assert_eq!(t.start, Point2::new(2.0, -1.0));
        assert_eq!(t.end, Point2::new(3.0, 0.0));
    }

    #[test]
    fn degenerate_segment() {
        let p = Point2::new(1.0, 2.0);
        assert!(Segment::new(p, p).is_degenerate());
        assert!(!Segment::new(p, Point2::new(1.0, 3.0)).is_degenerate());
    }
}
