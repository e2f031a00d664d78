mod classify;
mod enchant;

pub use classify::{
    classify_point, farthest_unselected, nearest_crossed_edge, PointClassification,
};
pub use enchant::{Enchant, MIN_CONTOUR_POINTS};

use crate::geometry::Segment;
use crate::math::intersect_2d::{segments_cross, segments_cross_bounded};

/// How a centroid ray is tested against a polygon edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossingRule {
    /// The lines meet at an x inside both segments' x-extents
    /// ([`segments_cross`]).
    #[default]
    XRange,
    /// The lines meet at a point inside both segments' bounding boxes
    /// ([`segments_cross_bounded`]).
    Bounded,
}

impl CrossingRule {
    /// Applies the rule to a pair of segments.
    #[must_use]
    pub fn crosses(self, a: &Segment, b: &Segment) -> bool {
        match self {
            Self::XRange => segments_cross(a, b),
            Self::Bounded => segments_cross_bounded(a, b),
        }
    }
}

/// Parameters controlling contour construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContourParams {
    /// Rule used to decide whether the centroid ray crosses an edge.
    pub crossing_rule: CrossingRule,
}

impl ContourParams {
    /// Creates parameters with the given crossing rule.
    #[must_use]
    pub fn new(crossing_rule: CrossingRule) -> Self {
        Self { crossing_rule }
    }

    /// Returns a copy using `crossing_rule`.
    #[must_use]
    pub fn with_crossing_rule(mut self, crossing_rule: CrossingRule) -> Self {
        self.crossing_rule = crossing_rule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn default_rule_is_x_range() {
        assert_eq!(ContourParams::default().crossing_rule, CrossingRule::XRange);
        assert_eq!(
            ContourParams::default()
                .with_crossing_rule(CrossingRule::Bounded)
                .crossing_rule,
            CrossingRule::Bounded
        );
    }

    #[test]
    fn rules_disagree_on_vertical_ray() {
        let ray = Segment::new(Point2::new(0.0, -0.5), Point2::new(0.0, -1.0));
        let edge = Segment::new(Point2::new(-2.0, -2.0), Point2::new(2.0, -2.0));
        assert!(CrossingRule::XRange.crosses(&ray, &edge));
        assert!(!CrossingRule::Bounded.crosses(&ray, &edge));
    }
}
