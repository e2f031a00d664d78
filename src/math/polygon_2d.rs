use super::Point2;

/// Computes the signed area of a closed vertex loop (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Arithmetic mean of the given points, or `None` when there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_point(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let mut x_sum = 0.0;
    let mut y_sum = 0.0;
    for p in points {
        x_sum += p.x;
        y_sum += p.y;
    }
    let n = points.len() as f64;
    Some(Point2::new(x_sum / n, y_sum / n))
}
