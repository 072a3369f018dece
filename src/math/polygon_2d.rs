use super::{coincident, Point2};

/// Computes the signed area of a closed polygon (shoelace formula).
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

/// Counts points that are pairwise distinct within tolerance.
///
/// Quadratic, but boundaries here are a few hundred points at most.
#[must_use]
pub fn distinct_count(points: &[Point2]) -> usize {
    let mut seen: Vec<&Point2> = Vec::with_capacity(points.len());
    for pt in points {
        if !seen.iter().any(|s| coincident(s, pt)) {
            seen.push(pt);
        }
    }
    seen.len()
}

/// Appends `pt` unless it coincides with the current last point.
pub fn push_distinct(points: &mut Vec<Point2>, pt: Point2) {
    if points.last().is_some_and(|last| coincident(last, &pt)) {
        return;
    }
    points.push(pt);
}

/// Returns the axis-aligned bounds `(min, max)` of a point set, or `None` if empty.
#[must_use]
pub fn bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in &points[1..] {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}
