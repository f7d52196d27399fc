use super::{Point2, TOLERANCE};

/// Returns the minimum distance from `point` to the line segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = *b - *a;
    let len_sq = ab.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment (zero length).
        return (*point - *a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((*point - *a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = *a + ab * t;

    (*point - closest).norm()
}

/// Returns `true` if `point` lies inside the axis-aligned square of
/// half-extent `half_extent` centered at `center`, boundary included.
#[must_use]
pub fn point_in_square(point: &Point2, center: &Point2, half_extent: f64) -> bool {
    (point.x - center.x).abs() <= half_extent && (point.y - center.y).abs() <= half_extent
}

/// Returns the midpoint of the segment `a`→`b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}
