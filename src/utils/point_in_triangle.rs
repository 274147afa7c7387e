//! Function to check if a point touches a triangle of the XY plane.

use crate::math::{Point2, Real};

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (a straight line)
    None,
}

/// Returns the direction of a line through `p1`, `p2` and `p3`.
///
/// Counter-clockwise example:
/// o p1
///  .        o p3
///   .     .
///    .  .
///     o p2
///
/// Clockwise example:
///     o p2
///    .  .
///   .     .
///  .        o p3
/// o p1
pub fn corner_direction(p1: &Point2<Real>, p2: &Point2<Real>, p3: &Point2<Real>) -> Orientation {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    let cross: Real = v1.perp(&v2);

    if cross < 0.0 {
        Orientation::Ccw
    } else if cross > 0.0 {
        Orientation::Cw
    } else {
        Orientation::None
    }
}

/// Distance between `p` and the segment `[a, b]`.
pub fn distance_to_segment2d(p: &Point2<Real>, a: &Point2<Real>, b: &Point2<Real>) -> Real {
    let ab = b - a;
    let sq_len = ab.norm_squared();

    if sq_len == 0.0 {
        return (p - a).norm();
    }

    let t = ((p - a).dot(&ab) / sq_len).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Returns `true` if point `p` is inside the triangle `(v1, v2, v3)` or within `tolerance`
/// of one of its edges.
///
/// Degenerate (flat) triangles are handled as the union of their edges, so a probe
/// grazing a sliver still counts as a contact.
pub fn point_touches_triangle2d(
    p: &Point2<Real>,
    v1: &Point2<Real>,
    v2: &Point2<Real>,
    v3: &Point2<Real>,
    tolerance: Real,
) -> bool {
    let d1 = corner_direction(p, v1, v2);
    let d2 = corner_direction(p, v2, v3);
    let d3 = corner_direction(p, v3, v1);

    let has_cw = d1 == Orientation::Cw || d2 == Orientation::Cw || d3 == Orientation::Cw;
    let has_ccw = d1 == Orientation::Ccw || d2 == Orientation::Ccw || d3 == Orientation::Ccw;
    let degenerate = corner_direction(v1, v2, v3) == Orientation::None;

    if !degenerate && !(has_cw && has_ccw) {
        return true;
    }

    distance_to_segment2d(p, v1, v2) <= tolerance
        || distance_to_segment2d(p, v2, v3) <= tolerance
        || distance_to_segment2d(p, v3, v1) <= tolerance
}
