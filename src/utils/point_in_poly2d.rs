use crate::math::{Point2, Real};

/// Tests if the given point is inside an arbitrary closed polygon with arbitrary orientation,
/// using a crossing-number strategy.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge.
///
/// The test is half-open: a point lying exactly on a left or bottom boundary edge is inside,
/// a point lying exactly on a right or top boundary edge is outside. Two polygons sharing
/// an edge therefore never both contain a point of that edge, and an axis-aligned square
/// `[0, 9] x [0, 9]` sampled every 3 units contains exactly the samples `{0, 3, 6}²`.
pub fn point_in_poly2d(pt: &Point2<Real>, poly: &[Point2<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut winding = 0i32;

    for (i, a) in poly.iter().enumerate() {
        let b = poly[(i + 1) % poly.len()];
        let seg_dir = b - a;
        let dpt = pt - a;
        let perp = dpt.perp(&seg_dir);
        winding += match (dpt.y >= 0.0, b.y > pt.y) {
            (true, true) if perp < 0.0 => 1,
            (false, false) if perp > 0.0 => 1,
            _ => 0,
        };
    }

    winding % 2 == 1
}

/// Tests if the given point is inside the region bounded by a set of closed loops.
///
/// Loops are combined with the even-odd rule: a loop nested inside another one
/// carves a hole into it.
pub fn point_in_region2d<'a, I>(pt: &Point2<Real>, loops: I) -> bool
where
    I: IntoIterator<Item = &'a [Point2<Real>]>,
{
    loops
        .into_iter()
        .fold(false, |inside, poly| inside ^ point_in_poly2d(pt, poly))
}
