use crate::math::{Point2, Real};
use crate::utils;

/// A closed polygonal loop of the XY plane.
///
/// The last vertex is implicitly connected to the first one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point2<Real>>,
}

impl Polygon {
    /// Creates a polygon from its ordered vertices.
    pub fn new(vertices: Vec<Point2<Real>>) -> Self {
        Polygon { vertices }
    }

    /// The ordered vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }

    /// The signed area of this polygon, positive for a counter-clockwise loop.
    pub fn signed_area(&self) -> Real {
        let n = self.vertices.len();
        let twice_area: Real = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice_area / 2.0
    }

    /// Tests if `pt` lies inside this polygon, see [`utils::point_in_poly2d`].
    #[inline]
    pub fn contains_point(&self, pt: &Point2<Real>) -> bool {
        utils::point_in_poly2d(pt, &self.vertices)
    }
}
