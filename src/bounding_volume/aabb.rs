//! Axis Aligned Bounding Box.

use crate::math::{Point2, Point3, Real, Vector3};

/// An Axis-Aligned Bounding Box (AABB).
///
/// - **mins**: the point with the smallest coordinates on each axis,
/// - **maxs**: the point with the largest coordinates on each axis.
///
/// The grid generator only ever looks at the footprint of an AABB (its X and Y
/// ranges), the Z range is kept for completeness.
///
/// # Example
///
/// ```rust
/// use envigrid::bounding_volume::Aabb;
/// use envigrid::na::Point3;
///
/// let points = vec![
///     Point3::new(1.0, 2.0, 3.0),
///     Point3::new(-1.0, 4.0, 2.0),
///     Point3::new(0.0, 0.0, 5.0),
/// ];
/// let aabb = Aabb::from_points(points.iter());
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point3<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point3<Real>,
}

impl Aabb {
    /// Creates a new AABB from its two corners.
    #[inline]
    pub fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Merging any valid AABB into it yields that AABB, which makes it the
    /// natural starting value of a fold.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector3::repeat(Real::MAX).into(),
            Vector3::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// An empty iterator yields [`Aabb::new_invalid`].
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<Real>>,
    {
        pts.into_iter().fold(Self::new_invalid(), |aabb, pt| Aabb {
            mins: aabb.mins.inf(pt),
            maxs: aabb.maxs.sup(pt),
        })
    }

    /// Does this AABB have `mins <= maxs` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mins.x <= self.maxs.x && self.mins.y <= self.maxs.y && self.mins.z <= self.maxs.z
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Enlarges the footprint of this AABB by `dx` along X and `dy` along Y.
    ///
    /// The Z range is left untouched.
    #[inline]
    pub fn loosened_xy(&self, dx: Real, dy: Real) -> Aabb {
        assert!(dx >= 0.0 && dy >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: Point3::new(self.mins.x - dx, self.mins.y - dy, self.mins.z),
            maxs: Point3::new(self.maxs.x + dx, self.maxs.y + dy, self.maxs.z),
        }
    }

    /// Tests if the footprint of this AABB contains the given 2D point, boundary included.
    #[inline]
    pub fn contains_xy(&self, pt: &Point2<Real>) -> bool {
        pt.x >= self.mins.x && pt.x <= self.maxs.x && pt.y >= self.mins.y && pt.y <= self.maxs.y
    }
}
