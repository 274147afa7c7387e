use crate::math::{Point2, Real};
use crate::shape::Polygon;
use crate::utils;

/// A planar region bounded by a set of closed loops.
///
/// Loops are combined with the even-odd rule: a loop nested inside another one
/// carves a hole into it, and a loop nested inside a hole fills it again. This is
/// how the section of a building with a courtyard is represented.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Region {
    loops: Vec<Polygon>,
}

impl Region {
    /// Creates a region from its boundary loops.
    pub fn from_loops(loops: Vec<Polygon>) -> Self {
        Region { loops }
    }

    /// The boundary loops of this region.
    #[inline]
    pub fn loops(&self) -> &[Polygon] {
        &self.loops
    }

    /// Does this region have no boundary loop at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Tests if `pt` lies inside this region, see [`utils::point_in_region2d`].
    pub fn contains_point(&self, pt: &Point2<Real>) -> bool {
        utils::point_in_region2d(pt, self.loops.iter().map(|l| l.vertices()))
    }
}
