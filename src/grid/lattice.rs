//! Iterators over the lattice points of a [`GridSpec`], used to display the grid.

use crate::grid::GridSpec;
use crate::math::{Point3, Real};

/// The lattice points at the height of the first layer.
///
/// Created by [`GridSpec::grid_xy`]. X is the outer loop.
#[derive(Clone, Debug)]
pub struct LatticeXY<'a> {
    spec: &'a GridSpec,
    i: usize,
    j: usize,
}

impl<'a> LatticeXY<'a> {
    pub(crate) fn new(spec: &'a GridSpec) -> Self {
        LatticeXY { spec, i: 0, j: 0 }
    }
}

impl Iterator for LatticeXY<'_> {
    type Item = Point3<Real>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i > self.spec.num_x() {
            return None;
        }

        let pt = self.spec.lattice_point(self.i, self.j);
        let z = self.spec.layers().first().copied().unwrap_or(0.0);

        self.j += 1;
        if self.j > self.spec.num_y() {
            self.j = 0;
            self.i += 1;
        }

        Some(Point3::new(pt.x, pt.y, z))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let done = self.i * self.spec.grids_j() + self.j;
        let len = (self.spec.grids_i() * self.spec.grids_j()).saturating_sub(done);
        (len, Some(len))
    }
}

impl ExactSizeIterator for LatticeXY<'_> {}

/// The lattice points of the side `y = max.y`, across all layers.
///
/// Created by [`GridSpec::grid_xz`]. X is the outer loop.
#[derive(Clone, Debug)]
pub struct LatticeXZ<'a> {
    spec: &'a GridSpec,
    i: usize,
    k: usize,
}

impl<'a> LatticeXZ<'a> {
    pub(crate) fn new(spec: &'a GridSpec) -> Self {
        LatticeXZ { spec, i: 0, k: 0 }
    }
}

impl Iterator for LatticeXZ<'_> {
    type Item = Point3<Real>;

    fn next(&mut self) -> Option<Self::Item> {
        let layers = self.spec.layers();
        if self.i > self.spec.num_x() || layers.is_empty() {
            return None;
        }

        let x = self.spec.lattice_point(self.i, 0).x;
        let pt = Point3::new(x, self.spec.max().y, layers[self.k]);

        self.k += 1;
        if self.k == layers.len() {
            self.k = 0;
            self.i += 1;
        }

        Some(pt)
    }
}

/// The lattice points of the side `x = max.x`, across all layers.
///
/// Created by [`GridSpec::grid_yz`]. Y is the outer loop.
#[derive(Clone, Debug)]
pub struct LatticeYZ<'a> {
    spec: &'a GridSpec,
    j: usize,
    k: usize,
}

impl<'a> LatticeYZ<'a> {
    pub(crate) fn new(spec: &'a GridSpec) -> Self {
        LatticeYZ { spec, j: 0, k: 0 }
    }
}

impl Iterator for LatticeYZ<'_> {
    type Item = Point3<Real>;

    fn next(&mut self) -> Option<Self::Item> {
        let layers = self.spec.layers();
        if self.j > self.spec.num_y() || layers.is_empty() {
            return None;
        }

        let y = self.spec.lattice_point(0, self.j).y;
        let pt = Point3::new(self.spec.max().x, y, layers[self.k]);

        self.k += 1;
        if self.k == layers.len() {
            self.k = 0;
            self.j += 1;
        }

        Some(pt)
    }
}
