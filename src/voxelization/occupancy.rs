use crate::grid::GridSpec;

/// A dense 3D grid of object indices.
///
/// The value `0` marks an empty voxel, any other value is the 1-based index of the
/// object occupying it. Reads outside of the grid return `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OccupancyGrid3 {
    shape: [usize; 3],
    data: Vec<u32>,
}

impl OccupancyGrid3 {
    /// Creates an empty grid with the given number of cells along each axis.
    pub fn new(shape: [usize; 3]) -> Self {
        OccupancyGrid3 {
            shape,
            data: vec![0; shape[0] * shape[1] * shape[2]],
        }
    }

    /// Creates an empty grid covering every lattice point and layer of `spec`.
    pub fn for_spec(spec: &GridSpec) -> Self {
        Self::new([spec.grids_i(), spec.grids_j(), spec.num_layers()])
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    #[inline]
    fn linear_index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        (i < self.shape[0] && j < self.shape[1] && k < self.shape[2])
            .then(|| (i * self.shape[1] + j) * self.shape[2] + k)
    }

    /// The value of the voxel `(i, j, k)`, `0` if it lies outside of the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> u32 {
        self.linear_index(i, j, k).map_or(0, |id| self.data[id])
    }

    /// The value of the voxel at the signed position `(i, j, k)`, `0` if it lies
    /// outside of the grid.
    #[inline]
    pub fn get_signed(&self, i: isize, j: isize, k: isize) -> u32 {
        if i < 0 || j < 0 || k < 0 {
            0
        } else {
            self.get(i as usize, j as usize, k as usize)
        }
    }

    /// Sets the value of the voxel `(i, j, k)`.
    ///
    /// # Panics
    /// If `(i, j, k)` lies outside of the grid.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: u32) {
        let id = self
            .linear_index(i, j, k)
            .unwrap_or_else(|| panic!("voxel ({i}, {j}, {k}) out of bounds {:?}", self.shape));
        self.data[id] = value;
    }

    /// The flattened voxel values, `k` varying fastest.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// The mutable flattened voxel values, `k` varying fastest.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// The number of occupied voxels.
    pub fn num_occupied(&self) -> usize {
        self.data.iter().filter(|v| **v != 0).count()
    }
}

/// A dense 2D grid of object indices.
///
/// Same conventions as [`OccupancyGrid3`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OccupancyGrid2 {
    shape: [usize; 2],
    data: Vec<u32>,
}

impl OccupancyGrid2 {
    /// Creates an empty grid with the given number of cells along each axis.
    pub fn new(shape: [usize; 2]) -> Self {
        OccupancyGrid2 {
            shape,
            data: vec![0; shape[0] * shape[1]],
        }
    }

    /// Creates an empty grid covering every lattice point of `spec`.
    pub fn for_spec(spec: &GridSpec) -> Self {
        Self::new([spec.grids_i(), spec.grids_j()])
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// The value of the cell `(i, j)`, `0` if it lies outside of the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        if i < self.shape[0] && j < self.shape[1] {
            self.data[i * self.shape[1] + j]
        } else {
            0
        }
    }

    /// Sets the value of the cell `(i, j)`.
    ///
    /// # Panics
    /// If `(i, j)` lies outside of the grid.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: u32) {
        assert!(
            i < self.shape[0] && j < self.shape[1],
            "cell ({i}, {j}) out of bounds {:?}",
            self.shape
        );
        self.data[i * self.shape[1] + j] = value;
    }

    /// The flattened cell values, `j` varying fastest.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// The mutable flattened cell values, `j` varying fastest.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// The number of occupied cells.
    pub fn num_occupied(&self) -> usize {
        self.data.iter().filter(|v| **v != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_are_empty() {
        let mut grid = OccupancyGrid3::new([2, 3, 4]);
        grid.set(1, 2, 3, 5);
        assert_eq!(grid.get(1, 2, 3), 5);
        assert_eq!(grid.get(2, 0, 0), 0);
        assert_eq!(grid.get(0, 0, 4), 0);
        assert_eq!(grid.get_signed(-1, 2, 3), 0);
        assert_eq!(grid.get_signed(1, 2, 3), 5);
        assert_eq!(grid.num_occupied(), 1);

        let mut grid = OccupancyGrid2::new([2, 3]);
        grid.set(1, 2, 7);
        assert_eq!(grid.get(1, 2), 7);
        assert_eq!(grid.get(1, 3), 0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_writes_panic() {
        let mut grid = OccupancyGrid3::new([2, 3, 4]);
        grid.set(0, 3, 0, 1);
    }
}
