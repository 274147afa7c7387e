use crate::voxelization::{OccupancyGrid2, OccupancyGrid3};

/// Merges the 3D grids of several objects into a single indexed grid.
///
/// Grids are accumulated by addition. Once a voxel reaches `grids.len() + 1` it can
/// only be the sum of overlapping objects: it is reset to empty.
///
/// All the grids must have the shape `shape`.
pub fn merge_3d(shape: [usize; 3], grids: &[OccupancyGrid3]) -> OccupancyGrid3 {
    let mut merged = OccupancyGrid3::new(shape);
    let threshold = grids.len() as u32 + 1;

    for grid in grids {
        assert_eq!(grid.shape(), shape, "cannot merge grids of different shapes");

        for (acc, value) in merged.as_mut_slice().iter_mut().zip(grid.as_slice()) {
            *acc += *value;
            if *acc >= threshold {
                *acc = 0;
            }
        }
    }

    merged
}

/// Merges the 2D grids of several objects into a single indexed grid.
///
/// Grids are accumulated by addition. Unlike [`merge_3d`], a cell reaching
/// `grids.len() + 1` is only decremented by one, so overlapping objects still mark it.
///
/// All the grids must have the shape `shape`.
pub fn merge_2d(shape: [usize; 2], grids: &[OccupancyGrid2]) -> OccupancyGrid2 {
    let mut merged = OccupancyGrid2::new(shape);
    let threshold = grids.len() as u32 + 1;

    for grid in grids {
        assert_eq!(grid.shape(), shape, "cannot merge grids of different shapes");

        for (acc, value) in merged.as_mut_slice().iter_mut().zip(grid.as_slice()) {
            *acc += *value;
            if *acc >= threshold {
                *acc -= 1;
            }
        }
    }

    merged
}
