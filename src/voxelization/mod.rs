//! Rasterization of meshes into occupancy grids, and merging of those grids.
//!
//! Every object is rasterized on its own grid, tagged with its 1-based index. The
//! grids of a category (buildings, soils, plants, sources) are then merged into a
//! single grid where each cell stores the index of the object occupying it.

pub use self::merge::{merge_2d, merge_3d};
pub use self::occupancy::{OccupancyGrid2, OccupancyGrid3};
pub use self::rasterize::{rasterize_2d, rasterize_3d, VoxelizationError};

mod merge;
mod occupancy;
mod rasterize;
