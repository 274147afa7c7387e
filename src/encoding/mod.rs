//! Text encodings of the merged grids.
//!
//! 3D building grids are encoded as sparse rows listing the exposed faces of their
//! voxels, 2D grids as dense comma-separated matrices.

pub use self::faces::{classify_faces, sparse_matrix, FaceRow};
pub use self::matrix::{
    building_bottom_2d, building_id_2d, building_top_2d, empty_matrix, format_matrix,
    material_matrix_2d, matrix_2d,
};
pub use self::plants::{plant_list, PlantCell};

mod faces;
mod matrix;
mod plants;
