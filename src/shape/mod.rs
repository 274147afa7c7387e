//! Shapes consumed by the voxelizer.

pub use self::polygon::Polygon;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod polygon;
mod trimesh;
