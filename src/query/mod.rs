//! Non-persistent geometric queries.
//!
//! The voxelizer relies on two of them:
//!
//! * [`TriMesh::intersection_with_horizontal_plane`](crate::shape::TriMesh::intersection_with_horizontal_plane)
//!   sections a mesh into closed loops at a given height.
//! * [`Region`] fills those loops and answers vertical projection queries.

pub use self::region::Region;
pub use self::split::{IntersectResult, SectionError};

mod region;
mod split;
