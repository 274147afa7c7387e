pub use self::split::{IntersectResult, SectionError};

mod split;
mod split_trimesh;
