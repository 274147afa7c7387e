/*!
envigrid
========

**envigrid** turns CAD meshes (buildings, soils, vegetation, pollutant sources)
into the voxel grid of an ENVI-met area input file.

The pipeline is made of small, independent stages:

- [`grid::GridSpec`] computes the lattice and its vertical layers,
- [`voxelization`] rasterizes every object into an occupancy grid and merges them,
- [`materials`] resolves wall, roof, profile and greening materials,
- [`encoding`] classifies exposed voxel faces and writes the sparse matrices,
- [`io::ModelSerializer`] orchestrates everything and writes the final document.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod encoding;
pub mod grid;
pub mod io;
pub mod materials;
pub mod query;
pub mod shape;
pub mod utils;
pub mod voxelization;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point2, Point3, Vector2, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = 1.0e-4;
}
