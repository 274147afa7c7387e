//! The lattice of the simulation domain and its vertical layers.

pub use self::grid_config::GridConfig;
pub use self::grid_spec::{GridError, GridRemark, GridSpec, LAYER_MATCH_TOLERANCE, MAX_Z_GRIDS};
pub use self::lattice::{LatticeXY, LatticeXZ, LatticeYZ};

mod grid_config;
mod grid_spec;
mod lattice;
