use crate::math::Real;
use crate::shape::TriMesh;

/// The user-facing parameters of a [`GridSpec`](super::GridSpec).
///
/// Out-of-range values are not rejected: [`GridSpec::new`](super::GridSpec::new)
/// falls back to the defaults or clamps them, recording a
/// [`GridRemark`](super::GridRemark) when a clamp changes the requested grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Cell size along X, in meters.
    pub dim_x: Real,
    /// Cell size along Y, in meters.
    pub dim_y: Real,
    /// Base cell size along Z, in meters.
    pub dim_z: Real,
    /// Empty cells added on the `-X` side of the reference geometry.
    pub add_cells_left: u32,
    /// Empty cells added on the `+X` side of the reference geometry.
    pub add_cells_right: u32,
    /// Empty cells added on the `+Y` side of the reference geometry.
    pub add_cells_up: u32,
    /// Empty cells added on the `-Y` side of the reference geometry.
    pub add_cells_down: u32,
    /// The requested number of vertical layers.
    pub num_z: usize,
    /// Growth percentage of the telescoping layers, `None` for a uniform split grid.
    pub telescope: Option<Real>,
    /// Height above which telescoping layers start growing.
    pub start_telescope_height: Real,
    /// A surface defining the domain instead of the buildings.
    pub base_surface: Option<TriMesh>,
}

impl GridConfig {
    /// The default cell size along each axis.
    pub const DEFAULT_DIM: Real = 3.0;
    /// The default and minimum number of extension cells on each side.
    pub const MIN_EXTENSION_CELLS: u32 = 2;
    /// The default number of vertical layers.
    pub const DEFAULT_NUM_Z: usize = 15;
    /// The default telescoping start height.
    pub const DEFAULT_START_TELESCOPE_HEIGHT: Real = 5.0;
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            dim_x: Self::DEFAULT_DIM,
            dim_y: Self::DEFAULT_DIM,
            dim_z: Self::DEFAULT_DIM,
            add_cells_left: Self::MIN_EXTENSION_CELLS,
            add_cells_right: Self::MIN_EXTENSION_CELLS,
            add_cells_up: Self::MIN_EXTENSION_CELLS,
            add_cells_down: Self::MIN_EXTENSION_CELLS,
            num_z: Self::DEFAULT_NUM_Z,
            telescope: None,
            start_telescope_height: Self::DEFAULT_START_TELESCOPE_HEIGHT,
            base_surface: None,
        }
    }
}
