use core::fmt;

use crate::bounding_volume::Aabb;
use crate::grid::{GridConfig, LatticeXY, LatticeXZ, LatticeYZ};
use crate::math::{Point2, Real, Vector3};
use crate::shape::TriMesh;

/// The hard cap on the number of vertical grid lines.
///
/// A grid never has more than `MAX_Z_GRIDS - 1` layers.
pub const MAX_Z_GRIDS: usize = 999;

/// The maximum distance between a height and a layer midpoint for the
/// height to be resolved to that layer by [`GridSpec::layer_index`].
pub const LAYER_MATCH_TOLERANCE: Real = 0.005;

/// The maximum telescoping growth percentage.
const MAX_TELESCOPE: Real = 20.0;

/// A non-fatal adjustment of the requested grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum GridRemark {
    /// The telescoping percentage exceeded its maximum and was clamped.
    TelescopeCapped {
        /// The requested percentage.
        requested: Real,
        /// The percentage actually used.
        used: Real,
    },
    /// The layer count exceeded the hard cap and was clamped.
    LayerCountCapped {
        /// The requested number of layers.
        requested: usize,
        /// The number of layers actually generated.
        used: usize,
    },
}

impl fmt::Display for GridRemark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridRemark::TelescopeCapped { requested, used } => {
                write!(f, "max telescope factor is {used} ({requested} requested)")
            }
            GridRemark::LayerCountCapped { requested, used } => {
                write!(f, "max number of layers is {used} ({requested} requested)")
            }
        }
    }
}

/// Errors raised while computing the extent of a grid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// No geometry was given to derive the grid extent from.
    #[error("the grid extent can't be computed without any reference geometry")]
    NoReferenceGeometry,
}

/// The anisotropic lattice of a simulation domain.
///
/// A `GridSpec` is created from a [`GridConfig`], which already fixes its cell sizes
/// and vertical layers. Its horizontal extent is only known after
/// [`GridSpec::compute`] has been called with the reference geometries: before that
/// the lattice is a single point at the origin.
///
/// The lattice points are `min + (i * dim_x, j * dim_y)` for `i` in `0..=num_x` and
/// `j` in `0..=num_y`. Every occupancy grid built on this spec has
/// `(num_x + 1) * (num_y + 1)` columns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GridSpec {
    dims: Vector3<Real>,
    add_cells: [u32; 4],
    telescope: Option<Real>,
    start_telescope_height: Real,
    layers: Vec<Real>,
    min: Point2<Real>,
    max: Point2<Real>,
    num_x: usize,
    num_y: usize,
    remarks: Vec<GridRemark>,
}

impl GridSpec {
    /// Creates a grid specification, sanitizing the given configuration.
    ///
    /// - A cell size that isn't strictly positive falls back to
    ///   [`GridConfig::DEFAULT_DIM`].
    /// - Extension counts are raised to at least [`GridConfig::MIN_EXTENSION_CELLS`].
    /// - A telescope percentage that isn't strictly positive disables telescoping.
    /// - A telescope percentage of 20 or more is clamped to 20.
    /// - The layer count is clamped to `1..=MAX_Z_GRIDS - 1`.
    ///
    /// Clamps are recorded as [`GridRemark`]s and logged once.
    pub fn new(config: &GridConfig) -> Self {
        let sanitize_dim = |d: Real| if d > 0.0 { d } else { GridConfig::DEFAULT_DIM };
        let dims = Vector3::new(
            sanitize_dim(config.dim_x),
            sanitize_dim(config.dim_y),
            sanitize_dim(config.dim_z),
        );
        let add_cells = [
            config.add_cells_left,
            config.add_cells_right,
            config.add_cells_up,
            config.add_cells_down,
        ]
        .map(|n| n.max(GridConfig::MIN_EXTENSION_CELLS));

        let mut remarks = vec![];

        let telescope = match config.telescope {
            Some(t) if t >= MAX_TELESCOPE => {
                remarks.push(GridRemark::TelescopeCapped {
                    requested: t,
                    used: MAX_TELESCOPE,
                });
                Some(MAX_TELESCOPE)
            }
            Some(t) if t > 0.0 => Some(t),
            _ => None,
        };

        let num_layers = config.num_z.clamp(1, MAX_Z_GRIDS - 1);
        if num_layers < config.num_z {
            remarks.push(GridRemark::LayerCountCapped {
                requested: config.num_z,
                used: num_layers,
            });
        }

        for remark in &remarks {
            log::warn!("{remark}");
        }

        let layers = match telescope {
            Some(percent) => {
                telescoping_layers(dims.z, percent, config.start_telescope_height, num_layers)
            }
            None => split_layers(dims.z, num_layers),
        };

        GridSpec {
            dims,
            add_cells,
            telescope,
            start_telescope_height: config.start_telescope_height,
            layers,
            min: Point2::origin(),
            max: Point2::origin(),
            num_x: 0,
            num_y: 0,
            remarks,
        }
    }

    /// Computes the horizontal extent of this grid from the union of the bounding
    /// boxes of the given geometries.
    ///
    /// The union is padded by the extension cells of each side. The minimum corner
    /// of the padded box is the origin of the lattice, which then fills a whole
    /// number of cells toward the maximum corner, trimming any excess.
    pub fn compute(&mut self, reference_geometries: &[&TriMesh]) -> Result<(), GridError> {
        if reference_geometries.is_empty() {
            return Err(GridError::NoReferenceGeometry);
        }

        let aabb = reference_geometries
            .iter()
            .fold(Aabb::new_invalid(), |acc, mesh| acc.merged(mesh.aabb()));

        let [left, right, up, down] = self.add_cells.map(|n| n as Real);
        self.min = Point2::new(
            aabb.mins.x - left * self.dims.x,
            aabb.mins.y - down * self.dims.y,
        );
        let padded_max = Point2::new(
            aabb.maxs.x + right * self.dims.x,
            aabb.maxs.y + up * self.dims.y,
        );

        self.num_x = ((padded_max.x - self.min.x) / self.dims.x).floor() as usize;
        self.num_y = ((padded_max.y - self.min.y) / self.dims.y).floor() as usize;
        self.max = Point2::new(
            self.min.x + self.num_x as Real * self.dims.x,
            self.min.y + self.num_y as Real * self.dims.y,
        );

        log::debug!(
            "grid computed: {} x {} cells, {} layers, origin ({}, {})",
            self.num_x,
            self.num_y,
            self.layers.len(),
            self.min.x,
            self.min.y
        );

        Ok(())
    }

    /// The index of the last lattice point along X.
    #[inline]
    pub fn num_x(&self) -> usize {
        self.num_x
    }

    /// The index of the last lattice point along Y.
    #[inline]
    pub fn num_y(&self) -> usize {
        self.num_y
    }

    /// The number of lattice points along X, i.e., `num_x + 1`.
    #[inline]
    pub fn grids_i(&self) -> usize {
        self.num_x + 1
    }

    /// The number of lattice points along Y, i.e., `num_y + 1`.
    #[inline]
    pub fn grids_j(&self) -> usize {
        self.num_y + 1
    }

    /// The first lattice point.
    #[inline]
    pub fn min(&self) -> Point2<Real> {
        self.min
    }

    /// The last lattice point.
    #[inline]
    pub fn max(&self) -> Point2<Real> {
        self.max
    }

    /// The cell sizes along each axis.
    #[inline]
    pub fn dims(&self) -> Vector3<Real> {
        self.dims
    }

    /// The midpoint heights of the vertical layers, strictly increasing.
    #[inline]
    pub fn layers(&self) -> &[Real] {
        &self.layers
    }

    /// The number of vertical layers.
    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// The telescoping growth percentage, `None` for a uniform split grid.
    #[inline]
    pub fn telescope(&self) -> Option<Real> {
        self.telescope
    }

    /// The height above which telescoping layers start growing.
    #[inline]
    pub fn start_telescope_height(&self) -> Real {
        self.start_telescope_height
    }

    /// The non-fatal adjustments made to the requested configuration.
    #[inline]
    pub fn remarks(&self) -> &[GridRemark] {
        &self.remarks
    }

    /// The vertical grid count declared in the model geometry.
    ///
    /// A split grid declares its four extra subdivided bottom layers implicitly, so
    /// its count is `num_layers - 4`. A telescoping grid declares all its layers.
    pub fn grids_z(&self) -> usize {
        if self.telescope.is_some() {
            self.layers.len()
        } else {
            self.layers.len().saturating_sub(4)
        }
    }

    /// The lattice point `(i, j)`.
    #[inline]
    pub fn lattice_point(&self, i: usize, j: usize) -> Point2<Real> {
        Point2::new(
            self.min.x + i as Real * self.dims.x,
            self.min.y + j as Real * self.dims.y,
        )
    }

    /// The indices of the lattice point closest to `(x, y)`.
    ///
    /// Returns `None` if that point lies outside the lattice.
    pub fn cell_index(&self, x: Real, y: Real) -> Option<(usize, usize)> {
        let i = ((x - self.min.x) / self.dims.x).round();
        let j = ((y - self.min.y) / self.dims.y).round();

        if i >= 0.0 && j >= 0.0 && i <= self.num_x as Real && j <= self.num_y as Real {
            Some((i as usize, j as usize))
        } else {
            None
        }
    }

    /// The index of the layer whose midpoint is within [`LAYER_MATCH_TOLERANCE`] of `z`.
    pub fn layer_index(&self, z: Real) -> Option<usize> {
        self.layers
            .iter()
            .position(|layer| (layer - z).abs() <= LAYER_MATCH_TOLERANCE)
    }

    /// The lattice points at the height of the first layer, X-major.
    pub fn grid_xy(&self) -> LatticeXY<'_> {
        LatticeXY::new(self)
    }

    /// The lattice points of the `y = max.y` side of the domain, X-major.
    pub fn grid_xz(&self) -> LatticeXZ<'_> {
        LatticeXZ::new(self)
    }

    /// The lattice points of the `x = max.x` side of the domain, Y-major.
    pub fn grid_yz(&self) -> LatticeYZ<'_> {
        LatticeYZ::new(self)
    }
}

/// Midpoints of a uniform grid whose first five layers split the first cell.
fn split_layers(dim_z: Real, num_layers: usize) -> Vec<Real> {
    let first = dim_z / 5.0;

    (1..=num_layers)
        .map(|i| match i {
            1 => first / 2.0,
            2..=5 => i as Real * first - first / 2.0,
            _ => (i - 4) as Real * dim_z - dim_z / 2.0,
        })
        .collect()
}

/// Midpoints of a grid whose layers grow geometrically above `start_height`.
fn telescoping_layers(
    dim_z: Real,
    percent: Real,
    start_height: Real,
    num_layers: usize,
) -> Vec<Real> {
    let mut layers = Vec::with_capacity(num_layers);
    let mut thickness = dim_z;
    let mut midpoint = 0.0;

    for i in 1..=num_layers {
        if i == 1 || midpoint <= start_height {
            midpoint = i as Real * dim_z - dim_z / 2.0;
        } else {
            let prev_thickness = thickness;
            thickness += thickness * percent / 100.0;
            midpoint += (thickness + prev_thickness) / 2.0;
        }
        layers.push(midpoint);
    }

    layers
}
