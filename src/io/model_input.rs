use crate::grid::GridConfig;
use crate::io::Location;
use crate::shape::TriMesh;

/// The buildings of a model and their materials.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Buildings {
    /// One closed mesh per building.
    pub meshes: Vec<TriMesh>,
    /// Wall material of each building, or a single material for all of them.
    pub wall_materials: Vec<String>,
    /// Roof material of each building, or a single material for all of them.
    pub roof_materials: Vec<String>,
    /// Wall material used when `wall_materials` doesn't match the buildings.
    pub common_wall_material: String,
    /// Roof material used when `roof_materials` doesn't match the buildings.
    pub common_roof_material: String,
    /// 0-based indices of the buildings carrying greenings.
    pub green_ids: Vec<usize>,
    /// Facade greening of each green building, or a single one for all of them.
    pub green_wall_materials: Vec<String>,
    /// Roof greening of each green building, or a single one for all of them.
    pub green_roof_materials: Vec<String>,
}

impl Buildings {
    /// The default wall and roof material.
    pub const DEFAULT_MATERIAL: &'static str = "000000";

    /// Buildings with the default materials and no greening.
    pub fn new(meshes: Vec<TriMesh>) -> Self {
        Buildings {
            meshes,
            wall_materials: vec![],
            roof_materials: vec![],
            common_wall_material: Self::DEFAULT_MATERIAL.to_string(),
            common_roof_material: Self::DEFAULT_MATERIAL.to_string(),
            green_ids: vec![],
            green_wall_materials: vec![],
            green_roof_materials: vec![],
        }
    }
}

/// Flat elements projected on the ground: soils, simple plants or sources.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Elements2d {
    /// Material of the cells not covered by any element.
    pub default_material: String,
    /// Material of each element, or a single material for all of them.
    pub materials: Vec<String>,
    /// One surface per element. Only its vertical projection matters.
    pub surfaces: Vec<TriMesh>,
}

impl Elements2d {
    /// The default soil profile.
    pub const DEFAULT_SOIL: &'static str = "000000";
    /// The default simple plant.
    pub const DEFAULT_PLANT: &'static str = "0000XX";
    /// The default source.
    pub const DEFAULT_SOURCE: &'static str = "0000FT";

    /// Elements sharing the default material.
    pub fn new(default_material: impl Into<String>, surfaces: Vec<TriMesh>) -> Self {
        Elements2d {
            default_material: default_material.into(),
            materials: vec![],
            surfaces,
        }
    }

    /// Sets the material of each element.
    pub fn with_materials(mut self, materials: Vec<String>) -> Self {
        self.materials = materials;
        self
    }
}

/// 3D plants, rooted in the cells covered by the projection of their surfaces.
///
/// Materials are `"ID,Name"` pairs.
pub type Plants3d = Elements2d;

/// The nesting area surrounding the model.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct NestingGrid {
    /// Number of nesting cells around the model.
    pub num_cells: u32,
    /// First soil profile of the nesting cells.
    pub soil_profile_a: String,
    /// Second soil profile of the nesting cells.
    pub soil_profile_b: String,
}

impl Default for NestingGrid {
    fn default() -> Self {
        NestingGrid {
            num_cells: 3,
            soil_profile_a: "0000LO".to_string(),
            soil_profile_b: "0000LO".to_string(),
        }
    }
}

/// Everything needed to generate a model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ModelInput {
    /// Geographic location.
    pub location: Location,
    /// Grid parameters.
    pub grid: GridConfig,
    /// Nesting area.
    pub nesting_grid: NestingGrid,
    /// Buildings. They define the grid extent unless the grid has a base surface.
    pub buildings: Buildings,
    /// Soil patches.
    pub soils: Elements2d,
    /// Simple plants, if any.
    pub plants_2d: Option<Elements2d>,
    /// 3D plants, if any.
    pub plants_3d: Option<Plants3d>,
    /// Pollutant sources, if any.
    pub sources: Option<Elements2d>,
}

impl ModelInput {
    /// A model made of buildings only, with default settings everywhere else.
    pub fn new(buildings: Buildings) -> Self {
        ModelInput {
            location: Location::default(),
            grid: GridConfig::default(),
            nesting_grid: NestingGrid::default(),
            buildings,
            soils: Elements2d::new(Elements2d::DEFAULT_SOIL, vec![]),
            plants_2d: None,
            plants_3d: None,
            sources: None,
        }
    }
}
