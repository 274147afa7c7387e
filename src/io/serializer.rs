use core::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::encoding;
use crate::grid::{GridError, GridRemark, GridSpec};
use crate::io::atomic_write::write_atomically;
use crate::io::section::{render_document, AttributeMode, Section};
use crate::io::{Elements2d, ModelInput};
use crate::materials::{BuildingMaterials, ElementMaterials, MaterialError};
use crate::math::DEFAULT_EPSILON;
use crate::shape::TriMesh;
use crate::voxelization::{self, OccupancyGrid2, OccupancyGrid3, VoxelizationError};

/// The extension of area input files.
pub const INX_EXTENSION: &str = "INX";

/// The file name used when none is given.
pub const DEFAULT_FILE_NAME: &str = "DragonflyEnvimet";

/// The format of revision dates in area input files.
pub const REVISION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The category of an input object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ObjectCategory {
    /// A building.
    Building,
    /// A soil patch.
    Soil,
    /// A simple plant.
    Plant2d,
    /// A 3D plant.
    Plant3d,
    /// A pollutant source.
    Source,
}

impl fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectCategory::Building => "building",
            ObjectCategory::Soil => "soil",
            ObjectCategory::Plant2d => "simple plant",
            ObjectCategory::Plant3d => "3D plant",
            ObjectCategory::Source => "source",
        };
        f.write_str(name)
    }
}

/// An object left out of the model because it couldn't be voxelized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SkippedObject {
    /// The category of the object.
    pub category: ObjectCategory,
    /// The 0-based index of the object in its category.
    pub index: usize,
    /// Why the object was skipped.
    pub reason: VoxelizationError,
}

/// The non-fatal events of a generation.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Diagnostics {
    /// The objects left out of the model.
    pub skipped: Vec<SkippedObject>,
    /// The adjustments made to the grid configuration.
    pub remarks: Vec<GridRemark>,
}

impl Diagnostics {
    fn skip(&mut self, category: ObjectCategory, index: usize, reason: VoxelizationError) {
        log::warn!("{category} {index} skipped: {reason}");
        self.skipped.push(SkippedObject {
            category,
            index,
            reason,
        });
    }
}

/// Errors aborting a generation. Nothing is written when they occur.
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    /// The destination folder doesn't exist.
    #[error("the destination folder {0} doesn't exist")]
    MissingFolder(PathBuf),
    /// A building isn't a closed mesh.
    #[error("the building {index} is not a closed mesh")]
    OpenBuilding {
        /// The 0-based index of the building.
        index: usize,
    },
    /// The grid couldn't be computed.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The materials couldn't be resolved.
    #[error(transparent)]
    Material(#[from] MaterialError),
    /// The file couldn't be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A model rendered in memory.
#[derive(Clone, Debug)]
pub struct Rendered {
    /// The content of the area input file.
    pub document: String,
    /// The grid of the model.
    pub grid: GridSpec,
    /// The non-fatal events of the rendering.
    pub diagnostics: Diagnostics,
}

/// A model written to disk.
#[derive(Clone, Debug)]
pub struct Generated {
    /// The path of the area input file.
    pub path: PathBuf,
    /// The grid of the model.
    pub grid: GridSpec,
    /// The non-fatal events of the generation.
    pub diagnostics: Diagnostics,
}

/// Writes ENVI-met area input files.
#[derive(Clone, Debug)]
pub struct ModelSerializer {
    folder: PathBuf,
    file_name: String,
    revision_date: Option<NaiveDateTime>,
}

impl ModelSerializer {
    /// A serializer writing `<file_name>.INX` into `folder`.
    pub fn new(folder: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        ModelSerializer {
            folder: folder.into(),
            file_name: file_name.into(),
            revision_date: None,
        }
    }

    /// Uses a fixed revision date instead of the current local time.
    pub fn with_revision_date(mut self, date: NaiveDateTime) -> Self {
        self.revision_date = Some(date);
        self
    }

    /// The path of the generated file.
    pub fn output_path(&self) -> PathBuf {
        let name = if self.file_name.is_empty() {
            DEFAULT_FILE_NAME
        } else {
            &self.file_name
        };
        self.folder.join(format!("{name}.{INX_EXTENSION}"))
    }

    /// Renders the model and writes it atomically to [`Self::output_path`].
    pub fn generate(&self, input: &ModelInput) -> Result<Generated, GenerationError> {
        if !self.folder.is_dir() {
            return Err(GenerationError::MissingFolder(self.folder.clone()));
        }

        let rendered = self.render(input)?;
        let path = self.output_path();
        write_atomically(&path, rendered.document.as_bytes())?;
        log::debug!("model written to {}", path.display());

        Ok(Generated {
            path,
            grid: rendered.grid,
            diagnostics: rendered.diagnostics,
        })
    }

    /// Renders the model in memory.
    pub fn render(&self, input: &ModelInput) -> Result<Rendered, GenerationError> {
        let buildings = &input.buildings;

        if let Some(index) = buildings.meshes.iter().position(|m| !m.is_closed()) {
            return Err(GenerationError::OpenBuilding { index });
        }

        let materials = BuildingMaterials::new(
            buildings.meshes.len(),
            &buildings.wall_materials,
            &buildings.roof_materials,
            &buildings.common_wall_material,
            &buildings.common_roof_material,
        )
        .with_greening(
            &buildings.green_ids,
            &buildings.green_wall_materials,
            &buildings.green_roof_materials,
        )?;

        let mut spec = GridSpec::new(&input.grid);
        match &input.grid.base_surface {
            Some(surface) => spec.compute(&[surface])?,
            None => spec.compute(&buildings.meshes.iter().collect::<Vec<_>>())?,
        }

        let mut diagnostics = Diagnostics {
            skipped: vec![],
            remarks: spec.remarks().to_vec(),
        };

        // Buildings.
        let mut face_log = String::new();
        let building_grids: Vec<_> = buildings
            .meshes
            .iter()
            .enumerate()
            .map(|(index, mesh)| {
                voxelize_3d(&spec, mesh, index, &mut face_log, &mut diagnostics)
            })
            .collect();
        let shape = [spec.grids_i(), spec.grids_j(), spec.num_layers()];
        let merged = voxelization::merge_3d(shape, &building_grids);

        let greening = materials.greening();
        let green_grids: Vec<_> = greening
            .building_ids()
            .iter()
            .enumerate()
            .map(|(position, id)| relabel(&building_grids[*id], position as u32 + 1))
            .collect();
        let green_merged = voxelization::merge_3d(shape, &green_grids);

        // Flat elements.
        let soils = voxelize_elements(&spec, &input.soils, ObjectCategory::Soil, &mut diagnostics);
        let plants_2d = input.plants_2d.as_ref().map(|elements| {
            voxelize_elements(&spec, elements, ObjectCategory::Plant2d, &mut diagnostics)
        });
        let plants_3d = input.plants_3d.as_ref().map(|elements| {
            voxelize_elements(&spec, elements, ObjectCategory::Plant3d, &mut diagnostics)
        });
        let sources = input.sources.as_ref().map(|elements| {
            voxelize_elements(&spec, elements, ObjectCategory::Source, &mut diagnostics)
        });

        // Encoding.
        let wall_db = encoding::sparse_matrix(&encoding::classify_faces(
            &merged,
            materials.wall(),
            materials.roof(),
        ));
        let green_db = encoding::sparse_matrix(&encoding::classify_faces(
            &green_merged,
            greening.green_wall(),
            greening.green_roof(),
        ));

        let (grids_i, grids_j) = (spec.grids_i(), spec.grids_j());
        let blank_matrix = format!("\n{}", encoding::empty_matrix(grids_i, grids_j, ""));
        let zero_matrix = format!("\n{}", encoding::empty_matrix(grids_i, grids_j, "0"));
        let element_matrix = |elements: &Option<(OccupancyGrid2, ElementMaterials)>| {
            elements.as_ref().map_or(blank_matrix.clone(), |(grid, materials)| {
                format!("\n{}", encoding::material_matrix_2d(grid, materials))
            })
        };
        let matrix = |grid: &OccupancyGrid2| format!("\n{}", encoding::matrix_2d(grid));

        let revision_date = self
            .revision_date
            .unwrap_or_else(|| chrono::Local::now().naive_local())
            .format(REVISION_DATE_FORMAT)
            .to_string();
        let location = &input.location;
        let attr_2d = AttributeMode::Matrix2d {
            i: grids_i,
            j: grids_j,
        };
        let attr_3d = |default: &str| AttributeMode::Matrix3d {
            i: grids_i,
            j: grids_j,
            k: spec.num_layers(),
            default: default.to_string(),
        };

        let mut sections = vec![
            Section::new("Header", AttributeMode::None)
                .with("filetype", "INPX ENVI-met Area Input File")
                .with("version", "401")
                .with("revisiondate", revision_date)
                .with("remark", "Created with envigrid")
                .with("encryptionlevel", "0"),
            Section::new("baseData", AttributeMode::None)
                .with("modelDescription", " A brave new area ")
                .with("modelAuthor", " envigrid "),
            model_geometry(&spec),
            Section::new("nestingArea", AttributeMode::None)
                .with("numberNestinggrids", input.nesting_grid.num_cells.to_string())
                .with("soilProfileA", input.nesting_grid.soil_profile_a.as_str())
                .with("soilProfileB", input.nesting_grid.soil_profile_b.as_str()),
            Section::new("locationData", AttributeMode::None)
                .with("modelRotation", format!("{:.5}", location.model_rotation))
                .with("projectionSystem", " ")
                .with("realworldLowerLeft_X", " 0.00000 ")
                .with("realworldLowerLeft_Y", " 0.00000 ")
                .with("locationName", location.name.as_str())
                .with("location_Longitude", format!("{:.6}", location.longitude))
                .with("location_Latitude", format!("{:.6}", location.latitude))
                .with("locationTimeZone_Name", location.time_zone.as_str())
                .with("locationTimeZone_Longitude", " 15.00000 "),
            Section::new("defaultSettings", AttributeMode::None)
                .with("commonWallMaterial", materials.common_wall())
                .with("commonRoofMaterial", materials.common_roof()),
            Section::new("buildings2D", attr_2d.clone())
                .with(
                    "zTop",
                    matrix(&encoding::building_top_2d(&merged, spec.layers())),
                )
                .with(
                    "zBottom",
                    matrix(&encoding::building_bottom_2d(&merged, spec.layers())),
                )
                .with("buildingNr", matrix(&encoding::building_id_2d(&merged)))
                .with("fixedheight", zero_matrix.as_str()),
            Section::new("simpleplants2D", attr_2d.clone())
                .with("ID_plants1D", element_matrix(&plants_2d)),
        ];

        if let Some((grid, materials)) = &plants_3d {
            for plant in encoding::plant_list(grid, materials) {
                sections.push(
                    Section::new("3Dplants", AttributeMode::None)
                        .with("rootcell_i", plant.root_i.to_string())
                        .with("rootcell_j", plant.root_j.to_string())
                        .with("rootcell_k", plant.root_k.to_string())
                        .with("plantID", plant.plant_id)
                        .with("name", plant.name)
                        .with("observe", plant.observe.to_string()),
                );
            }
        }

        sections.extend([
            Section::new("soils2D", attr_2d.clone())
                .with("ID_soilprofile", element_matrix(&Some(soils))),
            Section::new("dem", attr_2d.clone()).with("terrainheight", zero_matrix.as_str()),
            Section::new("sources2D", attr_2d.clone()).with("ID_sources", element_matrix(&sources)),
            Section::new("receptors2D", attr_2d.clone())
                .with("ID_receptors", blank_matrix.as_str()),
            Section::new("additionalData", attr_2d)
                .with("db_link_point", blank_matrix.as_str())
                .with("db_link_area", blank_matrix.as_str()),
        ]);

        for (position, id) in greening.building_ids().iter().enumerate() {
            sections.push(
                Section::new("Buildinginfo", AttributeMode::None)
                    .with("BuildingInternalNr", (id + 1).to_string())
                    .with("BuildingName", " ")
                    .with("BuildingWallMaterial", greening.base_wall()[position].as_str())
                    .with("BuildingRoofMaterial", greening.base_roof()[position].as_str())
                    .with("BuildingFacadeGreening", greening.green_wall()[position].as_str())
                    .with("BuildingRoofGreening", greening.green_roof()[position].as_str()),
            );
        }

        let greening_value = if greening.is_empty() {
            " ".to_string()
        } else {
            format!("\n{green_db}")
        };

        sections.extend([
            Section::new("modelGeometry3D", AttributeMode::None)
                .with("grids3D-I", grids_i.to_string())
                .with("grids3D-J", grids_j.to_string())
                .with("grids3D-K", spec.num_layers().to_string()),
            Section::new("buildings3D", attr_3d("0"))
                .with("buildingFlagAndNr", format!("\n{face_log}")),
            Section::new("dem3D", attr_3d("0.00000")).with("terrainflag", "\n"),
            Section::new("WallDB", attr_3d("")).with("ID_wallDB", format!("\n{wall_db}")),
            Section::new("SingleWallDB", attr_3d("")).with("ID_singlewallDB", "\n"),
            Section::new("GreeningDB", attr_3d("")).with("ID_GreeningDB", greening_value),
        ]);

        log::debug!(
            "model rendered: {} sections, {} skipped objects",
            sections.len(),
            diagnostics.skipped.len()
        );

        Ok(Rendered {
            document: render_document(&sections),
            grid: spec,
            diagnostics,
        })
    }
}

/// Writes a model with the default file name into `folder`.
pub fn generate(folder: &Path, input: &ModelInput) -> Result<Generated, GenerationError> {
    ModelSerializer::new(folder, DEFAULT_FILE_NAME).generate(input)
}

fn model_geometry(spec: &GridSpec) -> Section {
    let dims = spec.dims();
    let (use_telescoping, use_splitting, vertical_stretch, start_stretch) = match spec.telescope()
    {
        Some(percent) => (
            "1",
            "0",
            percent.to_string(),
            spec.start_telescope_height().to_string(),
        ),
        None => ("0", "1", "0".to_string(), "0".to_string()),
    };

    Section::new("modelGeometry", AttributeMode::None)
        .with("grids-I", spec.grids_i().to_string())
        .with("grids-J", spec.grids_j().to_string())
        .with("grids-Z", spec.grids_z().to_string())
        .with("dx", format!("{:.5}", dims.x))
        .with("dy", format!("{:.5}", dims.y))
        .with("dz-base", format!("{:.5}", dims.z))
        .with("useTelescoping_grid", use_telescoping)
        .with("useSplitting", use_splitting)
        .with("verticalStretch", vertical_stretch)
        .with("startStretch", start_stretch)
        .with("has3DModel", "1")
        .with("isFull3DDesign", "1")
}

fn voxelize_3d(
    spec: &GridSpec,
    mesh: &TriMesh,
    index: usize,
    face_log: &mut String,
    diagnostics: &mut Diagnostics,
) -> OccupancyGrid3 {
    voxelization::rasterize_3d(spec, mesh, index as u32 + 1, DEFAULT_EPSILON, face_log)
        .unwrap_or_else(|err| {
            diagnostics.skip(ObjectCategory::Building, index, err);
            OccupancyGrid3::for_spec(spec)
        })
}

fn voxelize_elements(
    spec: &GridSpec,
    elements: &Elements2d,
    category: ObjectCategory,
    diagnostics: &mut Diagnostics,
) -> (OccupancyGrid2, ElementMaterials) {
    let grids: Vec<_> = elements
        .surfaces
        .iter()
        .enumerate()
        .map(|(index, surface)| {
            voxelization::rasterize_2d(spec, surface, index as u32 + 1, DEFAULT_EPSILON)
                .unwrap_or_else(|err| {
                    diagnostics.skip(category, index, err);
                    OccupancyGrid2::for_spec(spec)
                })
        })
        .collect();

    let merged = voxelization::merge_2d([spec.grids_i(), spec.grids_j()], &grids);
    let materials = ElementMaterials::new(
        elements.surfaces.len(),
        &elements.materials,
        &elements.default_material,
    );

    (merged, materials)
}

fn relabel(grid: &OccupancyGrid3, label: u32) -> OccupancyGrid3 {
    let mut result = grid.clone();
    for value in result.as_mut_slice() {
        if *value != 0 {
            *value = label;
        }
    }
    result
}
