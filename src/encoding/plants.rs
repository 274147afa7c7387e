use crate::materials::ElementMaterials;
use crate::voxelization::OccupancyGrid2;

/// A 3D plant rooted in one cell of the model.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PlantCell {
    /// 1-based root cell index along X.
    pub root_i: usize,
    /// 1-based root cell index along Y.
    pub root_j: usize,
    /// Root cell layer, always `0`.
    pub root_k: usize,
    /// Plant identifier in the database.
    pub plant_id: String,
    /// Plant description.
    pub name: String,
    /// Whether the plant is observed, always `0`.
    pub observe: u32,
}

/// Lists the 3D plants of a merged plant grid.
///
/// The material of each plant is `"ID,Name"`, split at its first comma; a material
/// without comma is an identifier with an empty name. Cells are visited by increasing
/// `i`, then decreasing `j` from the last row down to `1`: the row `j = 0` lies on the
/// border of the domain and never carries a plant.
pub fn plant_list(grid: &OccupancyGrid2, materials: &ElementMaterials) -> Vec<PlantCell> {
    let [ni, nj] = grid.shape();
    let mut plants = vec![];

    for i in 0..ni {
        for j in (1..nj).rev() {
            let index = grid.get(i, j);
            if index == 0 {
                continue;
            }

            let material = materials.material_of(index);
            let (plant_id, name) = material.split_once(',').unwrap_or((material, ""));

            plants.push(PlantCell {
                root_i: i + 1,
                root_j: j + 1,
                root_k: 0,
                plant_id: plant_id.to_string(),
                name: name.to_string(),
                observe: 0,
            });
        }
    }

    plants
}
