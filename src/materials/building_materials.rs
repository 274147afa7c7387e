use crate::materials::{resolve_materials, MaterialError};

/// The placeholder material of a green building without greening on one of its sides.
pub const GREEN_NULL_MATERIAL: &str = " ";

/// The greening overlays of a subset of the buildings.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GreeningSet {
    building_ids: Vec<usize>,
    base_wall: Vec<String>,
    base_roof: Vec<String>,
    green_wall: Vec<String>,
    green_roof: Vec<String>,
}

impl GreeningSet {
    /// The 0-based indices of the green buildings.
    #[inline]
    pub fn building_ids(&self) -> &[usize] {
        &self.building_ids
    }

    /// The number of green buildings.
    #[inline]
    pub fn len(&self) -> usize {
        self.building_ids.len()
    }

    /// Is there no green building?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.building_ids.is_empty()
    }

    /// The wall material of each green building, without its greening.
    #[inline]
    pub fn base_wall(&self) -> &[String] {
        &self.base_wall
    }

    /// The roof material of each green building, without its greening.
    #[inline]
    pub fn base_roof(&self) -> &[String] {
        &self.base_roof
    }

    /// The facade greening of each green building.
    #[inline]
    pub fn green_wall(&self) -> &[String] {
        &self.green_wall
    }

    /// The roof greening of each green building.
    #[inline]
    pub fn green_roof(&self) -> &[String] {
        &self.green_roof
    }
}

/// The resolved wall and roof materials of every building.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BuildingMaterials {
    wall: Vec<String>,
    roof: Vec<String>,
    common_wall: String,
    common_roof: String,
    greening: GreeningSet,
}

impl BuildingMaterials {
    /// Resolves the wall and roof materials of `num_buildings` buildings.
    ///
    /// Walls and roofs are resolved independently with
    /// [`resolve_materials`], falling back to the common wall and roof materials.
    pub fn new(
        num_buildings: usize,
        wall: &[String],
        roof: &[String],
        common_wall: &str,
        common_roof: &str,
    ) -> Self {
        BuildingMaterials {
            wall: resolve_materials(num_buildings, wall, common_wall),
            roof: resolve_materials(num_buildings, roof, common_roof),
            common_wall: common_wall.to_string(),
            common_roof: common_roof.to_string(),
            greening: GreeningSet::default(),
        }
    }

    /// Adds greening overlays to the buildings designated by `green_ids`.
    ///
    /// The current materials of the green buildings are kept aside, then the greening
    /// lists are resolved over the green buildings with [`GREEN_NULL_MATERIAL`] as
    /// fallback.
    pub fn with_greening(
        mut self,
        green_ids: &[usize],
        green_wall: &[String],
        green_roof: &[String],
    ) -> Result<Self, MaterialError> {
        let num_buildings = self.wall.len();
        if let Some(index) = green_ids.iter().find(|id| **id >= num_buildings) {
            return Err(MaterialError::GreenIndexOutOfRange {
                index: *index,
                num_buildings,
            });
        }

        self.greening = GreeningSet {
            building_ids: green_ids.to_vec(),
            base_wall: green_ids.iter().map(|id| self.wall[*id].clone()).collect(),
            base_roof: green_ids.iter().map(|id| self.roof[*id].clone()).collect(),
            green_wall: resolve_materials(green_ids.len(), green_wall, GREEN_NULL_MATERIAL),
            green_roof: resolve_materials(green_ids.len(), green_roof, GREEN_NULL_MATERIAL),
        };

        Ok(self)
    }

    /// The wall material of each building.
    #[inline]
    pub fn wall(&self) -> &[String] {
        &self.wall
    }

    /// The roof material of each building.
    #[inline]
    pub fn roof(&self) -> &[String] {
        &self.roof
    }

    /// The material of the walls without any specific material.
    #[inline]
    pub fn common_wall(&self) -> &str {
        &self.common_wall
    }

    /// The material of the roofs without any specific material.
    #[inline]
    pub fn common_roof(&self) -> &str {
        &self.common_roof
    }

    /// The greening overlays.
    #[inline]
    pub fn greening(&self) -> &GreeningSet {
        &self.greening
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn walls_and_roofs_resolve_independently() {
        let materials = BuildingMaterials::new(
            3,
            &names(&["w1", "w2", "w3"]),
            &names(&["r1", "r2"]),
            "000000",
            "000001",
        );
        assert_eq!(materials.wall(), names(&["w1", "w2", "w3"]));
        assert_eq!(materials.roof(), names(&["000001", "000001", "000001"]));
        assert!(materials.greening().is_empty());
    }

    #[test]
    fn greening_keeps_the_base_materials() {
        let materials = BuildingMaterials::new(
            3,
            &names(&["w1", "w2", "w3"]),
            &names(&["r"]),
            "000000",
            "000001",
        )
        .with_greening(&[2, 0], &names(&["g1", "g2"]), &[])
        .unwrap();

        let greening = materials.greening();
        assert_eq!(greening.building_ids(), &[2, 0]);
        assert_eq!(greening.base_wall(), names(&["w3", "w1"]));
        assert_eq!(greening.base_roof(), names(&["r", "r"]));
        assert_eq!(greening.green_wall(), names(&["g1", "g2"]));
        assert_eq!(greening.green_roof(), names(&[" ", " "]));
    }

    #[test]
    fn green_index_must_exist() {
        let materials = BuildingMaterials::new(2, &[], &[], "000000", "000001");
        assert_eq!(
            materials.with_greening(&[0, 2], &[], &[]),
            Err(MaterialError::GreenIndexOutOfRange {
                index: 2,
                num_buildings: 2
            })
        );
    }
}
