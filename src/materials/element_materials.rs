use crate::materials::resolve_materials;

/// The resolved materials of a category of 2D elements (soils, plants, sources).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ElementMaterials {
    default: String,
    custom: Vec<String>,
}

impl ElementMaterials {
    /// Resolves the materials of `num_elements` elements, falling back to `default`.
    pub fn new(num_elements: usize, custom: &[String], default: &str) -> Self {
        ElementMaterials {
            default: default.to_string(),
            custom: resolve_materials(num_elements, custom, default),
        }
    }

    /// The material of the cells not covered by any element.
    #[inline]
    pub fn default_material(&self) -> &str {
        &self.default
    }

    /// The material of each element.
    #[inline]
    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    /// The material of the cell tagged with `index`.
    ///
    /// `0` and indices without element map to the default material.
    pub fn material_of(&self, index: u32) -> &str {
        index
            .checked_sub(1)
            .and_then(|i| self.custom.get(i as usize))
            .map_or(self.default.as_str(), |m| m.as_str())
    }
}
