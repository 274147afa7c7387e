//! Resolution of the materials of every object.
//!
//! Material identifiers are opaque strings from the ENVI-met database. Each object
//! category gets one material per object, resolved from user lists that may hold one
//! value per object, a single value shared by all objects, or anything else (in
//! which case a fallback applies).

pub use self::building_materials::{BuildingMaterials, GreeningSet, GREEN_NULL_MATERIAL};
pub use self::element_materials::ElementMaterials;

mod building_materials;
mod element_materials;

/// Errors raised while resolving materials.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MaterialError {
    /// A green building index doesn't designate any building.
    #[error("the green building index {index} is out of range: there are {num_buildings} buildings")]
    GreenIndexOutOfRange {
        /// The faulty green building index (0-based).
        index: usize,
        /// The number of buildings.
        num_buildings: usize,
    },
}

/// Resolves one material per object from a user list.
///
/// - If `list` has exactly `n` entries, object `i` gets `list[i]`.
/// - If `list` has a single entry, every object gets it.
/// - Otherwise, every object gets `fallback`.
pub fn resolve_materials(n: usize, list: &[String], fallback: &str) -> Vec<String> {
    if list.len() == n {
        list.to_vec()
    } else if list.len() == 1 {
        vec![list[0].clone(); n]
    } else {
        vec![fallback.to_string(); n]
    }
}
