mod cube_model;
mod greening;
mod model_files;
mod skipped_objects;
mod trimesh_section;

use envigrid::na::{Point2, Point3};
use envigrid::shape::TriMesh;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn cube(mins: [f64; 3], maxs: [f64; 3]) -> TriMesh {
    TriMesh::cuboid(Point3::from(mins), Point3::from(maxs))
}

pub fn patch(mins: [f64; 2], maxs: [f64; 2]) -> TriMesh {
    TriMesh::rectangle(Point2::from(mins), Point2::from(maxs), 0.0)
}

pub fn revision_date() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// The text between `<tag ...>` and `</tag>`.
pub fn tag_value<'a>(document: &'a str, tag: &str) -> &'a str {
    let open = format!("<{tag}");
    let start = document.find(&open).unwrap() + open.len();
    let start = start + document[start..].find('>').unwrap() + 1;
    let end = start + document[start..].find(&format!("</{tag}>")).unwrap();
    &document[start..end]
}
