use envigrid::io::{Buildings, Elements2d, ModelInput, ModelSerializer, ObjectCategory};
use envigrid::na::Point3;
use envigrid::query::SectionError;
use envigrid::shape::TriMesh;
use envigrid::voxelization::VoxelizationError;

use crate::{cube, init_logger, patch, tag_value};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn broken_building_is_skipped() {
    init_logger();
    let template = cube([0.0; 3], [9.0; 3]);
    let mut vertices = template.vertices().to_vec();
    vertices[6] = Point3::new(f64::NAN, 9.0, 9.0);
    let broken = TriMesh::new(vertices, template.indices().to_vec()).unwrap();

    let mut input = ModelInput::new(Buildings::new(vec![broken, template]));
    input.grid.base_surface = Some(patch([0.0, 0.0], [9.0, 9.0]));

    let rendered = ModelSerializer::new("unused", "model").render(&input).unwrap();
    let skipped = &rendered.diagnostics.skipped;

    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].category, ObjectCategory::Building);
    assert_eq!(skipped[0].index, 0);
    assert_eq!(
        skipped[0].reason,
        VoxelizationError::Section(SectionError::NonFiniteVertex(6))
    );

    // The remaining building keeps its own index.
    let ids = tag_value(&rendered.document, "buildingNr");
    assert_eq!(ids.lines().nth(4), Some("0,0,2,2,2,0,0,0"));
    assert!(tag_value(&rendered.document, "buildingFlagAndNr").starts_with("\n2,2,0,1,2\n"));
}

#[test]
fn broken_soil_is_skipped() {
    init_logger();
    let broken = TriMesh::new(
        vec![
            Point3::new(f64::NAN, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap();

    let mut input = ModelInput::new(Buildings::new(vec![cube([0.0; 3], [9.0; 3])]));
    input.soils = Elements2d::new(Elements2d::DEFAULT_SOIL, vec![broken]);

    let rendered = ModelSerializer::new("unused", "model").render(&input).unwrap();
    let skipped = &rendered.diagnostics.skipped;

    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].category, ObjectCategory::Soil);
    assert_eq!(skipped[0].reason, VoxelizationError::NonFiniteVertex(0));
    assert!(tag_value(&rendered.document, "ID_soilprofile")
        .lines()
        .skip(1)
        .all(|l| l.split(',').all(|m| m == "000000")));
}

#[test]
fn overlapping_soils_keep_the_last_one() {
    init_logger();
    let mut input = ModelInput::new(Buildings::new(vec![cube([0.0; 3], [9.0; 3])]));
    input.soils = Elements2d::new(
        Elements2d::DEFAULT_SOIL,
        vec![patch([0.0, 0.0], [6.0, 6.0]), patch([3.0, 3.0], [9.0, 9.0])],
    )
    .with_materials(names(&["0000SA", "0000SB"]));

    let rendered = ModelSerializer::new("unused", "model").render(&input).unwrap();
    let soils: Vec<_> = tag_value(&rendered.document, "ID_soilprofile")
        .lines()
        .collect();

    assert_eq!(
        soils[4],
        "000000,000000,0000SA,0000SB,0000SB,0000SB,000000,000000"
    );
    assert_eq!(
        soils[6],
        "000000,000000,0000SA,0000SA,0000SA,000000,000000,000000"
    );
}
