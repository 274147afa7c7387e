use envigrid::io::{
    self, write_simulation_file, Buildings, Elements2d, GenerationError, ModelInput,
    ModelSerializer, SimulationConfig,
};
use envigrid::na::Point3;
use envigrid::shape::TriMesh;

use crate::{cube, init_logger, patch, revision_date, tag_value};

fn cube_input() -> ModelInput {
    ModelInput::new(Buildings::new(vec![cube([0.0; 3], [9.0; 3])]))
}

fn num_files(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[test]
fn generated_file_matches_rendering() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let serializer = ModelSerializer::new(dir.path(), "model").with_revision_date(revision_date());

    let generated = serializer.generate(&cube_input()).unwrap();
    assert_eq!(generated.path, dir.path().join("model.INX"));
    assert_eq!(generated.grid.grids_i(), 8);

    let written = std::fs::read_to_string(&generated.path).unwrap();
    assert_eq!(written, serializer.render(&cube_input()).unwrap().document);
    assert_eq!(num_files(dir.path()), 1);
}

#[test]
fn default_file_name() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();

    let generated = io::generate(dir.path(), &cube_input()).unwrap();
    assert_eq!(generated.path, dir.path().join("DragonflyEnvimet.INX"));
    assert!(generated.path.is_file());
}

#[test]
fn missing_folder() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("missing");

    let result = ModelSerializer::new(&folder, "model").generate(&cube_input());
    assert!(matches!(result, Err(GenerationError::MissingFolder(ref f)) if *f == folder));
    assert_eq!(num_files(dir.path()), 0);
}

#[test]
fn open_building_aborts_generation() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let roof = TriMesh::new(
        vec![
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(3.0, 0.0, 3.0),
            Point3::new(0.0, 3.0, 3.0),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let input = ModelInput::new(Buildings::new(vec![cube([0.0; 3], [9.0; 3]), roof]));

    let result = ModelSerializer::new(dir.path(), "model").generate(&input);
    assert!(matches!(result, Err(GenerationError::OpenBuilding { index: 1 })));
    assert_eq!(num_files(dir.path()), 0);
}

#[test]
fn plants_and_sources() {
    init_logger();
    let mut input = cube_input();
    input.plants_3d = Some(
        Elements2d::new("", vec![patch([0.0, 0.0], [3.0, 3.0])])
            .with_materials(vec!["0000AA,Tree".to_string()]),
    );
    input.sources = Some(
        Elements2d::new(Elements2d::DEFAULT_SOURCE, vec![patch([6.0, 6.0], [9.0, 9.0])])
            .with_materials(vec!["0000ST".to_string()]),
    );

    let doc = ModelSerializer::new("unused", "model")
        .render(&input)
        .unwrap()
        .document;

    assert_eq!(doc.matches("<3Dplants>").count(), 4);
    assert_eq!(tag_value(&doc, "rootcell_i"), "3");
    assert_eq!(tag_value(&doc, "rootcell_j"), "4");
    assert_eq!(tag_value(&doc, "rootcell_k"), "0");
    assert_eq!(tag_value(&doc, "plantID"), "0000AA");
    assert_eq!(tag_value(&doc, "name"), "Tree");
    assert_eq!(tag_value(&doc, "observe"), "0");

    let plants_pos = doc.find("<3Dplants>").unwrap();
    assert!(doc.find("<simpleplants2D>").unwrap() < plants_pos);
    assert!(plants_pos < doc.find("<soils2D>").unwrap());

    let sources = tag_value(&doc, "ID_sources");
    assert_eq!(
        sources.lines().nth(3),
        Some("0000FT,0000FT,0000FT,0000FT,0000ST,0000ST,0000FT,0000FT")
    );
    assert_eq!(
        sources.lines().nth(1),
        Some("0000FT,0000FT,0000FT,0000FT,0000FT,0000FT,0000FT,0000FT")
    );
}

#[test]
fn simulation_file_next_to_model() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let generated = ModelSerializer::new(dir.path(), "model")
        .generate(&cube_input())
        .unwrap();

    let mut config = SimulationConfig::new(&generated.path);
    config.sim_name = "summer".to_string();
    config.parallel = true;

    let path = write_simulation_file(&config, Some(revision_date())).unwrap();
    assert_eq!(path, dir.path().join("summer.simx"));

    let doc = std::fs::read_to_string(&path).unwrap();
    assert_eq!(tag_value(&doc, "revisiondate"), "2024.05.01 12:00:00");
    assert_eq!(
        tag_value(&doc, "INXFile"),
        generated.path.display().to_string()
    );
    assert_eq!(tag_value(&doc, "filebaseName"), "summer");
    assert_eq!(tag_value(&doc, "CPUdemand"), "ALL");
    assert_eq!(num_files(dir.path()), 2);
}

#[test]
fn numeric_tags_round_trip() {
    init_logger();
    let mut input = cube_input();
    input.grid.dim_x = 2.5;
    input.grid.dim_y = 1.0 / 3.0;
    input.location = envigrid::io::Location {
        name: "R&D <campus>".to_string(),
        latitude: 44.493671,
        longitude: 11.343035,
        time_zone: envigrid::io::time_zone_name(1.0),
        model_rotation: 12.345678,
    };

    let doc = ModelSerializer::new("unused", "model")
        .render(&input)
        .unwrap()
        .document;
    let number = |tag| tag_value(&doc, tag).parse::<f64>().unwrap();

    assert!((number("dx") - 2.5).abs() < 1.0e-5);
    assert!((number("dy") - 1.0 / 3.0).abs() < 1.0e-5);
    assert!((number("modelRotation") - 12.345678).abs() < 1.0e-5);
    assert!((number("location_Latitude") - 44.493671).abs() < 1.0e-5);
    assert!((number("location_Longitude") - 11.343035).abs() < 1.0e-5);
    assert_eq!(tag_value(&doc, "locationTimeZone_Name"), "UTC+1");
    assert_eq!(
        io::unescape(tag_value(&doc, "locationName")),
        "R&D <campus>"
    );
}
