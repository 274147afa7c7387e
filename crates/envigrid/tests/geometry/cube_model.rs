use envigrid::io::{Buildings, ModelInput, ModelSerializer};

use crate::{cube, init_logger, revision_date, tag_value};

const SECTIONS: [&str; 19] = [
    "Header",
    "baseData",
    "modelGeometry",
    "nestingArea",
    "locationData",
    "defaultSettings",
    "buildings2D",
    "simpleplants2D",
    "soils2D",
    "dem",
    "sources2D",
    "receptors2D",
    "additionalData",
    "modelGeometry3D",
    "buildings3D",
    "dem3D",
    "WallDB",
    "SingleWallDB",
    "GreeningDB",
];

fn cube_input() -> ModelInput {
    let mut buildings = Buildings::new(vec![cube([0.0; 3], [9.0; 3])]);
    buildings.wall_materials = vec!["0000W1".to_string()];
    buildings.roof_materials = vec!["0000R1".to_string()];
    ModelInput::new(buildings)
}

fn render() -> String {
    init_logger();
    ModelSerializer::new("unused", "cube")
        .with_revision_date(revision_date())
        .render(&cube_input())
        .unwrap()
        .document
}

#[test]
fn cube_grid_extent() {
    init_logger();
    let rendered = ModelSerializer::new("unused", "cube")
        .render(&cube_input())
        .unwrap();

    let grid = &rendered.grid;
    assert_eq!(grid.num_x(), 7);
    assert_eq!(grid.grids_i(), 8);
    assert_eq!(grid.grids_j(), 8);
    assert_eq!(grid.num_layers(), 15);
    assert!(rendered.diagnostics.skipped.is_empty());
    assert!(rendered.diagnostics.remarks.is_empty());
}

#[test]
fn cube_sections_are_ordered() {
    let doc = render();
    let mut last = 0;

    for title in SECTIONS {
        let pos = doc
            .find(&format!("<{title}>\n"))
            .unwrap_or_else(|| panic!("missing section {title}"));
        assert!(pos >= last, "section {title} is out of order");
        last = pos;
    }

    assert!(!doc.contains("<3Dplants>"));
    assert!(!doc.contains("<Buildinginfo>"));
    assert!(doc.ends_with("</GreeningDB>\n</ENVI-MET_Datafile>"));
}

#[test]
fn cube_header_and_geometry() {
    let doc = render();

    assert_eq!(tag_value(&doc, "filetype"), "INPX ENVI-met Area Input File");
    assert_eq!(tag_value(&doc, "revisiondate"), "2024-05-01 12:00:00");
    assert_eq!(tag_value(&doc, "grids-I"), "8");
    assert_eq!(tag_value(&doc, "grids-J"), "8");
    assert_eq!(tag_value(&doc, "grids-Z"), "11");
    assert_eq!(tag_value(&doc, "dx"), "3.00000");
    assert_eq!(tag_value(&doc, "dz-base"), "3.00000");
    assert_eq!(tag_value(&doc, "useTelescoping_grid"), "0");
    assert_eq!(tag_value(&doc, "useSplitting"), "1");
    assert_eq!(tag_value(&doc, "grids3D-K"), "15");
    assert_eq!(tag_value(&doc, "locationTimeZone_Name"), "GMT");
    assert_eq!(tag_value(&doc, "location_Latitude"), "0.000000");
    assert_eq!(tag_value(&doc, "modelRotation"), "0.00000");
}

#[test]
fn cube_footprint_matrices() {
    let doc = render();

    let footprint = "\n0,0,0,0,0,0,0,0\n0,0,0,0,0,0,0,0\n0,0,0,0,0,0,0,0\n\
                     0,0,1,1,1,0,0,0\n0,0,1,1,1,0,0,0\n0,0,1,1,1,0,0,0\n\
                     0,0,0,0,0,0,0,0\n0,0,0,0,0,0,0,0\n";
    assert_eq!(tag_value(&doc, "buildingNr"), footprint);
    assert_eq!(tag_value(&doc, "zTop"), footprint.replace('1', "8"));
    assert_eq!(tag_value(&doc, "zBottom"), footprint.replace('1', "0"));

    let soils = tag_value(&doc, "ID_soilprofile");
    assert_eq!(soils.lines().filter(|l| !l.is_empty()).count(), 8);
    assert!(soils
        .lines()
        .filter(|l| !l.is_empty())
        .all(|l| l == "000000,000000,000000,000000,000000,000000,000000,000000"));

    assert_eq!(
        tag_value(&doc, "ID_plants1D"),
        format!("\n{}", ",,,,,,,\n".repeat(8))
    );
}

#[test]
fn cube_voxels_and_faces() {
    let doc = render();

    let voxels = tag_value(&doc, "buildingFlagAndNr");
    let records: Vec<_> = voxels.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(records.len(), 63);
    assert_eq!(records[0], "2,2,0,1,1");
    assert_eq!(records[62], "4,4,6,1,1");

    let walls = tag_value(&doc, "ID_wallDB");
    let rows: Vec<_> = walls.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(rows.len(), 90);
    assert_eq!(rows[0], "2,2,0,0000W1,0000W1,0000R1");
    assert!(rows.contains(&"3,3,7,,,0000R1"));
    assert!(rows.contains(&"5,3,3,0000W1,,"));
    assert!(rows.contains(&"3,5,3,,0000W1,"));
    assert!(!rows.iter().any(|r| r.starts_with("3,3,3,")));

    assert_eq!(tag_value(&doc, "ID_GreeningDB"), " ");
}
