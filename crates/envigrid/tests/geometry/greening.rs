use envigrid::io::{Buildings, GenerationError, ModelInput, ModelSerializer};
use envigrid::materials::MaterialError;

use crate::{cube, init_logger, tag_value};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn two_buildings(green_ids: Vec<usize>) -> ModelInput {
    let mut buildings = Buildings::new(vec![
        cube([0.0; 3], [9.0; 3]),
        cube([12.0, 0.0, 0.0], [21.0, 9.0, 9.0]),
    ]);
    buildings.wall_materials = names(&["0000W1", "0000W2"]);
    buildings.roof_materials = names(&["0000R1", "0000R2"]);
    buildings.green_ids = green_ids;
    buildings.green_wall_materials = names(&["0100GW"]);
    buildings.green_roof_materials = names(&["0100GR"]);
    ModelInput::new(buildings)
}

#[test]
fn green_building_overlay() {
    init_logger();
    let rendered = ModelSerializer::new("unused", "green")
        .render(&two_buildings(vec![1]))
        .unwrap();
    let doc = &rendered.document;

    assert_eq!(rendered.grid.grids_i(), 12);
    assert_eq!(rendered.grid.grids_j(), 8);

    let ids = tag_value(doc, "buildingNr");
    assert_eq!(ids.lines().nth(4), Some("0,0,1,1,1,0,2,2,2,0,0,0"));

    let walls: Vec<_> = tag_value(doc, "ID_wallDB").lines().collect();
    assert!(walls.contains(&"2,2,0,0000W1,0000W1,0000R1"));
    assert!(walls.contains(&"6,2,0,0000W2,0000W2,0000R2"));

    let greens: Vec<_> = tag_value(doc, "ID_GreeningDB")
        .lines()
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(greens[0], "6,2,0,0100GW,0100GW,0100GR");
    assert!(greens.iter().all(|r| r.starts_with('6')
        || r.starts_with('7')
        || r.starts_with('8')
        || r.starts_with('9')));

    assert_eq!(doc.matches("<Buildinginfo>").count(), 1);
    assert_eq!(tag_value(doc, "BuildingInternalNr"), "2");
    assert_eq!(tag_value(doc, "BuildingName"), " ");
    assert_eq!(tag_value(doc, "BuildingWallMaterial"), "0000W2");
    assert_eq!(tag_value(doc, "BuildingRoofMaterial"), "0000R2");
    assert_eq!(tag_value(doc, "BuildingFacadeGreening"), "0100GW");
    assert_eq!(tag_value(doc, "BuildingRoofGreening"), "0100GR");
}

#[test]
fn green_index_out_of_range() {
    init_logger();
    let result = ModelSerializer::new("unused", "green").render(&two_buildings(vec![0, 5]));

    assert!(matches!(
        result,
        Err(GenerationError::Material(
            MaterialError::GreenIndexOutOfRange {
                index: 5,
                num_buildings: 2
            }
        ))
    ));
}
