use envigrid::na::{Point2, Point3};
use envigrid::query::{IntersectResult, Region};
use envigrid::shape::TriMesh;

use crate::cube;

fn build_diamond() -> TriMesh {
    // Two tetrahedrons sharing a face
    let points = vec![
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(-2.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, 2.0),
        Point3::new(2.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, -2.0),
    ];

    let indices = vec![
        [0u32, 1, 2],
        [0, 2, 3],
        [1, 3, 2],
        [0, 4, 1],
        [0, 3, 4],
        [1, 4, 3],
    ];

    TriMesh::new(points, indices).unwrap()
}

fn has_vertex(vertices: &[Point2<f64>], expected: Point2<f64>) -> bool {
    vertices
        .iter()
        .any(|v| (v - expected).norm() < 1.0e-9)
}

#[test]
fn trimesh_plane_edge_intersection() {
    let mesh = build_diamond();
    assert!(mesh.is_closed());

    let result = mesh.intersection_with_horizontal_plane(0.5, 1.0e-6).unwrap();

    let IntersectResult::Intersect(loops) = result else {
        panic!("the plane crosses the diamond");
    };
    assert_eq!(loops.len(), 1);

    // Need to check points individually since order is not guaranteed
    let vertices = loops[0].vertices();
    assert_eq!(vertices.len(), 3);
    assert!(has_vertex(vertices, Point2::new(-1.5, -0.75)));
    assert!(has_vertex(vertices, Point2::new(1.5, -0.75)));
    assert!(has_vertex(vertices, Point2::new(0.0, 1.5)));
}

#[test]
fn trimesh_plane_outside() {
    let mesh = build_diamond();

    assert_eq!(
        mesh.intersection_with_horizontal_plane(5.0, 1.0e-6),
        Ok(IntersectResult::Negative)
    );
    assert_eq!(
        mesh.intersection_with_horizontal_plane(-5.0, 1.0e-6),
        Ok(IntersectResult::Positive)
    );
}

#[test]
fn disjoint_buildings_section() {
    let first = cube([0.0; 3], [4.0; 3]);
    let second = cube([10.0, 0.0, 0.0], [14.0, 4.0, 8.0]);
    let vertices: Vec<_> = first
        .vertices()
        .iter()
        .chain(second.vertices())
        .copied()
        .collect();
    let indices: Vec<_> = first
        .indices()
        .iter()
        .copied()
        .chain(second.indices().iter().map(|t| t.map(|i| i + 8)))
        .collect();
    let mesh = TriMesh::new(vertices, indices).unwrap();

    let IntersectResult::Intersect(loops) = mesh.intersection_with_horizontal_plane(2.0, 1.0e-6).unwrap()
    else {
        panic!("the plane crosses both buildings");
    };
    assert_eq!(loops.len(), 2);

    let region = Region::from_loops(loops);
    assert!(region.contains_point(&Point2::new(2.0, 2.0)));
    assert!(region.contains_point(&Point2::new(12.0, 2.0)));
    assert!(!region.contains_point(&Point2::new(7.0, 2.0)));

    let IntersectResult::Intersect(loops) = mesh.intersection_with_horizontal_plane(6.0, 1.0e-6).unwrap()
    else {
        panic!("the plane crosses the tallest building");
    };
    assert_eq!(loops.len(), 1);
}
