use crate::edge::EdgeId;
use crate::position::GraphPosition;
use crate::tree::{HorizonTree, RawEdge};

use approx::assert_relative_eq;
use geo::{coord, LineString};

/// Three edges heading north along the prime meridian, with a
/// ramp branching east off the first.
fn meridian() -> HorizonTree {
    HorizonTree::from_records([
        RawEdge::new(1, None, 0)
            .with_length(100.0)
            .with_geometry("LINESTRING (0 0, 0 1)"),
        RawEdge::new(2, Some(1), 0)
            .with_probability(0.8)
            .with_length(250.0)
            .with_geometry("LINESTRING (0 1, 0 2)"),
        RawEdge::new(3, Some(1), 1)
            .with_probability(0.2)
            .with_length(120.0)
            .with_geometry("LINESTRING (0 1, 1 1)"),
        RawEdge::new(4, Some(2), 0)
            .with_length(300.0)
            .with_geometry("LINESTRING (0 2, 0 2.5, 0 3)"),
    ])
    .expect("meridian must build")
}

fn ids(edges: &[crate::Edge<'_>]) -> Vec<EdgeId> {
    edges.iter().map(|edge| edge.id).collect()
}

#[test]
fn paths_ahead_deduct_travelled_distance() {
    let tree = meridian();
    let position = GraphPosition::new(1, 0.25).expect("valid position");

    let paths = tree.paths_ahead(&position).expect("edge 1 is on the mpp");
    assert_eq!(paths.len(), 1);

    let path = &paths[0];
    assert_eq!(path.edges, vec![1, 2, 4]);
    assert_relative_eq!(path.percent_along_begin, 0.25);
    assert_relative_eq!(path.percent_along_end, 1.0);
    assert_relative_eq!(path.length, 75.0 + 250.0 + 300.0);
}

#[test]
fn shape_joins_edge_geometries() {
    let tree = meridian();
    let paths = tree
        .paths_ahead(&GraphPosition::at_start(2))
        .expect("edge 2 is on the mpp");

    let shape = paths[0].shape(&tree).expect("every edge has geometry");
    let expected = LineString::new(vec![
        coord! { x: 0.0, y: 1.0 },
        coord! { x: 0.0, y: 2.0 },
        coord! { x: 0.0, y: 2.5 },
        coord! { x: 0.0, y: 3.0 },
    ]);

    assert_eq!(shape, expected);
}

#[test]
fn shape_requires_every_geometry() {
    let tree = HorizonTree::from_records([
        RawEdge::new(1, None, 0).with_geometry("LINESTRING (0 0, 0 1)"),
        RawEdge::new(2, Some(1), 0),
    ])
    .expect("tree must build");

    let paths = tree
        .paths_ahead(&GraphPosition::at_start(1))
        .expect("edge 1 is on the mpp");

    assert!(paths[0].shape(&tree).is_none());
    assert!(tree.edge_shape(2).is_none());
}

#[test]
fn locate_interpolates_along_shape() {
    let tree = meridian();

    let midpoint = tree
        .locate(&GraphPosition::new(1, 0.5).expect("valid position"))
        .expect("edge 1 has geometry");
    assert_relative_eq!(midpoint.x(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(midpoint.y(), 0.5, epsilon = 1e-6);

    // Segments of equal length, so 75% falls within the second.
    let three_quarters = tree
        .locate(&GraphPosition::new(4, 0.75).expect("valid position"))
        .expect("edge 4 has geometry");
    assert_relative_eq!(three_quarters.y(), 2.75, epsilon = 1e-6);

    assert!(tree.locate(&GraphPosition::at_start(99)).is_none());
}

#[test_log::test]
fn upcoming_is_bounded_by_distance() {
    let tree = meridian();
    let position = GraphPosition::new(1, 0.25).expect("valid position");

    let near = tree.upcoming(&position, 50.0).expect("edge 1 is on the mpp");
    assert_eq!(ids(&near), vec![1]);

    let mid = tree.upcoming(&position, 100.0).expect("edge 1 is on the mpp");
    assert_eq!(ids(&mid), vec![1, 2]);

    let far = tree.upcoming(&position, 10_000.0).expect("edge 1 is on the mpp");
    assert_eq!(ids(&far), vec![1, 2, 4]);

    let none = tree.upcoming(&position, 0.0).expect("edge 1 is on the mpp");
    assert_eq!(ids(&none), vec![1]);
}

#[test]
fn upcoming_fails_off_lineage() {
    let tree = meridian();
    assert!(tree.upcoming(&GraphPosition::at_start(3), 100.0).is_err());
}
