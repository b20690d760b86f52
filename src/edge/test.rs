use crate::edge::{EdgeMetadata, RoadClass, RoadName};
use crate::tree::{HorizonTree, RawEdge};

use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn road_class_round_trips_snake_case() {
    assert_eq!(RoadClass::ServiceOther.to_string(), "service_other");
    assert_eq!(RoadClass::from_str("motorway"), Ok(RoadClass::Motorway));
    assert!(RoadClass::from_str("footway").is_err());
}

#[test]
fn road_class_importance_follows_declaration() {
    let importance = RoadClass::iter()
        .map(|class| class.importance())
        .collect::<Vec<_>>();

    assert_eq!(importance, (0..8).collect::<Vec<u8>>());
    assert_eq!(RoadClass::default(), RoadClass::ServiceOther);
}

#[test]
fn primary_name_prefers_shield() {
    let metadata = EdgeMetadata {
        names: vec![RoadName::new("Ventura Fwy", false), RoadName::new("US 101", true)],
        ..EdgeMetadata::default()
    };

    assert_eq!(metadata.primary_name(), Some(&RoadName::new("US 101", true)));
    assert_eq!(metadata.primary_name().map(|n| n.to_string()), Some("[US 101]".into()));
    assert_eq!(EdgeMetadata::default().primary_name(), None);
}

#[test_log::test]
fn handle_walks_topology() {
    let tree = HorizonTree::from_records([
        RawEdge::new(10, None, 0),
        RawEdge::new(20, Some(10), 0).with_probability(0.6),
        RawEdge::new(30, Some(10), 1).with_probability(0.4),
        RawEdge::new(40, Some(20), 0),
    ])
    .expect("tree must build");

    let leaf = tree.get(40).expect("edge 40 exists");
    assert_eq!(leaf.depth(), 2);
    assert_eq!(
        leaf.ancestors().map(|edge| edge.id).collect::<Vec<_>>(),
        vec![20, 10]
    );

    let root = tree.root();
    assert!(root.is_root());
    assert_eq!(root.child_count(), 2);
    assert_eq!(
        root.mpp_children().map(|edge| edge.id).collect::<Vec<_>>(),
        vec![20]
    );

    let debug = format!("{:?}", root);
    assert!(debug.contains("children: [20, 30]"), "{debug}");
}

#[test]
fn equality_compares_parent_by_id_only() {
    // Same subtree under differently-attributed parents.
    let left = HorizonTree::from_records([
        RawEdge::new(1, None, 0).with_length(10.0),
        RawEdge::new(2, Some(1), 0).with_length(20.0),
        RawEdge::new(3, Some(2), 0).with_length(30.0),
    ])
    .expect("tree must build");

    let right = HorizonTree::from_records([
        RawEdge::new(1, None, 0).with_length(99.0),
        RawEdge::new(2, Some(1), 0).with_length(20.0),
        RawEdge::new(3, Some(2), 0).with_length(30.0),
    ])
    .expect("tree must build");

    assert_eq!(left.get(2), right.get(2));
    assert_ne!(left.root(), right.root());
    assert_ne!(left, right);
}

#[test]
fn equality_descends_into_children() {
    let left = HorizonTree::from_records([
        RawEdge::new(1, None, 0),
        RawEdge::new(2, Some(1), 0),
        RawEdge::new(3, Some(2), 0).with_length(30.0),
    ])
    .expect("tree must build");

    let right = HorizonTree::from_records([
        RawEdge::new(1, None, 0),
        RawEdge::new(2, Some(1), 0),
        RawEdge::new(3, Some(2), 0).with_length(31.0),
    ])
    .expect("tree must build");

    assert_ne!(left.root(), right.root());
    assert_eq!(left, left.clone());
}
