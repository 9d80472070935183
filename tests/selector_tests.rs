use lattice_graph::graph_error::GraphError;
use lattice_graph::topology::graph::Topology;
use lattice_graph::topology::selector::{Graph, TopologyDescriptor};

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

fn descriptor(json: &str) -> TopologyDescriptor {
    serde_json::from_str(json).expect("descriptor JSON")
}

// ----------------------------------------------------------------------------
// Mode dispatch
// ----------------------------------------------------------------------------

#[test]
fn named_hypercube_mode() {
    let desc = descriptor(r#"{ "name": "hypercube", "extent": [3, 3], "periodic": false }"#);
    let g = Graph::from_descriptor(&desc).unwrap();
    assert!(matches!(g, Graph::Hypercube(_)));
    assert_eq!(g.nsites(), 9);
    assert_eq!(g.adjacency_list()[4].len(), 4);
}

#[test]
fn named_custom_mode() {
    let desc = descriptor(r#"{ "name": "custom", "edges": [[0, 1], [1, 2], [2, 0]] }"#);
    let g = Graph::from_descriptor(&desc).unwrap();
    assert!(matches!(g, Graph::Custom(_)));
    assert_eq!(g.nsites(), 3);
    assert!(!g.is_bipartite());
}

#[test]
fn mode_tag_is_case_insensitive() {
    let desc = descriptor(r#"{ "name": "Hypercube", "extent": [4], "periodic": true }"#);
    assert!(Graph::from_descriptor(&desc).is_ok());
}

#[test]
fn unknown_mode_is_rejected() {
    let desc = descriptor(r#"{ "name": "kagome", "extent": [3, 3] }"#);
    match Graph::from_descriptor(&desc) {
        Err(GraphError::UnknownTopologyMode(name)) => assert_eq!(name, "kagome"),
        other => panic!("expected UnknownTopologyMode, got {other:?}"),
    }
}

#[test]
fn unnamed_descriptor_with_edges_defaults_to_custom() {
    let desc = descriptor(r#"{ "edges": [[0, 1], [1, 2]] }"#);
    let g = Graph::from_descriptor(&desc).unwrap();
    assert!(matches!(g, Graph::Custom(_)));
    assert!(g.is_connected());
}

#[test]
fn unnamed_descriptor_with_size_defaults_to_custom() {
    let desc = descriptor(r#"{ "size": 4 }"#);
    let g = Graph::from_descriptor(&desc).unwrap();
    assert_eq!(g.nsites(), 4);
    assert!(g.edge_colors().is_empty());
}

#[test]
fn empty_descriptor_is_rejected() {
    let desc = TopologyDescriptor::default();
    assert!(matches!(
        Graph::from_descriptor(&desc),
        Err(GraphError::UnknownTopologyMode(_))
    ));
}

#[test]
fn size_hint_synthesizes_isolated_sites() {
    let g = Graph::select(None, Some(6)).unwrap();
    assert_eq!(g.nsites(), 6);
    assert!(g.adjacency_list().iter().all(|n| n.is_empty()));
    assert!(!g.is_connected());
    assert!(g.is_bipartite());
}

#[test]
fn descriptor_takes_precedence_over_size_hint() {
    let desc = descriptor(r#"{ "name": "hypercube", "extent": [2, 2], "periodic": false }"#);
    let g = Graph::select(Some(&desc), Some(100)).unwrap();
    assert_eq!(g.nsites(), 4);
}

#[test]
fn nothing_to_select_fails() {
    assert!(matches!(
        Graph::select(None, None),
        Err(GraphError::UnknownTopologyMode(_))
    ));
}

// ----------------------------------------------------------------------------
// Descriptor field handling
// ----------------------------------------------------------------------------

#[test]
fn per_dimension_periodicity_flags() {
    let desc = descriptor(r#"{ "name": "hypercube", "extent": [4, 4], "periodic": [true, false] }"#);
    let g = Graph::from_descriptor(&desc).unwrap();
    // identity + one translation generator for the single wrapped dimension
    assert_eq!(g.symmetry_table().len(), 2);
}

#[test]
fn periodicity_defaults_to_fully_periodic() {
    let desc = descriptor(r#"{ "name": "hypercube", "extent": [4, 4] }"#);
    let g = Graph::from_descriptor(&desc).unwrap();
    assert_eq!(g.symmetry_table().len(), 3);
    assert_eq!(g.adjacency_list()[0].len(), 4);
}

#[test]
fn dimension_consistency_is_checked() {
    let desc = descriptor(r#"{ "name": "hypercube", "dimension": 3, "extent": [4, 4] }"#);
    assert!(matches!(
        Graph::from_descriptor(&desc),
        Err(GraphError::InvalidConfiguration(_))
    ));
}

#[test]
fn hypercube_without_extents_is_rejected() {
    let desc = descriptor(r#"{ "name": "hypercube" }"#);
    assert!(matches!(
        Graph::from_descriptor(&desc),
        Err(GraphError::InvalidConfiguration(_))
    ));
}

#[test]
fn direction_coloring_via_descriptor() {
    let desc = descriptor(
        r#"{ "name": "hypercube", "extent": [3, 3], "periodic": false, "color_by_direction": true }"#,
    );
    let g = Graph::from_descriptor(&desc).unwrap();
    assert_eq!(g.edge_colors().color(0, 3), Some(0));
    assert_eq!(g.edge_colors().color(0, 1), Some(1));
}

#[test]
fn custom_colors_and_symmetries_via_descriptor() {
    let desc = descriptor(
        r#"{
            "name": "custom",
            "edges": [[0, 1], [1, 2], [2, 0]],
            "edge_colors": [1, 1, 2],
            "symmetries": [[0, 2, 1]]
        }"#,
    );
    let g = Graph::from_descriptor(&desc).unwrap();
    assert_eq!(g.edge_colors().color(0, 1), Some(1));
    assert_eq!(g.edge_colors().color(0, 2), Some(2));
    assert_eq!(g.symmetry_table().len(), 2);
}

#[test]
fn builder_errors_pass_through_the_selector() {
    let desc = descriptor(r#"{ "name": "custom", "edges": [[0, 0]] }"#);
    assert!(matches!(
        Graph::from_descriptor(&desc),
        Err(GraphError::InvalidConfiguration(_))
    ));
}

// ----------------------------------------------------------------------------
// Forwarding
// ----------------------------------------------------------------------------

#[test]
fn selector_forwards_all_queries_unchanged() {
    use lattice_graph::topology::hypercube::Hypercube;

    let desc = descriptor(r#"{ "name": "hypercube", "extent": [3, 4], "periodic": true }"#);
    let g = Graph::from_descriptor(&desc).unwrap();
    let direct = Hypercube::new(vec![3, 4], vec![true, true]).unwrap();

    assert_eq!(g.nsites(), direct.nsites());
    assert_eq!(g.size(), direct.size());
    assert_eq!(g.adjacency_list(), direct.adjacency_list());
    assert_eq!(g.symmetry_table(), direct.symmetry_table());
    assert_eq!(g.all_distances(), direct.all_distances());
    assert_eq!(g.is_bipartite(), direct.is_bipartite());
    assert_eq!(g.is_connected(), direct.is_connected());
}
