//! # lattice-graph
//!
//! lattice-graph is a small Rust library for the graph-topology layer of
//! lattice simulation codes. It provides a unified representation of an
//! undirected, optionally edge-colored, optionally symmetric graph, built
//! either as a regular hypercubic lattice or from an explicit edge list,
//! and a set of traversal and analysis queries that behave identically
//! regardless of which construction mode produced the graph.
//!
//! ## Features
//! - Hypercubic lattice builder: per-dimension extents and periodicity,
//!   optional direction-based edge coloring, translation symmetries
//! - Custom builder: explicit edge lists with optional colors and symmetry
//!   generators, validated up front
//! - Generic traversal engine: depth-limited breadth-first search with
//!   visitor callbacks, single-source and all-pairs distances,
//!   bipartiteness and connectivity checks
//! - Descriptor-driven selection: one serde-deserializable descriptor picks
//!   and owns the concrete builder behind the [`topology::Topology`] trait
//!
//! ## Determinism
//!
//! Neighbor lists are sorted and deduplicated at construction, so traversal
//! order, distances and visitation sequences are reproducible for a given
//! descriptor.
//!
//! Topologies are immutable after construction and hold no interior
//! mutability, so they may be shared read-only across threads.
//!
//! ## Usage
//! ```
//! use lattice_graph::prelude::*;
//!
//! let lattice = Hypercube::new(vec![3, 3], vec![false, false])?;
//! assert_eq!(lattice.nsites(), 9);
//! assert!(lattice.is_bipartite());
//! assert!(lattice.is_connected());
//! let from_corner = lattice.distances(0);
//! assert_eq!(from_corner[8], Some(4));
//! # Ok::<(), lattice_graph::GraphError>(())
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod graph_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use graph_error::GraphError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::BfsBuilder;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph_error::GraphError;
    pub use crate::topology::color::{DEFAULT_COLOR, EdgeColors};
    pub use crate::topology::custom::CustomGraph;
    pub use crate::topology::graph::Topology;
    pub use crate::topology::hypercube::{Hypercube, LatticeColoring};
    pub use crate::topology::selector::{Graph, Periodicity, TopologyDescriptor};
    pub use crate::topology::site::{Edge, Site};
    pub use crate::topology::symmetry::Permutation;
}
