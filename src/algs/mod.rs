//! Traversal and analysis algorithms, generic over the
//! [`Topology`](crate::topology::graph::Topology) trait.
//!
//! Everything in here reads only the adjacency list, so the results are
//! identical regardless of which builder produced the graph. All operations
//! are total on a constructed topology; boundary cases (empty graph,
//! disconnected components, isolated sites) resolve by documented
//! convention, never by error.

pub mod distances;
pub mod properties;
pub mod traversal;

pub use distances::{all_distances, distances};
pub use properties::{is_bipartite, is_connected};
pub use traversal::{BfsBuilder, bfs, bfs_all};
