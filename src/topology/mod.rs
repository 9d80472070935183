//! Top-level module for topology abstractions.
//!
//! This module provides the core types for representing lattice and custom
//! graph topologies:
//! - [`site`]: `Site` indices and normalized `Edge` pairs
//! - [`color`]: categorical edge-color labels
//! - [`symmetry`]: site permutations and automorphism validation
//! - [`graph`]: the `Topology` capability trait
//! - [`hypercube`] and [`custom`]: the two concrete builders
//! - [`selector`]: descriptor-driven dispatch to one owned builder
//!
//! Most users will go through [`selector::Graph`] and the
//! [`graph::Topology`] trait.

pub mod color;
pub mod custom;
pub mod graph;
pub mod hypercube;
pub mod selector;
pub mod site;
pub mod symmetry;

pub use color::{DEFAULT_COLOR, EdgeColors};
pub use custom::CustomGraph;
pub use graph::Topology;
pub use hypercube::{Hypercube, LatticeColoring};
pub use selector::{Graph, Periodicity, TopologyDescriptor};
pub use site::{Edge, Site};
pub use symmetry::Permutation;
