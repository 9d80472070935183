//! Topology selection: from a construction descriptor to one concrete graph.
//!
//! [`TopologyDescriptor`] is a serde-deserializable bag of optional fields
//! covering both construction modes; its concrete encoding (JSON, TOML, ...)
//! belongs to the configuration front-end, not to this crate.
//! [`Graph`] is the owning dispatcher: a two-variant sum type that picks a
//! builder from the descriptor once and then forwards every topology query
//! unchanged. It adds no state and makes no algorithmic decisions of its
//! own.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::topology::color::EdgeColors;
use crate::topology::custom::CustomGraph;
use crate::topology::graph::Topology;
use crate::topology::hypercube::{Hypercube, LatticeColoring};
use crate::topology::site::Site;
use crate::topology::symmetry::Permutation;

/// Per-dimension periodicity, or one flag for all dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Periodicity {
    /// The same flag applies to every dimension.
    All(bool),
    /// One flag per dimension, matching the extent array.
    PerDimension(Vec<bool>),
}

impl Periodicity {
    /// Expands to one flag per dimension.
    fn expand(&self, dimension: usize) -> Vec<bool> {
        match self {
            Periodicity::All(flag) => vec![*flag; dimension],
            Periodicity::PerDimension(flags) => flags.clone(),
        }
    }
}

/// Construction descriptor: a mode tag plus mode-specific parameters.
///
/// Lattice mode reads `extent`, `periodic`, `color_by_direction` and the
/// optional `dimension` consistency check; custom mode reads `edges`,
/// `size`, `edge_colors` and `symmetries`. Fields of the unselected mode
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyDescriptor {
    /// Mode tag; `"hypercube"` or `"custom"` (case-insensitive).
    pub name: Option<String>,
    /// Expected dimension count; must match `extent.len()` when both given.
    pub dimension: Option<usize>,
    /// Per-dimension lattice extents.
    pub extent: Option<Vec<usize>>,
    /// Lattice periodicity; defaults to fully periodic when omitted.
    pub periodic: Option<Periodicity>,
    /// Color lattice edges by direction index instead of uniform 0.
    pub color_by_direction: Option<bool>,
    /// Declared site count for custom mode.
    pub size: Option<usize>,
    /// Explicit edge list for custom mode.
    pub edges: Option<Vec<(Site, Site)>>,
    /// Per-edge colors, parallel to `edges`.
    pub edge_colors: Option<Vec<u32>>,
    /// Symmetry generators as image vectors.
    pub symmetries: Option<Vec<Vec<Site>>>,
}

impl TopologyDescriptor {
    /// True when the descriptor carries custom-mode parameters, even
    /// without a mode tag.
    fn looks_like_custom(&self) -> bool {
        self.edges.is_some() || self.size.is_some()
    }
}

/// The one concrete topology selected from a descriptor.
///
/// Every [`Topology`] call forwards to the owned builder unchanged, so
/// callers never need to know which construction mode produced the graph.
#[derive(Debug, Clone)]
pub enum Graph {
    Hypercube(Hypercube),
    Custom(CustomGraph),
}

impl Graph {
    /// Builds the topology a descriptor names.
    ///
    /// Dispatch: a known `name` selects that builder; an unknown `name`
    /// fails; with no `name`, graph-shaped parameters (`edges` or `size`)
    /// select the custom builder; a descriptor naming no usable mode fails.
    ///
    /// # Errors
    /// [`GraphError::UnknownTopologyMode`] for an unknown or missing mode;
    /// [`GraphError::InvalidConfiguration`] from the selected builder.
    pub fn from_descriptor(descriptor: &TopologyDescriptor) -> Result<Self, GraphError> {
        match descriptor.name.as_deref() {
            Some(name) if name.eq_ignore_ascii_case("hypercube") => {
                Ok(Graph::Hypercube(build_hypercube(descriptor)?))
            }
            Some(name) if name.eq_ignore_ascii_case("custom") => {
                Ok(Graph::Custom(build_custom(descriptor)?))
            }
            Some(name) => Err(GraphError::UnknownTopologyMode(name.to_string())),
            None if descriptor.looks_like_custom() => {
                Ok(Graph::Custom(build_custom(descriptor)?))
            }
            None => Err(GraphError::UnknownTopologyMode("(unspecified)".into())),
        }
    }

    /// Trivial edgeless topology of `nsites` isolated sites, used when no
    /// descriptor exists but an external size hint does.
    pub fn from_size_hint(nsites: usize) -> Result<Self, GraphError> {
        Ok(Graph::Custom(CustomGraph::edgeless(nsites)?))
    }

    /// Full selection rule: descriptor if present, otherwise a size hint,
    /// otherwise failure.
    pub fn select(
        descriptor: Option<&TopologyDescriptor>,
        size_hint: Option<usize>,
    ) -> Result<Self, GraphError> {
        match (descriptor, size_hint) {
            (Some(desc), _) => Self::from_descriptor(desc),
            (None, Some(n)) => Self::from_size_hint(n),
            (None, None) => Err(GraphError::UnknownTopologyMode("(unspecified)".into())),
        }
    }
}

fn build_hypercube(descriptor: &TopologyDescriptor) -> Result<Hypercube, GraphError> {
    let extent = descriptor
        .extent
        .clone()
        .ok_or_else(|| GraphError::invalid("hypercube mode requires per-dimension extents"))?;
    if let Some(dimension) = descriptor.dimension
        && dimension != extent.len()
    {
        return Err(GraphError::invalid(format!(
            "declared dimension {dimension} does not match {} extents",
            extent.len()
        )));
    }
    let periodic = descriptor
        .periodic
        .as_ref()
        .unwrap_or(&Periodicity::All(true))
        .expand(extent.len());
    let coloring = if descriptor.color_by_direction.unwrap_or(false) {
        LatticeColoring::ByDirection
    } else {
        LatticeColoring::Uniform
    };
    Hypercube::with_coloring(extent, periodic, coloring)
}

fn build_custom(descriptor: &TopologyDescriptor) -> Result<CustomGraph, GraphError> {
    let edges = descriptor.edges.as_deref().unwrap_or(&[]);
    CustomGraph::with_options(
        edges,
        descriptor.size,
        descriptor.edge_colors.as_deref(),
        descriptor.symmetries.clone().unwrap_or_default(),
    )
}

impl From<Hypercube> for Graph {
    fn from(h: Hypercube) -> Self {
        Graph::Hypercube(h)
    }
}

impl From<CustomGraph> for Graph {
    fn from(g: CustomGraph) -> Self {
        Graph::Custom(g)
    }
}

impl Topology for Graph {
    fn nsites(&self) -> usize {
        match self {
            Graph::Hypercube(g) => g.nsites(),
            Graph::Custom(g) => g.nsites(),
        }
    }

    fn size(&self) -> usize {
        match self {
            Graph::Hypercube(g) => g.size(),
            Graph::Custom(g) => g.size(),
        }
    }

    fn adjacency_list(&self) -> &[Vec<Site>] {
        match self {
            Graph::Hypercube(g) => g.adjacency_list(),
            Graph::Custom(g) => g.adjacency_list(),
        }
    }

    fn symmetry_table(&self) -> &[Permutation] {
        match self {
            Graph::Hypercube(g) => g.symmetry_table(),
            Graph::Custom(g) => g.symmetry_table(),
        }
    }

    fn edge_colors(&self) -> &EdgeColors {
        match self {
            Graph::Hypercube(g) => g.edge_colors(),
            Graph::Custom(g) => g.edge_colors(),
        }
    }
}

impl DebugInvariants for Graph {
    fn debug_assert_invariants(&self) {
        match self {
            Graph::Hypercube(g) => g.debug_assert_invariants(),
            Graph::Custom(g) => g.debug_assert_invariants(),
        }
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        match self {
            Graph::Hypercube(g) => g.validate_invariants(),
            Graph::Custom(g) => g.validate_invariants(),
        }
    }
}
