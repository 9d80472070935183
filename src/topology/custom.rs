//! `CustomGraph`: arbitrary topology from an explicit edge list.
//!
//! Where [`Hypercube`](crate::topology::hypercube::Hypercube) derives its
//! bonds from a regular pattern, a custom graph takes them verbatim from the
//! caller: an edge list, an optional declared site count (inferred as
//! `max index + 1` otherwise), optional per-edge colors parallel to the edge
//! list, and optional symmetry generators. Everything is validated up front;
//! no partially constructed graph escapes.

use std::collections::BTreeMap;

use crate::debug_invariants;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::topology::color::{DEFAULT_COLOR, EdgeColors};
use crate::topology::graph::{Topology, adjacency_from_edges, validate_topology};
use crate::topology::site::{Edge, Site};
use crate::topology::symmetry::{Permutation, build_symmetry_table};

/// A topology built from an explicit, caller-supplied edge list.
#[derive(Debug, Clone)]
pub struct CustomGraph {
    nsites: usize,
    adjacency: Vec<Vec<Site>>,
    symmetry: Vec<Permutation>,
    colors: EdgeColors,
}

impl CustomGraph {
    /// Builds a graph from an edge list, all edges colored 0 and the
    /// symmetry table holding only the identity.
    ///
    /// # Errors
    /// See [`CustomGraph::with_options`].
    pub fn new(edges: &[(Site, Site)], size: Option<usize>) -> Result<Self, GraphError> {
        Self::with_options(edges, size, None, Vec::new())
    }

    /// Builds a graph from an edge list with optional per-edge colors
    /// (parallel to `edges`) and optional symmetry generators.
    ///
    /// Duplicate edges are deduplicated with a warning when their colors
    /// agree; conflicting colors on the same edge are an error.
    ///
    /// # Errors
    /// [`GraphError::InvalidConfiguration`] when an edge is a self-loop or
    /// references a site outside `[0, nsites)`, the declared size is below
    /// `max index + 1`, the color array length differs from the edge list
    /// length, or a symmetry generator is not a bijection on the sites or
    /// not an automorphism of the edge set.
    pub fn with_options(
        edges: &[(Site, Site)],
        size: Option<usize>,
        edge_colors: Option<&[u32]>,
        symmetries: Vec<Vec<Site>>,
    ) -> Result<Self, GraphError> {
        if let Some(colors) = edge_colors
            && colors.len() != edges.len()
        {
            return Err(GraphError::invalid(format!(
                "edge color array has {} entries for {} edges",
                colors.len(),
                edges.len()
            )));
        }

        let mut colored_edges: BTreeMap<Edge, u32> = BTreeMap::new();
        let mut inferred = 0usize;
        for (i, &(u, v)) in edges.iter().enumerate() {
            let edge = Edge::new(u, v)?;
            inferred = inferred.max(edge.max() + 1);
            let color = edge_colors.map_or(DEFAULT_COLOR, |c| c[i]);
            if let Some(prior) = colored_edges.insert(edge, color) {
                if prior != color {
                    return Err(GraphError::invalid(format!(
                        "duplicate edge {edge} declared with conflicting colors {prior} and {color}"
                    )));
                }
                log::warn!("duplicate edge {edge} in input, deduplicated");
            }
        }

        let nsites = match size {
            Some(declared) => {
                if declared < inferred {
                    return Err(GraphError::invalid(format!(
                        "declared size {declared} is below the highest edge endpoint \
                         (needs at least {inferred} sites)"
                    )));
                }
                declared
            }
            None => inferred,
        };

        let edge_set: Vec<Edge> = colored_edges.keys().copied().collect();
        let adjacency = adjacency_from_edges(nsites, &edge_set);
        let colors: EdgeColors = colored_edges.into_iter().collect();

        let mut generators = Vec::with_capacity(symmetries.len());
        for images in symmetries {
            generators.push(Permutation::try_new(images)?);
        }
        let symmetry = build_symmetry_table(nsites, generators, &adjacency)?;

        let graph = Self {
            nsites,
            adjacency,
            symmetry,
            colors,
        };
        log::debug!(
            "built custom graph: nsites={}, edges={}, generators={}",
            graph.nsites,
            graph.colors.len(),
            graph.symmetry.len() - 1
        );
        debug_invariants!(graph.validate_invariants(), "CustomGraph::with_options");
        Ok(graph)
    }

    /// A graph of `nsites` isolated sites and no edges. `nsites == 0` is
    /// valid and yields the empty graph.
    pub fn edgeless(nsites: usize) -> Result<Self, GraphError> {
        Self::new(&[], Some(nsites))
    }
}

impl Topology for CustomGraph {
    fn nsites(&self) -> usize {
        self.nsites
    }

    fn adjacency_list(&self) -> &[Vec<Site>] {
        &self.adjacency
    }

    fn symmetry_table(&self) -> &[Permutation] {
        &self.symmetry
    }

    fn edge_colors(&self) -> &EdgeColors {
        &self.colors
    }
}

impl DebugInvariants for CustomGraph {
    fn debug_assert_invariants(&self) {
        debug_invariants!(self.validate_invariants(), "CustomGraph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        validate_topology(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_inferred_from_edges() {
        let g = CustomGraph::new(&[(0, 1), (1, 4)], None).unwrap();
        assert_eq!(g.nsites(), 5);
        assert!(g.adjacency_list()[2].is_empty());
    }

    #[test]
    fn declared_size_below_endpoints_is_rejected() {
        assert!(CustomGraph::new(&[(0, 3)], Some(3)).is_err());
    }

    #[test]
    fn duplicate_edge_with_same_color_is_deduplicated() {
        let g = CustomGraph::new(&[(0, 1), (1, 0)], None).unwrap();
        assert_eq!(g.edge_colors().len(), 1);
        assert_eq!(g.adjacency_list()[0], vec![1]);
    }

    #[test]
    fn duplicate_edge_with_conflicting_colors_is_rejected() {
        let err = CustomGraph::with_options(&[(0, 1), (1, 0)], None, Some(&[0, 1]), Vec::new());
        assert!(matches!(err, Err(GraphError::InvalidConfiguration(_))));
    }
}
