//! The `Topology` trait: capability contract for concrete graph
//! representations.
//!
//! Both builders ([`Hypercube`](crate::topology::hypercube::Hypercube) and
//! [`CustomGraph`](crate::topology::custom::CustomGraph)) and the owning
//! [`Graph`](crate::topology::selector::Graph) dispatcher implement this
//! trait, so traversal and analysis code never needs to know which
//! construction mode produced the graph. The traversal methods are provided
//! here once, delegating to [`crate::algs`], which reads only
//! [`Topology::adjacency_list`].

use crate::algs;
use crate::graph_error::GraphError;
use crate::topology::color::EdgeColors;
use crate::topology::site::{Edge, Site};
use crate::topology::symmetry::Permutation;

/// Query surface of an immutable, undirected, simple graph.
///
/// Invariants every implementation upholds after construction:
/// - the adjacency list is symmetric (`v ∈ adj(u) ⇔ u ∈ adj(v)`),
/// - each neighbor list is sorted ascending with no duplicates,
/// - there are no self-loops,
/// - every edge has exactly one color,
/// - the symmetry table holds the identity at index 0 and only
///   automorphisms thereafter.
pub trait Topology {
    /// Number of sites, fixed at construction.
    fn nsites(&self) -> usize;

    /// Secondary size metric. Equals [`Topology::nsites`] for the shipped
    /// builders; composite topologies (per-unit-cell basis multiplicity) may
    /// let it diverge.
    fn size(&self) -> usize {
        self.nsites()
    }

    /// Per-site neighbor lists, sorted ascending.
    fn adjacency_list(&self) -> &[Vec<Site>];

    /// Symmetry generators; identity first, automorphisms only.
    fn symmetry_table(&self) -> &[Permutation];

    /// Edge-color labels; every edge has exactly one.
    fn edge_colors(&self) -> &EdgeColors;

    /// Breadth-first search from `root`, invoking `visitor(site, depth)` on
    /// every visited site in increasing-depth order. Sites deeper than
    /// `max_depth` (when given) are not visited; `None` explores the whole
    /// connected component of `root`.
    fn breadth_first_search<F>(&self, root: Site, max_depth: Option<u32>, visitor: F)
    where
        Self: Sized,
        F: FnMut(Site, u32),
    {
        algs::traversal::bfs(self, root, max_depth, visitor);
    }

    /// Breadth-first search over the whole graph: every site becomes a
    /// fallback root, so disconnected components are all covered. Depth
    /// resets to 0 at each component root.
    fn breadth_first_search_all<F>(&self, visitor: F)
    where
        Self: Sized,
        F: FnMut(Site, u32),
    {
        algs::traversal::bfs_all(self, visitor);
    }

    /// Shortest-path hop counts from `root` to every site; `None` marks
    /// sites in a different connected component.
    fn distances(&self, root: Site) -> Vec<Option<u32>>
    where
        Self: Sized,
    {
        algs::distances::distances(self, root)
    }

    /// One distance row per root site; `O(nsites · (nsites + edges))`.
    fn all_distances(&self) -> Vec<Vec<Option<u32>>>
    where
        Self: Sized,
    {
        algs::distances::all_distances(self)
    }

    /// True iff the sites admit a two-coloring with no monochromatic edge.
    /// The empty graph is bipartite by convention.
    fn is_bipartite(&self) -> bool
    where
        Self: Sized,
    {
        algs::properties::is_bipartite(self)
    }

    /// True iff one breadth-first sweep reaches all sites. The empty graph
    /// is connected by convention.
    fn is_connected(&self) -> bool
    where
        Self: Sized,
    {
        algs::properties::is_connected(self)
    }
}

/// Builds sorted, deduplicated neighbor lists from a validated edge set.
///
/// All output vectors are sorted for deterministic traversal order. Callers
/// guarantee every endpoint lies in `[0, nsites)`.
pub(crate) fn adjacency_from_edges(nsites: usize, edges: &[Edge]) -> Vec<Vec<Site>> {
    let mut adjacency = vec![Vec::new(); nsites];
    for edge in edges {
        let (u, v) = edge.endpoints();
        adjacency[u].push(v);
        adjacency[v].push(u);
    }
    for neighbors in &mut adjacency {
        neighbors.sort_unstable();
        neighbors.dedup();
    }
    adjacency
}

/// Validates the full set of post-construction invariants listed on
/// [`Topology`]. Used by the `DebugInvariants` implementations; constructors
/// already enforce these, so failures indicate a builder bug.
pub(crate) fn validate_topology<T: Topology + ?Sized>(topo: &T) -> Result<(), GraphError> {
    let adjacency = topo.adjacency_list();
    let n = topo.nsites();
    if adjacency.len() != n {
        return Err(GraphError::invalid(format!(
            "adjacency list has {} rows, topology reports {n} sites",
            adjacency.len()
        )));
    }
    for (u, neighbors) in adjacency.iter().enumerate() {
        if !neighbors.is_sorted() {
            return Err(GraphError::invalid(format!(
                "neighbor list of site {u} is not sorted"
            )));
        }
        for &v in neighbors {
            if v >= n {
                return Err(GraphError::invalid(format!(
                    "site {u} lists neighbor {v} outside [0, {n})"
                )));
            }
            if v == u {
                return Err(GraphError::invalid(format!("site {u} has a self-loop")));
            }
            if adjacency[v].binary_search(&u).is_err() {
                return Err(GraphError::invalid(format!(
                    "adjacency is asymmetric: {u} lists {v} but not vice versa"
                )));
            }
            let edge = Edge::new(u, v)?;
            if topo.edge_colors().color_of(edge).is_none() {
                return Err(GraphError::invalid(format!("edge {edge} has no color")));
            }
        }
    }
    let table = topo.symmetry_table();
    match table.first() {
        Some(first) if first.is_identity() && first.len() == n => {}
        _ => {
            return Err(GraphError::invalid(
                "symmetry table must start with the identity permutation",
            ));
        }
    }
    for (k, perm) in table.iter().enumerate() {
        if !perm.is_automorphism(adjacency) {
            return Err(GraphError::invalid(format!(
                "symmetry table entry {k} is not an automorphism"
            )));
        }
    }
    Ok(())
}
