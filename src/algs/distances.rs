//! Shortest-path hop counts over any [`Topology`].
//!
//! Distances are plain BFS depths: colors never weight an edge. Unreachable
//! sites are reported as `None`, never as a numeric placeholder.

use crate::algs::traversal;
use crate::topology::graph::Topology;
use crate::topology::site::Site;

/// Hop count from `root` to every site; `None` for sites in a different
/// connected component. `distances(topo, r)[r] == Some(0)`.
pub fn distances<T: Topology + ?Sized>(topo: &T, root: Site) -> Vec<Option<u32>> {
    let mut dist = vec![None; topo.nsites()];
    traversal::bfs(topo, root, None, |site, depth| {
        dist[site] = Some(depth);
    });
    dist
}

/// One [`distances`] row per root site.
///
/// Complexity is `O(nsites · (nsites + edges))`; fine for the lattice sizes
/// simulation configs describe, quadratic memory for anything else.
pub fn all_distances<T: Topology + ?Sized>(topo: &T) -> Vec<Vec<Option<u32>>> {
    (0..topo.nsites()).map(|root| distances(topo, root)).collect()
}
