//! Structural predicates over any [`Topology`]: bipartiteness and
//! connectivity.
//!
//! Convention, fixed once for both checks: the empty graph (`nsites == 0`)
//! is connected **and** bipartite (vacuous truth). Isolated sites are
//! bipartite and only break connectivity when other sites exist.

use std::collections::VecDeque;

use crate::topology::graph::Topology;
use crate::topology::site::Site;

/// True iff the sites can be two-colored with no edge joining two sites of
/// the same color. Restarts from a fresh root in every undiscovered
/// component, so disconnected graphs are fully checked.
pub fn is_bipartite<T: Topology + ?Sized>(topo: &T) -> bool {
    let adjacency = topo.adjacency_list();
    let n = topo.nsites();
    // parity[s]: None = undiscovered, Some(0|1) = BFS two-coloring
    let mut parity: Vec<Option<u8>> = vec![None; n];
    let mut queue: VecDeque<Site> = VecDeque::new();
    for root in 0..n {
        if parity[root].is_some() {
            continue;
        }
        parity[root] = Some(0);
        queue.push_back(root);
        while let Some(site) = queue.pop_front() {
            let here = parity[site].unwrap_or(0);
            for &next in &adjacency[site] {
                match parity[next] {
                    None => {
                        parity[next] = Some(1 - here);
                        queue.push_back(next);
                    }
                    Some(p) if p == here => return false,
                    Some(_) => {}
                }
            }
        }
    }
    true
}

/// True iff a single breadth-first sweep from site 0 reaches all sites.
pub fn is_connected<T: Topology + ?Sized>(topo: &T) -> bool {
    let n = topo.nsites();
    if n == 0 {
        return true;
    }
    let mut reached = 0usize;
    crate::algs::traversal::bfs(topo, 0, None, |_, _| reached += 1);
    reached == n
}
