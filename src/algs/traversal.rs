//! Breadth-first traversal over any [`Topology`].
//!
//! The core loop reads only the adjacency list, so both construction modes
//! share identical traversal semantics. The visitor fires when a site is
//! dequeued, which yields strictly non-decreasing depths; within one depth
//! level, sites arrive in neighbor-list order (deterministic for a given
//! construction, not globally canonical across constructions).

use std::collections::VecDeque;

use crate::topology::graph::Topology;
use crate::topology::site::Site;

/// Builder-style front end for a breadth-first search.
///
/// With a root, explores that root's component; without one, every site
/// becomes a fallback root so the whole graph (including disconnected
/// components) is covered.
pub struct BfsBuilder<'a, T: Topology + ?Sized> {
    topo: &'a T,
    root: Option<Site>,
    max_depth: Option<u32>,
}

impl<'a, T: Topology + ?Sized> BfsBuilder<'a, T> {
    pub fn new(topo: &'a T) -> Self {
        Self {
            topo,
            root: None,
            max_depth: None,
        }
    }

    /// Restrict the traversal to the component of `root`.
    pub fn root(mut self, root: Site) -> Self {
        self.root = Some(root);
        self
    }

    /// Do not visit sites deeper than `d` from their root.
    pub fn max_depth(mut self, d: Option<u32>) -> Self {
        self.max_depth = d;
        self
    }

    /// Run the search, invoking `visitor(site, depth)` on every visited site.
    pub fn run<F: FnMut(Site, u32)>(self, mut visitor: F) {
        match self.root {
            Some(root) => {
                let mut seen = vec![false; self.topo.nsites()];
                bfs_component(self.topo, root, self.max_depth, &mut seen, &mut visitor);
            }
            None => {
                let mut seen = vec![false; self.topo.nsites()];
                for root in 0..self.topo.nsites() {
                    if !seen[root] {
                        bfs_component(self.topo, root, self.max_depth, &mut seen, &mut visitor);
                    }
                }
            }
        }
    }
}

/// Breadth-first search from `root`; see
/// [`Topology::breadth_first_search`] for the contract.
pub fn bfs<T, F>(topo: &T, root: Site, max_depth: Option<u32>, mut visitor: F)
where
    T: Topology + ?Sized,
    F: FnMut(Site, u32),
{
    let mut seen = vec![false; topo.nsites()];
    bfs_component(topo, root, max_depth, &mut seen, &mut visitor);
}

/// Whole-graph breadth-first search; every site is a fallback root and the
/// depth counter resets at each component root.
pub fn bfs_all<T, F>(topo: &T, mut visitor: F)
where
    T: Topology + ?Sized,
    F: FnMut(Site, u32),
{
    let mut seen = vec![false; topo.nsites()];
    for root in 0..topo.nsites() {
        if !seen[root] {
            bfs_component(topo, root, None, &mut seen, &mut visitor);
        }
    }
}

/// Core queue loop shared by every traversal entry point. Marks sites in
/// `seen` so multi-root sweeps visit each site exactly once.
pub(crate) fn bfs_component<T, F>(
    topo: &T,
    root: Site,
    max_depth: Option<u32>,
    seen: &mut [bool],
    visitor: &mut F,
) where
    T: Topology + ?Sized,
    F: FnMut(Site, u32),
{
    debug_assert!(root < topo.nsites(), "BFS root out of range");
    let adjacency = topo.adjacency_list();
    let mut queue: VecDeque<(Site, u32)> = VecDeque::new();
    seen[root] = true;
    queue.push_back((root, 0));
    while let Some((site, depth)) = queue.pop_front() {
        visitor(site, depth);
        if max_depth.is_some_and(|md| depth >= md) {
            continue;
        }
        for &next in &adjacency[site] {
            if !seen[next] {
                seen[next] = true;
                queue.push_back((next, depth + 1));
            }
        }
    }
}
