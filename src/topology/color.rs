//! `EdgeColors`: categorical labels attached to edges.
//!
//! Colors are opaque `u32` labels used by downstream consumers for grouping
//! (e.g. coupling classes, lattice directions). They are **not** weights and
//! never affect traversal distances; every traversed edge has unit length.

use hashbrown::HashMap;

use crate::topology::site::{Edge, Site};

/// Default color assigned when the builder gets no explicit coloring.
pub const DEFAULT_COLOR: u32 = 0;

/// Map from edge to its color label.
///
/// Invariant: every edge of the owning topology has exactly one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeColors {
    map: HashMap<Edge, u32>,
}

impl EdgeColors {
    /// Empty color map.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Inserts or overwrites the color of `edge`, returning the prior color
    /// if there was one.
    pub fn insert(&mut self, edge: Edge, color: u32) -> Option<u32> {
        self.map.insert(edge, color)
    }

    /// Color of the edge between `u` and `v`, if such an edge is recorded.
    pub fn color(&self, u: Site, v: Site) -> Option<u32> {
        let edge = Edge::new(u, v).ok()?;
        self.map.get(&edge).copied()
    }

    /// Color of `edge`, if recorded.
    #[inline]
    pub fn color_of(&self, edge: Edge) -> Option<u32> {
        self.map.get(&edge).copied()
    }

    /// Number of colored edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no edge is colored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterator over `(edge, color)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, u32)> + '_ {
        self.map.iter().map(|(&e, &c)| (e, c))
    }

    /// All edges, sorted ascending for deterministic output.
    pub fn edges_sorted(&self) -> Vec<Edge> {
        let mut out: Vec<Edge> = self.map.keys().copied().collect();
        out.sort_unstable();
        out
    }
}

impl FromIterator<(Edge, u32)> for EdgeColors {
    fn from_iter<I: IntoIterator<Item = (Edge, u32)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
