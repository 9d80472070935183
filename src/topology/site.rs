//! `Site` and `Edge`: the leaf value types of a topology.
//!
//! A site is a dense integer index in `[0, nsites)`; the graph assigns
//! indices at construction and never reuses or remaps them afterwards.
//! An [`Edge`] is an unordered pair of distinct sites, stored normalized
//! (`min ≤ max`) so the same physical bond always hashes and compares equal
//! regardless of the order it was written in.

use std::fmt;

use crate::graph_error::GraphError;

/// A vertex index in `[0, nsites)`.
pub type Site = usize;

/// An unordered pair of distinct sites.
///
/// The constructor normalizes endpoint order and rejects self-loops, so an
/// `Edge` value is always a valid simple-graph bond. Use it as a map key
/// (e.g. in [`EdgeColors`](crate::topology::color::EdgeColors)) without
/// worrying about `(u, v)` vs `(v, u)`.
// Serialize only: deserialization would bypass the normalized-pair and
// no-self-loop checks in `Edge::new`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Edge {
    min: Site,
    max: Site,
}

impl Edge {
    /// Creates a normalized edge between two distinct sites.
    ///
    /// # Errors
    /// [`GraphError::InvalidConfiguration`] if `u == v` (self-loop).
    pub fn new(u: Site, v: Site) -> Result<Self, GraphError> {
        if u == v {
            return Err(GraphError::invalid(format!(
                "self-loop edge ({u}, {u}) is not allowed"
            )));
        }
        Ok(Self {
            min: u.min(v),
            max: u.max(v),
        })
    }

    /// The two endpoints, smaller index first.
    #[inline]
    pub const fn endpoints(self) -> (Site, Site) {
        (self.min, self.max)
    }

    /// The smaller endpoint.
    #[inline]
    pub const fn min(self) -> Site {
        self.min
    }

    /// The larger endpoint.
    #[inline]
    pub const fn max(self) -> Site {
        self.max
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}, {})", self.min, self.max)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}
