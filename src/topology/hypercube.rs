//! `Hypercube`: regular n-dimensional grid lattice topology.
//!
//! Sites are the points of a Cartesian-product box with per-dimension
//! extents, indexed by a fixed row-major lexicographic encoding (first
//! coordinate most significant). Each site bonds to its axis neighbors;
//! open boundaries drop the out-of-range bond, periodic dimensions wrap.
//! Wrap bonds that collapse onto existing ones (extent 2) are deduplicated
//! and wrap bonds that would self-loop (extent 1) are skipped, so the graph
//! stays simple for every admissible extent.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::debug_invariants;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::topology::color::{DEFAULT_COLOR, EdgeColors};
use crate::topology::graph::{Topology, adjacency_from_edges, validate_topology};
use crate::topology::site::{Edge, Site};
use crate::topology::symmetry::{Permutation, build_symmetry_table};

/// How the lattice labels its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatticeColoring {
    /// Every edge gets color 0.
    #[default]
    Uniform,
    /// An edge along dimension `k` gets color `k`.
    ByDirection,
}

/// A regular hypercubic lattice graph.
#[derive(Debug, Clone)]
pub struct Hypercube {
    extent: Vec<usize>,
    periodic: Vec<bool>,
    nsites: usize,
    adjacency: Vec<Vec<Site>>,
    symmetry: Vec<Permutation>,
    colors: EdgeColors,
}

impl Hypercube {
    /// Builds a lattice with uniform edge color 0.
    ///
    /// # Errors
    /// [`GraphError::InvalidConfiguration`] when `extent` is empty, any
    /// extent is zero, or `periodic` does not have one flag per dimension.
    pub fn new(extent: Vec<usize>, periodic: Vec<bool>) -> Result<Self, GraphError> {
        Self::with_coloring(extent, periodic, LatticeColoring::Uniform)
    }

    /// Builds a lattice with the given edge-coloring rule.
    pub fn with_coloring(
        extent: Vec<usize>,
        periodic: Vec<bool>,
        coloring: LatticeColoring,
    ) -> Result<Self, GraphError> {
        let dimension = extent.len();
        if dimension < 1 {
            return Err(GraphError::invalid(
                "hypercube lattice requires dimension >= 1",
            ));
        }
        if let Some(k) = extent.iter().position(|&l| l < 1) {
            return Err(GraphError::invalid(format!(
                "hypercube extent must be >= 1 in every dimension, dimension {k} has {}",
                extent[k]
            )));
        }
        if periodic.len() != dimension {
            return Err(GraphError::invalid(format!(
                "periodicity flags ({}) must match dimension ({dimension})",
                periodic.len()
            )));
        }

        let nsites: usize = extent.iter().product();
        // BTreeMap keyed on the normalized edge: wrap bonds of extent-2
        // dimensions land on the open bond and are deduplicated here.
        let mut colored_edges: BTreeMap<Edge, u32> = BTreeMap::new();
        for coord in extent.iter().map(|&l| 0..l).multi_cartesian_product() {
            let here = encode(&extent, &coord);
            for k in 0..dimension {
                let l = extent[k];
                let next = if coord[k] + 1 < l {
                    coord[k] + 1
                } else if periodic[k] && l > 1 {
                    0
                } else {
                    continue;
                };
                let mut other = coord.clone();
                other[k] = next;
                let color = match coloring {
                    LatticeColoring::Uniform => DEFAULT_COLOR,
                    LatticeColoring::ByDirection => k as u32,
                };
                colored_edges.insert(Edge::new(here, encode(&extent, &other))?, color);
            }
        }

        let edges: Vec<Edge> = colored_edges.keys().copied().collect();
        let adjacency = adjacency_from_edges(nsites, &edges);
        let colors: EdgeColors = colored_edges.into_iter().collect();
        let generators = translation_generators(&extent, &periodic);
        let symmetry = build_symmetry_table(nsites, generators, &adjacency)?;

        let lattice = Self {
            extent,
            periodic,
            nsites,
            adjacency,
            symmetry,
            colors,
        };
        log::debug!(
            "built hypercube lattice: dim={dimension}, nsites={}, edges={}, generators={}",
            lattice.nsites,
            lattice.colors.len(),
            lattice.symmetry.len() - 1
        );
        debug_invariants!(lattice.validate_invariants(), "Hypercube::with_coloring");
        Ok(lattice)
    }

    /// Number of lattice dimensions.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.extent.len()
    }

    /// Per-dimension extents.
    #[inline]
    pub fn extent(&self) -> &[usize] {
        &self.extent
    }

    /// Per-dimension periodicity flags.
    #[inline]
    pub fn periodic(&self) -> &[bool] {
        &self.periodic
    }

    /// Site index of a coordinate tuple.
    ///
    /// # Panics
    /// Panics when `coord` has the wrong length or a component out of range;
    /// coordinates are internal addresses, not user configuration.
    pub fn site_at(&self, coord: &[usize]) -> Site {
        assert_eq!(coord.len(), self.dimension(), "coordinate rank mismatch");
        for (k, (&c, &l)) in coord.iter().zip(&self.extent).enumerate() {
            assert!(c < l, "coordinate {c} out of range in dimension {k}");
        }
        encode(&self.extent, coord)
    }

    /// Coordinate tuple of a site index.
    pub fn coordinates(&self, site: Site) -> Vec<usize> {
        assert!(site < self.nsites, "site index out of range");
        let mut rest = site;
        let mut coord = vec![0; self.dimension()];
        for k in (0..self.dimension()).rev() {
            coord[k] = rest % self.extent[k];
            rest /= self.extent[k];
        }
        coord
    }
}

impl Topology for Hypercube {
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

impl DebugInvariants for Hypercube {
    fn debug_assert_invariants(&self) {
        debug_invariants!(self.validate_invariants(), "Hypercube");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        validate_topology(self)
    }
}

/// Row-major site index of `coord` (first coordinate most significant).
fn encode(extent: &[usize], coord: &[usize]) -> Site {
    coord
        .iter()
        .zip(extent)
        .fold(0, |acc, (&c, &l)| acc * l + c)
}

/// Unit translation along every wrapped dimension with extent > 1. Open
/// dimensions get no generator: shifting them is not an automorphism.
fn translation_generators(extent: &[usize], periodic: &[bool]) -> Vec<Permutation> {
    let nsites: usize = extent.iter().product();
    let mut generators = Vec::new();
    for k in 0..extent.len() {
        if !periodic[k] || extent[k] < 2 {
            continue;
        }
        let mut images = vec![0; nsites];
        for coord in extent.iter().map(|&l| 0..l).multi_cartesian_product() {
            let mut shifted = coord.clone();
            shifted[k] = (shifted[k] + 1) % extent[k];
            images[encode(extent, &coord)] = encode(extent, &shifted);
        }
        // image vectors are bijections by construction
        generators.push(Permutation::try_new(images).expect("translation is a bijection"));
    }
    generators
}
