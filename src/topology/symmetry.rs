//! `Permutation`: site relabelings and graph automorphisms.
//!
//! A symmetry generator of a topology is a permutation of its sites that
//! maps edges to edges (and therefore non-edges to non-edges). The symmetry
//! table of every topology holds the identity at index 0, followed by any
//! declared or derived generators, each validated at construction time.

use crate::graph_error::GraphError;
use crate::topology::site::Site;

/// A bijection on `[0, n)`, stored as the image vector: site `i` maps to
/// `perm[i]`.
// Serialize only: deserialization would bypass the bijection check in
// `Permutation::try_new`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Permutation(Vec<Site>);

impl Permutation {
    /// The identity permutation on `n` sites.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Validates `images` as a bijection on `[0, images.len())`.
    ///
    /// # Errors
    /// [`GraphError::InvalidConfiguration`] when an image is out of range or
    /// repeated.
    pub fn try_new(images: Vec<Site>) -> Result<Self, GraphError> {
        let n = images.len();
        let mut hit = vec![false; n];
        for (src, &dst) in images.iter().enumerate() {
            if dst >= n {
                return Err(GraphError::invalid(format!(
                    "symmetry permutation maps site {src} to {dst}, outside [0, {n})"
                )));
            }
            if hit[dst] {
                return Err(GraphError::invalid(format!(
                    "symmetry permutation is not a bijection: image {dst} repeats"
                )));
            }
            hit[dst] = true;
        }
        Ok(Self(images))
    }

    /// Image of `site`.
    #[inline]
    pub fn apply(&self, site: Site) -> Site {
        self.0[site]
    }

    /// Number of sites the permutation acts on.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-site permutation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every site maps to itself.
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &img)| i == img)
    }

    /// Image vector, `site -> image`.
    #[inline]
    pub fn images(&self) -> &[Site] {
        &self.0
    }

    /// True if the permutation maps every edge of `adjacency` to an edge.
    /// `adjacency` must have sorted neighbor lists (every constructed
    /// topology does).
    ///
    /// Since a permutation is invertible and the edge set is finite, mapping
    /// edges into edges already forces non-edges onto non-edges.
    pub fn is_automorphism(&self, adjacency: &[Vec<Site>]) -> bool {
        if self.len() != adjacency.len() {
            return false;
        }
        adjacency.iter().enumerate().all(|(u, neighbors)| {
            let iu = self.apply(u);
            neighbors
                .iter()
                .all(|&v| adjacency[iu].binary_search(&self.apply(v)).is_ok())
        })
    }
}

/// Assembles a symmetry table: identity first, then each generator validated
/// as an automorphism of `adjacency`. Generators equal to the identity are
/// skipped rather than duplicated.
///
/// # Errors
/// [`GraphError::InvalidConfiguration`] when a generator has the wrong
/// length or fails the automorphism check. Bijection validity must already
/// hold (generators are `Permutation` values).
pub fn build_symmetry_table(
    nsites: usize,
    generators: Vec<Permutation>,
    adjacency: &[Vec<Site>],
) -> Result<Vec<Permutation>, GraphError> {
    let mut table = Vec::with_capacity(generators.len() + 1);
    table.push(Permutation::identity(nsites));
    for (k, generator) in generators.into_iter().enumerate() {
        if generator.len() != nsites {
            return Err(GraphError::invalid(format!(
                "symmetry generator {k} acts on {} sites, topology has {nsites}",
                generator.len()
            )));
        }
        if !generator.is_automorphism(adjacency) {
            return Err(GraphError::invalid(format!(
                "symmetry generator {k} does not map the edge set onto itself"
            )));
        }
        if !generator.is_identity() {
            table.push(generator);
        }
    }
    Ok(table)
}
