use lattice_graph::algs::BfsBuilder;
use lattice_graph::topology::custom::CustomGraph;
use lattice_graph::topology::graph::Topology;
use lattice_graph::topology::hypercube::Hypercube;
use lattice_graph::topology::site::Site;

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

fn path4() -> CustomGraph {
    CustomGraph::new(&[(0, 1), (1, 2), (2, 3)], None).unwrap()
}

// two components: a triangle and a detached pair
fn split_graph() -> CustomGraph {
    CustomGraph::new(&[(0, 1), (1, 2), (2, 0), (3, 4)], None).unwrap()
}

fn visited<T: Topology>(g: &T, root: Site, max_depth: Option<u32>) -> Vec<(Site, u32)> {
    let mut out = Vec::new();
    BfsBuilder::new(g)
        .root(root)
        .max_depth(max_depth)
        .run(|site, depth| out.push((site, depth)));
    out
}

// ----------------------------------------------------------------------------
// Breadth-first search
// ----------------------------------------------------------------------------

#[test]
fn depth_limited_bfs_on_path() {
    let g = path4();
    let seen = visited(&g, 0, Some(1));
    assert_eq!(seen, vec![(0, 0), (1, 1)]);
}

#[test]
fn depth_zero_visits_only_the_root() {
    let g = path4();
    assert_eq!(visited(&g, 2, Some(0)), vec![(2, 0)]);
}

#[test]
fn unbounded_bfs_covers_the_component() {
    let g = split_graph();
    let seen = visited(&g, 0, None);
    assert_eq!(seen, vec![(0, 0), (1, 1), (2, 1)]);
}

#[test]
fn depths_are_non_decreasing_and_unique() {
    let g = Hypercube::new(vec![4, 4], vec![true, true]).unwrap();
    let mut last = 0u32;
    let mut sites = Vec::new();
    g.breadth_first_search(5, None, |site, depth| {
        assert!(depth >= last);
        last = depth;
        sites.push(site);
    });
    sites.sort_unstable();
    sites.dedup();
    assert_eq!(sites.len(), 16, "each site visited exactly once");
}

#[test]
fn depth_equals_bfs_distance() {
    let g = Hypercube::new(vec![3, 3], vec![false, false]).unwrap();
    let dist = g.distances(0);
    g.breadth_first_search(0, None, |site, depth| {
        assert_eq!(dist[site], Some(depth));
    });
}

#[test]
fn whole_graph_bfs_restarts_per_component() {
    let g = split_graph();
    let mut seen = Vec::new();
    g.breadth_first_search_all(|site, depth| seen.push((site, depth)));
    assert_eq!(seen, vec![(0, 0), (1, 1), (2, 1), (3, 0), (4, 1)]);
}

#[test]
fn builder_without_root_sweeps_the_whole_graph() {
    let g = split_graph();
    let mut seen = Vec::new();
    BfsBuilder::new(&g)
        .max_depth(Some(0))
        .run(|site, depth| seen.push((site, depth)));
    // depth 0 cuts every component down to its root
    assert_eq!(seen, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
}

#[test]
fn bfs_is_deterministic() {
    let g = split_graph();
    let first = visited(&g, 0, None);
    for _ in 0..50 {
        assert_eq!(visited(&g, 0, None), first);
    }
}

// ----------------------------------------------------------------------------
// Distances
// ----------------------------------------------------------------------------

#[test]
fn unreachable_sites_are_none() {
    let g = split_graph();
    let d = g.distances(0);
    assert_eq!(d[0], Some(0));
    assert_eq!(d[1], Some(1));
    assert_eq!(d[3], None);
    assert_eq!(d[4], None);
}

#[test]
fn all_distances_diagonal_is_zero() {
    let g = Hypercube::new(vec![3, 3], vec![true, true]).unwrap();
    let all = g.all_distances();
    for (r, row) in all.iter().enumerate() {
        assert_eq!(row[r], Some(0));
    }
}

#[test]
fn distances_on_open_grid_are_manhattan() {
    let g = Hypercube::new(vec![3, 3], vec![false, false]).unwrap();
    let d = g.distances(0);
    // row-major: site = 3*row + col, distance = row + col
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(d[3 * row + col], Some((row + col) as u32));
        }
    }
}

#[test]
fn connectivity_matches_finite_distance_rows() {
    for g in [split_graph(), path4()] {
        let all_finite = g
            .all_distances()
            .iter()
            .all(|row| row.iter().all(|d| d.is_some()));
        assert_eq!(g.is_connected(), all_finite);
    }
}

#[test]
fn isolated_single_site_graph() {
    let g = CustomGraph::edgeless(1).unwrap();
    assert!(g.is_connected());
    assert!(g.is_bipartite());
    assert_eq!(g.distances(0), vec![Some(0)]);
}
