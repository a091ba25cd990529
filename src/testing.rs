//! Helpers shared by the unit tests of this crate

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::{algo::*, gens::*, prelude::*};

/// Path `0 - 1 - ... - (n-1)`
pub(crate) fn path(n: NumVertices) -> Graph {
    let mut graph = Graph::from_edges(n, std::iter::empty::<Edge>());
    graph.connect_path(0..n);
    graph
}

/// Cycle `0 - 1 - ... - (n-1) - 0`
pub(crate) fn cycle(n: NumVertices) -> Graph {
    let mut graph = Graph::from_edges(n, std::iter::empty::<Edge>());
    graph.connect_cycle(0..n);
    graph
}

/// Copy of `graph` (with ids `0..n`) in which vertex `i` is renamed to `permutation[i]`
pub(crate) fn relabel(graph: &Graph, permutation: &[VertexId]) -> Graph {
    Graph::from_edges(
        permutation.len() as NumVertices,
        graph
            .ordered_edges()
            .into_iter()
            .map(|Edge(u, v)| Edge(permutation[u as usize], permutation[v as usize])),
    )
}

/// Tries all `|V|!` bijections between the vertex sets
pub(crate) fn brute_force_isomorphic(a: &Graph, b: &Graph) -> bool {
    if a.len() != b.len() || a.number_of_edges() != b.number_of_edges() {
        return false;
    }

    let left = a.sorted_vertices();
    let right = b.sorted_vertices();

    right.iter().copied().permutations(right.len()).any(|images| {
        left.iter()
            .zip(&images)
            .tuple_combinations()
            .all(|((&u1, &v1), (&u2, &v2))| a.has_edge(u1, u2) == b.has_edge(v1, v2))
    })
}

/// All vertex sets (ascending) of `host` that induce a copy of `pattern`
pub(crate) fn brute_force_induced(host: &Graph, pattern: &Graph) -> BTreeSet<Vec<VertexId>> {
    host.sorted_vertices()
        .into_iter()
        .combinations(pattern.len())
        .filter(|subset| {
            brute_force_isomorphic(&host.induced_subgraph(subset.iter().copied()), pattern)
        })
        .collect()
}

/// Installs `env_logger` for the test harness; repeated calls are no-ops
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
