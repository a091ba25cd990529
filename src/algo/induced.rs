/*!
# Induced Subgraph Search

Enumerates every vertex subset of a *host* graph that induces a copy of a small connected
*pattern* graph.

The search is anchored at the pattern's maximum degree `dMax`: every host vertex of degree at
least `dMax` is tried as the image of a maximum-degree pattern vertex, together with every
`dMax`-subset of its neighbors (see [`KSubsets`]). Such a seed is then grown by backtracking:

- a *pivot* is picked among the candidate vertices that may still gain neighbors, preferring the
  first one whose induced degree lags behind the pattern degree at its position in the sorted
  degree sequences;
- each host neighbor of the pivot is either added to the candidate (and the search recurses) or
  excluded for all later siblings of that branch;
- a final branch *closes* the pivot, i.e. asserts that it received all its neighbors.

Branches are cut as soon as the induced degree sequence can no longer grow into the pattern's:
no vertex may exceed `dMax`, the sorted candidate degrees must be dominated position-wise by the
sorted pattern degrees, and closed vertices (whose degrees are final) may not outnumber the
pattern vertices of that degree. Full candidates are checked by [`BijectionSearch`] before
they are accepted; every vertex set is reported once, no matter how many anchors lead to it.

```rust
use induced_graphs::{prelude::*, algo::*};

// two triangles sharing the edge {1,2}
let host = Graph::from_edges(4, [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);

let mut sets = InducedSearch::new(&triangle).vertex_sets(&host).unwrap();
sets.sort();
assert_eq!(sets, vec![vec![0, 1, 2], vec![1, 2, 3]]);
```

Patterns without edges are not anchored: a pattern of `k` isolated vertices matches every
independent set of size `k` in the host. Patterns that have edges must be connected, otherwise
[`Error::DisconnectedPattern`] is returned.
*/

use fxhash::{FxHashMap, FxHashSet};
use log::{debug, trace, warn};
use smallvec::SmallVec;

use super::*;

/// A vertex set of the host inducing a copy of the pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InducedMatch {
    vertices: Vec<VertexId>,
    mapping: Bijection,
}

impl InducedMatch {
    /// Host vertices of the match in ascending order
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Witness mapping host vertices onto pattern vertices
    pub fn mapping(&self) -> &Bijection {
        &self.mapping
    }

    /// Clones the subgraph of `host` induced by the match
    pub fn to_subgraph(&self, host: &Graph) -> Graph {
        host.induced_subgraph(self.vertices.iter().copied())
    }
}

/// Configurable search for induced copies of a pattern.
///
/// The pattern is fixed at construction; the same search can be run on any number of hosts.
/// Neither the pattern nor the host is modified.
#[derive(Debug, Clone, Copy)]
pub struct InducedSearch<'a> {
    pattern: &'a Graph,
    limit: Option<usize>,
}

impl<'a> InducedSearch<'a> {
    /// Creates a new search for induced copies of `pattern`
    pub fn new(pattern: &'a Graph) -> Self {
        Self {
            pattern,
            limit: None,
        }
    }

    /// Stops the search after `limit` distinct matches have been found
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns all distinct matches in `host` (at most `limit` many if set) in discovery order.
    ///
    /// # Errors
    /// Returns [`Error::DisconnectedPattern`] if the pattern has edges but is not connected.
    pub fn find_matches(&self, host: &Graph) -> Result<Vec<InducedMatch>> {
        let k = self.pattern.len();
        if k == 0 {
            return Ok(Vec::new());
        }

        let d_max = self.pattern.max_degree();
        if d_max > 0 && !self.pattern.is_connected() {
            let components = self.pattern.number_of_components();
            warn!("rejecting pattern with {components} connected components");
            return Err(Error::DisconnectedPattern { components });
        }

        let limit = self.limit.unwrap_or(usize::MAX);
        if host.len() < k || limit == 0 {
            return Ok(Vec::new());
        }

        debug!(
            "searching induced copies of a pattern with {k} vertices and max degree {d_max} in a host with {} vertices and {} edges",
            host.number_of_vertices(),
            host.number_of_edges()
        );

        let mut searcher = Searcher::new(host, self.pattern, limit);
        if d_max == 0 {
            let pool = host.sorted_vertices();
            searcher.independent_sets(&pool, 0);
        } else {
            searcher.run();
        }

        debug!(
            "found {} matches after verifying {} candidates",
            searcher.matches.len(),
            searcher.verified.len()
        );
        Ok(searcher.matches)
    }

    /// Returns the vertex sets (each in ascending order) of all distinct matches in `host`.
    ///
    /// # Errors
    /// See [`InducedSearch::find_matches`].
    pub fn vertex_sets(&self, host: &Graph) -> Result<Vec<Vec<VertexId>>> {
        Ok(self
            .find_matches(host)?
            .into_iter()
            .map(|m| m.vertices)
            .collect())
    }

    /// Returns one cloned induced subgraph of `host` per distinct match.
    ///
    /// # Errors
    /// See [`InducedSearch::find_matches`].
    pub fn subgraphs(&self, host: &Graph) -> Result<Vec<Graph>> {
        Ok(self
            .find_matches(host)?
            .iter()
            .map(|m| m.to_subgraph(host))
            .collect())
    }
}

/// Provides the induced-subgraph search directly on the host
pub trait InducedSubgraphs {
    /// Returns one induced subgraph per distinct vertex set inducing a copy of `pattern`.
    /// Returned graphs keep the host ids and never share vertices with the host.
    ///
    /// # Errors
    /// Returns [`Error::DisconnectedPattern`] if the pattern has edges but is not connected.
    fn induced_subgraphs(&self, pattern: &Graph) -> Result<Vec<Graph>>;

    /// Same as [`InducedSubgraphs::induced_subgraphs`] but returns the matches with their witnesses
    fn induced_matches(&self, pattern: &Graph) -> Result<Vec<InducedMatch>>;
}

impl InducedSubgraphs for Graph {
    fn induced_subgraphs(&self, pattern: &Graph) -> Result<Vec<Graph>> {
        InducedSearch::new(pattern).subgraphs(self)
    }

    fn induced_matches(&self, pattern: &Graph) -> Result<Vec<InducedMatch>> {
        InducedSearch::new(pattern).find_matches(self)
    }
}

/// The growing vertex set of one search branch together with its induced degrees
#[derive(Debug, Default)]
struct Candidate {
    members: Vec<VertexId>,
    degrees: Vec<NumVertices>,
    /// closed members already have all neighbors they will ever have in this branch
    closed: Vec<bool>,
    index: FxHashSet<VertexId>,
}

impl Candidate {
    fn len(&self) -> usize {
        self.members.len()
    }

    fn contains(&self, u: VertexId) -> bool {
        self.index.contains(&u)
    }

    fn push(&mut self, host: &Graph, u: VertexId) {
        let mut degree = 0;
        for (i, &v) in self.members.iter().enumerate() {
            if host.has_edge(u, v) {
                self.degrees[i] += 1;
                degree += 1;
            }
        }

        self.index.insert(u);
        self.members.push(u);
        self.degrees.push(degree);
        self.closed.push(false);
    }

    fn pop(&mut self, host: &Graph) {
        let Some(u) = self.members.pop() else {
            return;
        };
        self.degrees.pop();
        self.closed.pop();
        self.index.remove(&u);

        for (i, &v) in self.members.iter().enumerate() {
            if host.has_edge(u, v) {
                self.degrees[i] -= 1;
            }
        }
    }

    fn clear(&mut self) {
        self.members.clear();
        self.degrees.clear();
        self.closed.clear();
        self.index.clear();
    }

    /// Member indices sorted by induced degree in descending order
    fn by_degree(&self) -> SmallVec<[usize; 16]> {
        let mut order: SmallVec<[usize; 16]> = (0..self.len()).collect();
        order.sort_by(|&a, &b| self.degrees[b].cmp(&self.degrees[a]));
        order
    }
}

/// State of a single [`InducedSearch::find_matches`] run
struct Searcher<'a> {
    host: &'a Graph,
    pattern: &'a Graph,
    pattern_vertices: Vec<VertexId>,
    /// pattern degree sequence in descending order (with duplicates)
    pattern_degrees: Vec<NumVertices>,
    /// number of pattern vertices per degree
    class_sizes: FxHashMap<NumVertices, usize>,
    d_max: NumVertices,
    limit: usize,

    candidate: Candidate,
    /// vertices outside the candidate that may not join it in the current branch
    forbidden: FxHashSet<VertexId>,
    /// sorted vertex sets that went through verification, accepted or not
    verified: FxHashSet<Vec<VertexId>>,
    matches: Vec<InducedMatch>,
}

impl<'a> Searcher<'a> {
    fn new(host: &'a Graph, pattern: &'a Graph, limit: usize) -> Self {
        let pattern_degrees = pattern.degrees_descending(true);
        let class_sizes = pattern
            .degree_classes()
            .into_iter()
            .map(|(d, class)| (d, class.len()))
            .collect();

        Self {
            host,
            pattern,
            pattern_vertices: pattern.sorted_vertices(),
            d_max: pattern_degrees.first().copied().unwrap_or(0),
            pattern_degrees,
            class_sizes,
            limit,
            candidate: Candidate::default(),
            forbidden: FxHashSet::default(),
            verified: FxHashSet::default(),
            matches: Vec::new(),
        }
    }

    fn k(&self) -> usize {
        self.pattern_degrees.len()
    }

    fn is_done(&self) -> bool {
        self.matches.len() >= self.limit
    }

    /// Tries every host vertex of degree at least `dMax` as anchor
    fn run(&mut self) {
        let host = self.host;
        let d_max = self.d_max;
        let classes = host.degree_classes();

        for degree in host
            .degrees_descending(false)
            .into_iter()
            .take_while(|&d| d >= d_max)
        {
            for &anchor in &classes[&degree] {
                if self.is_done() {
                    return;
                }

                let neighbors = host.sorted_neighbors_of(anchor);
                trace!("anchor {anchor} with degree {degree}");

                for subset in neighbors.iter().copied().k_subsets(d_max as usize) {
                    if self.is_done() {
                        return;
                    }
                    self.seed(anchor, &subset, &neighbors);
                }
            }
        }
    }

    /// Starts a branch with the anchor closed over `subset`; its other neighbors are excluded
    fn seed(&mut self, anchor: VertexId, subset: &[VertexId], neighbors: &[VertexId]) {
        let host = self.host;

        self.candidate.push(host, anchor);
        for &u in subset {
            self.candidate.push(host, u);
        }
        self.candidate.closed[0] = true;

        // `subset` is a subsequence of the sorted `neighbors`
        self.forbidden.extend(
            neighbors
                .iter()
                .copied()
                .filter(|u| subset.binary_search(u).is_err()),
        );

        if self.is_feasible() {
            self.extend();
        } else {
            trace!("seed {anchor} + {subset:?} cannot grow into the pattern");
        }

        self.candidate.clear();
        self.forbidden.clear();
    }

    fn extend(&mut self) {
        if self.is_done() {
            return;
        }

        if self.candidate.len() == self.k() {
            self.verify();
            return;
        }

        let Some(pivot) = self.pivot() else {
            trace!("dead branch at {:?}", self.candidate.members);
            return;
        };

        let host = self.host;
        let mut excluded = Vec::new();

        for w in host.sorted_neighbors_of(self.candidate.members[pivot]) {
            if self.is_done() {
                break;
            }
            if self.candidate.contains(w) || self.forbidden.contains(&w) {
                continue;
            }

            if self.admits(w) {
                self.candidate.push(host, w);
                if self.is_feasible() {
                    self.extend();
                }
                self.candidate.pop(host);
            }

            // later siblings (and the closing branch) must not pick `w` up again
            self.forbidden.insert(w);
            excluded.push(w);
        }

        if !self.is_done() {
            self.candidate.closed[pivot] = true;
            if self.is_feasible() {
                self.extend();
            }
            self.candidate.closed[pivot] = false;
        }

        for w in excluded {
            self.forbidden.remove(&w);
        }
    }

    /// Picks the open member to extend next
    fn pivot(&self) -> Option<usize> {
        let candidate = &self.candidate;
        let order = candidate.by_degree();

        order
            .iter()
            .enumerate()
            .find(|&(pos, &i)| {
                !candidate.closed[i] && candidate.degrees[i] < self.pattern_degrees[pos]
            })
            .map(|(_, &i)| i)
            .or_else(|| order.iter().copied().find(|&i| !candidate.closed[i]))
    }

    /// Returns *true* if `w` can join the candidate without exceeding `dMax` anywhere
    /// or adding a neighbor to a closed member
    fn admits(&self, w: VertexId) -> bool {
        let candidate = &self.candidate;
        let mut degree = 0;

        for (i, &v) in candidate.members.iter().enumerate() {
            if self.host.has_edge(w, v) {
                if candidate.closed[i] || candidate.degrees[i] >= self.d_max {
                    return false;
                }
                degree += 1;
            }
        }

        degree <= self.d_max
    }

    /// Returns *true* if the candidate may still be extended into a copy of the pattern
    fn is_feasible(&self) -> bool {
        let candidate = &self.candidate;

        // induced degrees only grow, so the sorted sequence must stay below the pattern's
        let dominated = candidate
            .by_degree()
            .iter()
            .zip(&self.pattern_degrees)
            .all(|(&i, &required)| candidate.degrees[i] <= required);
        if !dominated {
            return false;
        }

        let mut closed_per_degree: FxHashMap<NumVertices, usize> = FxHashMap::default();
        for (i, &degree) in candidate.degrees.iter().enumerate() {
            if candidate.closed[i] {
                *closed_per_degree.entry(degree).or_default() += 1;
            }
        }

        closed_per_degree
            .into_iter()
            .all(|(degree, count)| count <= self.class_sizes.get(&degree).copied().unwrap_or(0))
    }

    fn verify(&mut self) {
        let mut degrees = self.candidate.degrees.clone();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        if degrees != self.pattern_degrees {
            trace!(
                "degree sequence of {:?} differs from the pattern",
                self.candidate.members
            );
            return;
        }

        let mut vertices = self.candidate.members.clone();
        vertices.sort_unstable();
        if !self.verified.insert(vertices.clone()) {
            return;
        }

        let search = BijectionSearch::new(
            self.host,
            vertices.iter().copied(),
            self.pattern,
            self.pattern_vertices.iter().copied(),
        );
        match search.find() {
            Some(mapping) => self.matches.push(InducedMatch { vertices, mapping }),
            None => trace!("{vertices:?} has the right degrees but is not a copy"),
        }
    }

    /// Collects independent sets of size `k` from `pool[start..]` (ascending ids)
    fn independent_sets(&mut self, pool: &[VertexId], start: usize) {
        if self.is_done() {
            return;
        }

        let k = self.k();
        if self.candidate.len() == k {
            let vertices = self.candidate.members.clone();
            let mapping = Bijection::by_rank(&vertices, &self.pattern_vertices);
            self.matches.push(InducedMatch { vertices, mapping });
            return;
        }

        let host = self.host;
        for i in start..pool.len() {
            if pool.len() - i < k - self.candidate.len() || self.is_done() {
                break;
            }

            let w = pool[i];
            if self.candidate.members.iter().any(|&v| host.has_edge(w, v)) {
                continue;
            }

            self.candidate.push(host, w);
            self.independent_sets(pool, i + 1);
            self.candidate.pop(host);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    fn sorted_sets(host: &Graph, pattern: &Graph) -> Vec<Vec<VertexId>> {
        let mut sets = InducedSearch::new(pattern).vertex_sets(host).unwrap();
        sets.sort();
        sets
    }

    fn patterns() -> Vec<Graph> {
        vec![
            Graph::from_edges(2, [(0, 1)]),
            path(3),
            cycle(3),
            path(4),
            Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)]),
            cycle(4),
            Graph::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]),
            Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]),
            path(5),
            cycle(5),
            Graph::from_edges(5, [(0, 1), (0, 2), (0, 3), (0, 4), (1, 2)]),
        ]
    }

    #[test]
    fn subpaths_of_a_path() {
        let host = path(5);
        let pattern = path(3);

        let subgraphs = host.induced_subgraphs(&pattern).unwrap();
        assert_eq!(subgraphs.len(), 3);
        for sub in &subgraphs {
            assert_eq!(sub.number_of_vertices(), 3);
            assert_eq!(sub.number_of_edges(), 2);
            assert!(sub.is_connected());
        }

        assert_eq!(
            sorted_sets(&host, &pattern),
            vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]
        );
    }

    #[test]
    fn disjoint_triangles() {
        let triangle = cycle(3);
        let host = Graph::concat([&triangle, &triangle]);

        assert_eq!(
            sorted_sets(&host, &triangle),
            vec![vec![0, 1, 2], vec![3, 4, 5]]
        );
    }

    #[test]
    fn induced_not_plain_subgraph() {
        // K4 contains paths on three vertices, but none of them is induced
        let k4 = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert!(sorted_sets(&k4, &path(3)).is_empty());
        assert_eq!(sorted_sets(&k4, &cycle(3)).len(), 4);
        assert!(sorted_sets(&cycle(4), &cycle(3)).is_empty());
    }

    #[test]
    fn matches_carry_witnesses() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let host: Graph = RandomGraph::gnp(rng, 12, 0.4);

        for pattern in patterns() {
            for m in host.induced_matches(&pattern).unwrap() {
                let sub = m.to_subgraph(&host);
                assert_eq!(
                    sub.degrees_descending(true),
                    pattern.degrees_descending(true)
                );

                let mapping = m.mapping();
                assert_eq!(mapping.len(), pattern.len());
                assert!(mapping.preserves_adjacency(&host, &pattern));
                for &u in m.vertices() {
                    assert!(mapping.image_of(u).is_some());
                }
            }
        }
    }

    #[test]
    fn idempotent_and_without_duplicates() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let host: Graph = RandomGraph::gnp(rng, 14, 0.3);
        let edges_before = host.ordered_edges();

        for pattern in patterns() {
            let first = InducedSearch::new(&pattern).vertex_sets(&host).unwrap();
            let second = InducedSearch::new(&pattern).vertex_sets(&host).unwrap();

            let distinct: BTreeSet<Vec<VertexId>> = first.iter().cloned().collect();
            assert_eq!(distinct.len(), first.len());
            assert_eq!(distinct, second.into_iter().collect::<BTreeSet<_>>());
        }

        assert_eq!(host.ordered_edges(), edges_before);
    }

    #[test]
    fn agrees_with_brute_force() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for p in [0.2, 0.35, 0.5, 0.7] {
            for _ in 0..4 {
                let host: Graph = RandomGraph::gnp(rng, 9, p);
                for pattern in patterns() {
                    let found: BTreeSet<Vec<VertexId>> = InducedSearch::new(&pattern)
                        .vertex_sets(&host)
                        .unwrap()
                        .into_iter()
                        .collect();
                    assert_eq!(
                        found,
                        brute_force_induced(&host, &pattern),
                        "host {:?}, pattern {:?}",
                        host.ordered_edges(),
                        pattern.ordered_edges()
                    );
                }
            }
        }
    }

    #[test]
    fn sparse_host_ids() {
        let mut host = cycle(6);
        host.remove_vertex(0);
        host.remove_vertex(3);

        // what is left are the paths 1-2 and 4-5
        assert_eq!(
            sorted_sets(&host, &Graph::with_default_edge()),
            vec![vec![1, 2], vec![4, 5]]
        );
        assert!(sorted_sets(&host, &path(3)).is_empty());
    }

    #[test]
    fn single_vertex_pattern() {
        let host = path(4);
        let pattern = Graph::from_edges(1, std::iter::empty::<Edge>());

        let subgraphs = host.induced_subgraphs(&pattern).unwrap();
        assert_eq!(subgraphs.len(), 4);
        for sub in &subgraphs {
            assert_eq!(sub.number_of_vertices(), 1);
            assert!(sub.is_edgeless());
            assert!(sub.iter().all(|v| v.degree() == 0));
        }
        assert_eq!(
            sorted_sets(&host, &pattern),
            vec![vec![0], vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn edgeless_patterns_are_independent_sets() {
        let host = path(4);
        let pair = Graph::from_edges(2, std::iter::empty::<Edge>());
        assert_eq!(
            sorted_sets(&host, &pair),
            vec![vec![0, 2], vec![0, 3], vec![1, 3]]
        );

        let rng = &mut Pcg64Mcg::seed_from_u64(23);
        let host: Graph = RandomGraph::gnp(rng, 9, 0.4);
        for k in 2..5 {
            let pattern = Graph::from_edges(k, std::iter::empty::<Edge>());
            let matches = host.induced_matches(&pattern).unwrap();
            for m in &matches {
                assert!(m.mapping().preserves_adjacency(&host, &pattern));
            }
            assert_eq!(
                matches
                    .into_iter()
                    .map(|m| m.vertices().to_vec())
                    .collect::<BTreeSet<_>>(),
                brute_force_induced(&host, &pattern)
            );
        }
    }

    #[test]
    fn disconnected_pattern_is_rejected() {
        let host = path(6);
        let pattern = Graph::from_edges(4, [(0, 1), (2, 3)]);

        let result = InducedSearch::new(&pattern).find_matches(&host);
        assert!(matches!(
            result,
            Err(Error::DisconnectedPattern { components: 2 })
        ));
        assert_eq!(host.number_of_edges(), 5);
    }

    #[test]
    fn degenerate_inputs() {
        let host = path(3);
        assert!(host.induced_subgraphs(&Graph::new()).unwrap().is_empty());
        assert!(host.induced_subgraphs(&path(4)).unwrap().is_empty());
        assert!(Graph::new().induced_subgraphs(&path(2)).unwrap().is_empty());
    }

    #[test]
    fn limit_stops_early() {
        let k5 = {
            let mut g = Graph::from_edges(5, std::iter::empty::<Edge>());
            g.connect_clique([0, 1, 2, 3, 4]);
            g
        };
        let triangle = cycle(3);

        assert_eq!(InducedSearch::new(&triangle).vertex_sets(&k5).unwrap().len(), 10);
        assert_eq!(
            InducedSearch::new(&triangle)
                .limit(3)
                .vertex_sets(&k5)
                .unwrap()
                .len(),
            3
        );
        assert!(
            InducedSearch::new(&triangle)
                .limit(0)
                .vertex_sets(&k5)
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            InducedSearch::new(&Graph::from_edges(1, std::iter::empty::<Edge>()))
                .limit(2)
                .vertex_sets(&k5)
                .unwrap()
                .len(),
            2
        );
    }
}
