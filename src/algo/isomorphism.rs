/*!
# Bijection Verifier

Decides whether two equally sized vertex sets, each taken from its own graph, induce
isomorphic subgraphs, and produces a witness mapping if they do.

The search only ever maps vertices onto vertices of the same *induced* degree. Both sets are
partitioned into degree classes first; if the class sizes differ, no bijection can exist and
we fail without searching. Otherwise classes are assigned one after the other (smallest class
first) by backtracking, and every proposed pair `(a, b)` is checked against all pairs committed
so far, in this class or earlier ones:
```text
adjacent(a, a') == adjacent(b, b')   for all committed (a', b')
```
A partial assignment that violates this is discarded immediately. The first complete assignment
is returned; we never enumerate all isomorphisms.

```rust
use induced_graphs::{prelude::*, algo::*};

// two labelings of a 4-cycle
let c4 = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
let relabeled = Graph::from_edges(4, [(0, 2), (2, 1), (1, 3), (3, 0)]);

let search = BijectionSearch::new(&c4, c4.vertices(), &relabeled, relabeled.vertices());
let bijection = search.find().unwrap();
assert!(bijection.preserves_adjacency(&c4, &relabeled));
```
*/

use itertools::Itertools;
use log::trace;

use super::*;

/// A one-to-one mapping from a set of vertices of one graph onto a set of vertices of another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bijection {
    /// `(source, image)` pairs sorted by source
    pairs: Vec<(VertexId, VertexId)>,
}

impl Bijection {
    fn from_pairs(mut pairs: Vec<(VertexId, VertexId)>) -> Self {
        pairs.sort_unstable();
        Self { pairs }
    }

    /// Maps the `k`-th smallest of `sources` onto the `k`-th smallest of `images`
    pub(crate) fn by_rank(sources: &[VertexId], images: &[VertexId]) -> Self {
        debug_assert_eq!(sources.len(), images.len());
        let images = images.iter().copied().sorted_unstable();
        Self::from_pairs(sources.iter().copied().sorted_unstable().zip(images).collect())
    }

    /// Returns the image of `source` if it is part of the mapping
    pub fn image_of(&self, source: VertexId) -> Option<VertexId> {
        self.pairs
            .binary_search_by_key(&source, |&(a, _)| a)
            .ok()
            .map(|i| self.pairs[i].1)
    }

    /// Returns the vertex mapped onto `image` if it is part of the mapping
    pub fn preimage_of(&self, image: VertexId) -> Option<VertexId> {
        self.pairs.iter().find(|&&(_, b)| b == image).map(|&(a, _)| a)
    }

    /// All `(source, image)` pairs in ascending order of the source
    pub fn pairs(&self) -> &[(VertexId, VertexId)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns *true* if for all mapped `u, v`: `{u,v}` is an edge of `source` iff `{f(u), f(v)}` is an edge of `target`
    pub fn preserves_adjacency<G1, G2>(&self, source: &G1, target: &G2) -> bool
    where
        G1: AdjacencyTest,
        G2: AdjacencyTest,
    {
        self.pairs
            .iter()
            .tuple_combinations()
            .all(|(&(a1, b1), &(a2, b2))| source.has_edge(a1, a2) == target.has_edge(b1, b2))
    }
}

/// Degrees of `vertices` in the subgraph they induce in `graph`
fn induced_degrees<G: AdjacencyTest>(graph: &G, vertices: &[VertexId]) -> Vec<NumVertices> {
    vertices
        .iter()
        .map(|&u| {
            vertices
                .iter()
                .filter(|&&v| u != v && graph.has_edge(u, v))
                .count() as NumVertices
        })
        .collect()
}

/// Groups `vertices` by their induced degree
fn induced_degree_classes<G: AdjacencyTest>(graph: &G, vertices: &[VertexId]) -> DegreeClasses {
    let mut classes = DegreeClasses::new();
    for (&u, d) in vertices.iter().zip(induced_degrees(graph, vertices)) {
        classes.entry(d).or_default().push(u);
    }
    classes
}

/// Searches a structure-preserving bijection between two vertex sets.
///
/// `left_vertices` are interpreted in `left`, `right_vertices` in `right`; the sets may be
/// arbitrary subsets of their graphs and are compared via the subgraphs they induce.
/// Duplicate ids in the inputs are ignored.
#[derive(Debug, Clone)]
pub struct BijectionSearch<'a, G1, G2> {
    left: &'a G1,
    left_vertices: Vec<VertexId>,
    right: &'a G2,
    right_vertices: Vec<VertexId>,
}

impl<'a, G1, G2> BijectionSearch<'a, G1, G2>
where
    G1: AdjacencyTest,
    G2: AdjacencyTest,
{
    /// Creates a new search between `left_vertices` (in `left`) and `right_vertices` (in `right`)
    pub fn new<I1, I2>(left: &'a G1, left_vertices: I1, right: &'a G2, right_vertices: I2) -> Self
    where
        I1: IntoIterator<Item = VertexId>,
        I2: IntoIterator<Item = VertexId>,
    {
        Self {
            left,
            left_vertices: left_vertices.into_iter().sorted_unstable().dedup().collect(),
            right,
            right_vertices: right_vertices.into_iter().sorted_unstable().dedup().collect(),
        }
    }

    /// Returns *true* if a structure-preserving bijection exists
    pub fn exists(&self) -> bool {
        self.find().is_some()
    }

    /// Returns a structure-preserving bijection `left_vertices -> right_vertices` if one exists
    pub fn find(&self) -> Option<Bijection> {
        if self.left_vertices.len() != self.right_vertices.len() {
            return None;
        }

        let left_classes = induced_degree_classes(self.left, &self.left_vertices);
        let mut right_classes = induced_degree_classes(self.right, &self.right_vertices);

        let mut classes = Vec::with_capacity(left_classes.len());
        for (degree, sources) in left_classes {
            match right_classes.remove(&degree) {
                Some(targets) if targets.len() == sources.len() => classes.push((sources, targets)),
                _ => {
                    trace!("degree class {degree} differs in size; no bijection");
                    return None;
                }
            }
        }
        if !right_classes.is_empty() {
            trace!("right side has degree classes absent on the left; no bijection");
            return None;
        }

        // small classes first: they branch least and fix pairs that prune the larger ones
        classes.sort_by_key(|(sources, _)| sources.len());

        let mut matcher = Matcher::new(self.left, self.right, classes);
        if matcher.assign(0) {
            Some(Bijection::from_pairs(matcher.pairs))
        } else {
            None
        }
    }
}

/// Backtracking state of a single [`BijectionSearch::find`] call
struct Matcher<'a, G1, G2> {
    left: &'a G1,
    right: &'a G2,
    /// left vertices in assignment order, each with the index of its class
    order: Vec<(VertexId, usize)>,
    targets: Vec<Vec<VertexId>>,
    used: Vec<Vec<bool>>,
    pairs: Vec<(VertexId, VertexId)>,
}

impl<'a, G1, G2> Matcher<'a, G1, G2>
where
    G1: AdjacencyTest,
    G2: AdjacencyTest,
{
    fn new(left: &'a G1, right: &'a G2, classes: Vec<(Vec<VertexId>, Vec<VertexId>)>) -> Self {
        let mut order = Vec::new();
        let mut targets = Vec::with_capacity(classes.len());
        for (class, (sources, images)) in classes.into_iter().enumerate() {
            order.extend(sources.into_iter().map(|a| (a, class)));
            targets.push(images);
        }

        Self {
            left,
            right,
            used: targets.iter().map(|t| vec![false; t.len()]).collect(),
            pairs: Vec::with_capacity(order.len()),
            order,
            targets,
        }
    }

    fn is_consistent(&self, a: VertexId, b: VertexId) -> bool {
        self.pairs
            .iter()
            .all(|&(a2, b2)| self.left.has_edge(a, a2) == self.right.has_edge(b, b2))
    }

    /// Assigns all left vertices from position `pos` onwards; returns *true* on success
    /// leaving the complete assignment in `pairs`
    fn assign(&mut self, pos: usize) -> bool {
        let Some(&(a, class)) = self.order.get(pos) else {
            return true;
        };

        for j in 0..self.targets[class].len() {
            if self.used[class][j] {
                continue;
            }

            let b = self.targets[class][j];
            if !self.is_consistent(a, b) {
                continue;
            }

            self.used[class][j] = true;
            self.pairs.push((a, b));

            if self.assign(pos + 1) {
                return true;
            }

            self.pairs.pop();
            self.used[class][j] = false;
        }

        false
    }
}

/// Convenience functions to compare vertex sets of two graphs
pub trait Isomorphic: AdjacencyTest + Sized {
    /// Returns a structure-preserving bijection from all vertices of `self` onto all vertices of `other`
    fn isomorphism_to<G: AdjacencyTest>(&self, other: &G) -> Option<Bijection> {
        BijectionSearch::new(self, self.vertices(), other, other.vertices()).find()
    }

    /// Returns *true* if `self` and `other` are isomorphic
    fn is_isomorphic_to<G: AdjacencyTest>(&self, other: &G) -> bool {
        self.isomorphism_to(other).is_some()
    }
}

impl<G: AdjacencyTest> Isomorphic for G {}
