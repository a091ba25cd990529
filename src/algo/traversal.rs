/*!
Graph traversal and connectivity.

Provides a lazy breadth-first search iterator and a [`Traversal`] trait exposing it (and the
connectivity queries derived from it) directly as methods on graphs.
*/

use std::{collections::VecDeque, iter::FusedIterator};

use fxhash::FxHashSet;

use super::*;

/// Breadth-first search iterator.
///
/// Yields every vertex reachable from the start vertex exactly once, in BFS order.
/// The frontier is a queue; vertices are marked as visited when they are enqueued.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FxHashSet<VertexId>,
    queue: VecDeque<VertexId>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Starts a new search at `start`.
    /// ** Panics if `start` is not a vertex of the graph **
    pub fn new(graph: &'a G, start: VertexId) -> Self {
        assert!(graph.has_vertex(start), "vertex {start} does not exist");
        Self {
            graph,
            visited: FxHashSet::from_iter([start]),
            queue: VecDeque::from([start]),
        }
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for v in self.graph.neighbors_of(u) {
            if self.visited.insert(v) {
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

impl<G> FusedIterator for BFS<'_, G> where G: AdjacencyList {}

/// Traversal-derived queries available on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing vertices in breadth-first-search order starting at `start`.
    /// ** Panics if `start` is not a vertex of the graph **
    fn bfs(&self, start: VertexId) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns the connected components of the graph, each as a sorted list of ids.
    /// Components are ordered by their smallest id.
    fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut seen = FxHashSet::default();
        let mut components = Vec::new();

        for u in self.sorted_vertices() {
            if seen.contains(&u) {
                continue;
            }
            let mut component: Vec<VertexId> = self.bfs(u).collect();
            seen.extend(component.iter().copied());
            component.sort_unstable();
            components.push(component);
        }

        components
    }

    /// Returns the number of connected components
    fn number_of_components(&self) -> usize {
        self.connected_components().len()
    }

    /// Returns *true* if the graph is connected. The empty graph counts as connected.
    fn is_connected(&self) -> bool {
        match self.vertices().next() {
            None => true,
            Some(u) => self.bfs(u).count() == self.len(),
        }
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_order() {
        let g = Graph::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]);
        let order = g.bfs(0).collect_vec();
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], 0);
        assert_eq!(order[1..3].iter().copied().sorted().collect_vec(), vec![1, 2]);
        assert_eq!(order[3..5].iter().copied().sorted().collect_vec(), vec![3, 4]);
    }

    #[test]
    fn components() {
        let g = Graph::from_edges(7, [(0, 1), (2, 3), (3, 4), (6, 4)]);
        assert_eq!(
            g.connected_components(),
            vec![vec![0, 1], vec![2, 3, 4, 6], vec![5]]
        );
        assert_eq!(g.number_of_components(), 3);
        assert!(!g.is_connected());

        assert!(Graph::with_default_edge().is_connected());
        assert!(Graph::new().is_connected());
    }
}
