/*!
# Subgraph Algorithms

Provides traits and implementations for extracting vertex-induced subgraphs from a graph and
for combining multiple graphs into a single disjoint union.
*/

use fxhash::FxHashSet;

use super::*;

/// A trait for creating subgraphs from a graph.
pub trait Subgraph: Sized {
    /// Creates the **vertex-induced subgraph** on `vertices`.
    ///
    /// The result contains exactly the vertices of `self` whose id is in `vertices`, with
    /// their ids and presentation attributes preserved, and exactly those edges of `self`
    /// whose endpoints both lie in `vertices`. Ids that are not vertices of `self` are ignored.
    /// The subgraph owns clones of the vertices; it never shares them with `self`.
    fn induced_subgraph<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>;
}

impl Subgraph for Graph {
    fn induced_subgraph<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let keep: FxHashSet<VertexId> = vertices
            .into_iter()
            .filter(|&u| self.has_vertex(u))
            .collect();

        Graph::from_consistent_vertices(keep.iter().filter_map(|&u| {
            self.vertex(u)
                .map(|vertex| vertex.clone_restricted(|v| keep.contains(&v)))
        }))
    }
}

/// A trait for combining multiple graphs into a **single disjoint graph**.
pub trait Concat {
    /// Concatenates a collection of graphs into one disjoint union graph.
    ///
    /// Ids of each graph are shifted past all ids used by the graphs before it:
    /// vertex `i` of graph `G_j` receives id
    /// ```text
    /// i + (next_id(G_1) + ... + next_id(G_(j - 1)))
    /// ```
    /// where `next_id` is [`Graph::next_vertex_id`]. Presentation attributes are kept.
    fn concat<'a, T>(graphs: T) -> Self
    where
        T: IntoIterator<Item = &'a Graph>;
}

impl Concat for Graph {
    fn concat<'a, T>(graphs: T) -> Self
    where
        T: IntoIterator<Item = &'a Graph>,
    {
        let mut vertices = Vec::new();
        let mut shift: VertexId = 0;

        for graph in graphs {
            vertices.extend(graph.iter().map(|vertex| {
                let mut shifted = vertex.clone_restricted(|_| false);
                shifted.id = vertex.id() + shift;
                shifted
                    .neighbors
                    .extend(vertex.neighbors().map(|v| v + shift));
                shifted
            }));
            shift += graph.next_vertex_id();
        }

        Graph::from_consistent_vertices(vertices)
    }
}
