use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{error::Result, *};

/// Vertices grouped by their degree: `degree -> ids (ascending)`.
/// Iterating the map yields the classes in ascending degree order.
pub type DegreeClasses = BTreeMap<NumVertices, Vec<VertexId>>;

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphVertexOrder {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns an iterator over V in no particular order
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_;

    /// Returns all vertex ids in ascending order
    fn sorted_vertices(&self) -> Vec<VertexId> {
        self.vertices().sorted_unstable().collect()
    }

    /// Returns *true* if a vertex with id `u` exists
    fn has_vertex(&self, u: VertexId) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & degrees
pub trait AdjacencyList: GraphVertexOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u` is not a vertex of the graph **
    fn neighbors_of(&self, u: VertexId) -> impl Iterator<Item = VertexId> + '_;

    /// Returns the neighborhood of a given vertex in ascending order.
    /// ** Panics if `u` is not a vertex of the graph **
    fn sorted_neighbors_of(&self, u: VertexId) -> Vec<VertexId> {
        self.neighbors_of(u).sorted_unstable().collect()
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u` is not a vertex of the graph **
    fn degree_of(&self, u: VertexId) -> NumVertices;

    /// Returns an iterator over all degrees (in the order of [`GraphVertexOrder::vertices`])
    fn degrees(&self) -> impl Iterator<Item = NumVertices> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumVertices {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the degree sequence sorted in descending order.
    /// If `with_duplicates` is *false*, every degree value occurs only once.
    fn degrees_descending(&self, with_duplicates: bool) -> Vec<NumVertices> {
        let mut degrees = self.degrees().collect_vec();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        if !with_duplicates {
            degrees.dedup();
        }
        degrees
    }

    /// Partitions the vertices by degree
    fn degree_classes(&self) -> DegreeClasses {
        let mut classes = DegreeClasses::new();
        for u in self.vertices() {
            classes.entry(self.degree_of(u)).or_default().push(u);
        }
        for class in classes.values_mut() {
            class.sort_unstable();
        }
        classes
    }

    /// Returns all edges `(u, v)` with `u < v` in ascending order
    fn ordered_edges(&self) -> Vec<Edge> {
        self.vertices()
            .flat_map(|u| {
                self.neighbors_of(u)
                    .filter(move |&v| u < v)
                    .map(move |v| Edge(u, v))
            })
            .sorted_unstable()
            .collect()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphVertexOrder {
    /// Returns *true* if the edge {u,v} exists in the graph.
    /// Returns *false* if either endpoint is not a vertex of the graph.
    fn has_edge(&self, u: VertexId, v: VertexId) -> bool;
}

/// Provides functions to insert/delete edges.
/// Both endpoints are always updated together so that adjacency stays symmetric.
pub trait GraphEdgeEditing {
    /// Adds the edge {u,v} to the graph.
    /// ** Panics if `u == v`, any endpoint does not exist, or the edge was already present **
    fn add_edge(&mut self, u: VertexId, v: VertexId) {
        assert!(!self.try_add_edge(u, v), "edge ({u},{v}) already present");
    }

    /// Adds the edge {u,v} to the graph.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u == v` or any endpoint does not exist **
    fn try_add_edge(&mut self, u: VertexId, v: VertexId) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes the edge {u,v} from the graph.
    /// ** Panics if the edge is not present **
    fn remove_edge(&mut self, u: VertexId, v: VertexId) {
        assert!(self.try_remove_edge(u, v), "edge ({u},{v}) not present");
    }

    /// Removes the edge {u,v} from the graph.
    /// If the edge was removed, returns *true* and *false* otherwise.
    fn try_remove_edge(&mut self, u: VertexId, v: VertexId) -> bool;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing {
    /// Creates a new vertex at `position` and returns its freshly assigned id
    /// ** Panics if all ids below [`INVALID_VERTEX`] have been handed out **
    fn add_vertex(&mut self, position: Position) -> VertexId;

    /// Inserts a detached vertex.
    /// If `vertex` carries [`INVALID_VERTEX`] as id, a fresh id is assigned; otherwise its id is kept.
    /// Neighbors listed in `vertex` are linked symmetrically if they exist in the graph and dropped otherwise.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateVertex`] if the id is already taken and
    /// [`Error::IdsExhausted`] if a fresh id is needed but none is left.
    fn try_insert_vertex(&mut self, vertex: Vertex) -> Result<VertexId>;

    /// Removes a vertex and all its incident edges.
    /// Returns the removed vertex (with its neighborhood as it was in the graph) or `None` if it did not exist.
    fn remove_vertex(&mut self, u: VertexId) -> Option<Vertex>;
}

/// A super trait for creating a graph from scratch from a number of vertices and a set of edges
pub trait GraphFromScratch {
    /// Create a graph with vertices `0..n` and the given edges
    fn from_edges(n: NumVertices, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}
