use fxhash::FxHashMap;
use log::trace;

use super::*;

/// An undirected, simple graph owning its vertices.
///
/// Vertices are stored in a map `id -> Vertex` so that ids stay stable under removal.
/// Every edge is stored at both endpoints; all edits go through [`GraphEdgeEditing`] and
/// [`GraphVertexEditing`] which keep both sides in sync.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: FxHashMap<VertexId, Vertex>,
    num_edges: NumEdges,
    /// Smallest id that was never handed out; ids below it are not recycled
    next_id: VertexId,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the minimal default graph: two connected vertices
    pub fn with_default_edge() -> Self {
        let mut graph = Self::new();
        let u = graph.add_vertex(Position::new(-50.0, 0.0));
        let v = graph.add_vertex(Position::new(50.0, 0.0));
        graph.add_edge(u, v);
        graph
    }

    /// Assembles a graph from already consistent vertices (used for induced subgraphs).
    /// Neighborhoods must only reference vertices contained in `vertices` and be symmetric.
    pub(crate) fn from_consistent_vertices(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        let vertices: FxHashMap<VertexId, Vertex> =
            vertices.into_iter().map(|v| (v.id, v)).collect();
        let degree_sum: usize = vertices.values().map(|v| v.neighbors.len()).sum();
        debug_assert!(degree_sum % 2 == 0);

        let next_id = vertices.keys().max().map_or(0, |&id| id.saturating_add(1));
        Self {
            vertices,
            num_edges: (degree_sum / 2) as NumEdges,
            next_id,
        }
    }

    /// Returns the vertex with id `u` if it exists
    pub fn vertex(&self, u: VertexId) -> Option<&Vertex> {
        self.vertices.get(&u)
    }

    /// Returns the vertex with id `u` for editing its presentation attributes
    pub fn vertex_mut(&mut self, u: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(&u)
    }

    /// Iterator over all vertices in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// The id the next vertex without a pre-specified id receives
    pub fn next_vertex_id(&self) -> VertexId {
        self.next_id
    }

    fn expect_vertex(&self, u: VertexId) -> &Vertex {
        self.vertices
            .get(&u)
            .unwrap_or_else(|| panic!("vertex {u} does not exist"))
    }

    fn expect_vertex_mut(&mut self, u: VertexId) -> &mut Vertex {
        self.vertices
            .get_mut(&u)
            .unwrap_or_else(|| panic!("vertex {u} does not exist"))
    }
}

impl GraphVertexOrder for Graph {
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len() as NumVertices
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    fn has_vertex(&self, u: VertexId) -> bool {
        self.vertices.contains_key(&u)
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.expect_vertex(u).neighbors()
    }

    fn degree_of(&self, u: VertexId) -> NumVertices {
        self.expect_vertex(u).degree()
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.vertices
            .get(&u)
            .is_some_and(|vertex| vertex.is_adjacent_to(v))
    }
}

impl GraphEdgeEditing for Graph {
    fn try_add_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        assert_ne!(u, v, "self-loops are not supported");
        assert!(self.has_vertex(v), "vertex {v} does not exist");

        if self.expect_vertex_mut(u).neighbors.insert(v) {
            assert!(self.expect_vertex_mut(v).neighbors.insert(u));
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let removed = self
            .vertices
            .get_mut(&u)
            .is_some_and(|vertex| vertex.neighbors.remove(&v));

        if removed {
            assert!(self.expect_vertex_mut(v).neighbors.remove(&u));
            self.num_edges -= 1;
        }
        removed
    }
}

impl GraphVertexEditing for Graph {
    fn add_vertex(&mut self, position: Position) -> VertexId {
        let id = self.next_id;
        assert!(id != INVALID_VERTEX, "all vertex ids have been handed out");
        self.vertices.insert(id, Vertex::with_id(id, position));
        self.next_id = id + 1;
        trace!("added vertex {id}");
        id
    }

    fn try_insert_vertex(&mut self, mut vertex: Vertex) -> Result<VertexId> {
        if !vertex.is_attached() {
            if self.next_id == INVALID_VERTEX {
                return Err(Error::IdsExhausted);
            }
            vertex.id = self.next_id;
        } else if self.has_vertex(vertex.id) {
            return Err(Error::DuplicateVertex(vertex.id));
        }

        let id = vertex.id;
        let requested = std::mem::take(&mut vertex.neighbors);
        self.vertices.insert(id, vertex);
        self.next_id = self.next_id.max(id + 1);

        for v in requested {
            if v != id && self.has_vertex(v) {
                self.try_add_edge(id, v);
            }
        }

        trace!("inserted vertex {id}");
        Ok(id)
    }

    fn remove_vertex(&mut self, u: VertexId) -> Option<Vertex> {
        let vertex = self.vertices.remove(&u)?;
        for v in vertex.neighbors() {
            self.expect_vertex_mut(v).neighbors.remove(&u);
        }
        self.num_edges -= vertex.degree() as NumEdges;

        trace!("removed vertex {u} with {} incident edges", vertex.degree());
        Some(vertex)
    }
}

impl GraphFromScratch for Graph {
    fn from_edges(n: NumVertices, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new();
        for _ in 0..n {
            graph.add_vertex(Position::default());
        }
        graph.add_edges(edges);
        graph
    }
}
