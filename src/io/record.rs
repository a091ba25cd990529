use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::*;

fn default_color() -> String {
    Vertex::DEFAULT_COLOR.to_string()
}

/// Serializable form of a single vertex.
///
/// `neighbors` only lists neighbors with an id *larger* than `id`, so that every edge
/// of the graph is recorded exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: VertexId,
    #[serde(default)]
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub neighbors: Vec<VertexId>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub line_style: LineStyle,
}

/// Serializable form of a whole graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphRecord {
    pub vertices: Vec<VertexRecord>,
}

impl Graph {
    /// Creates the record of this graph; vertices and neighbor lists are sorted by id
    pub fn to_record(&self) -> GraphRecord {
        let vertices = self
            .sorted_vertices()
            .into_iter()
            .filter_map(|u| self.vertex(u))
            .map(|vertex| {
                let position = vertex.position();
                VertexRecord {
                    id: vertex.id(),
                    label: vertex.label().to_string(),
                    x: position.x,
                    y: position.y,
                    neighbors: vertex
                        .sorted_neighbors()
                        .into_iter()
                        .filter(|&v| v > vertex.id())
                        .collect(),
                    color: vertex.color().to_string(),
                    line_style: vertex.line_style(),
                }
            })
            .collect();

        GraphRecord { vertices }
    }

    /// Rebuilds a graph from its record, restoring symmetric neighborhoods.
    /// Neighbors listed more than once are added once.
    ///
    /// # Errors
    /// - [`Error::ReservedId`] if a record uses [`INVALID_VERTEX`] as id,
    /// - [`Error::DuplicateVertex`] if two records share an id,
    /// - [`Error::SelfLoop`] if a vertex lists itself,
    /// - [`Error::BackwardNeighbor`] if a vertex lists a neighbor with a smaller id,
    /// - [`Error::UnknownNeighbor`] if a listed neighbor has no record.
    pub fn try_from_record(record: &GraphRecord) -> Result<Self> {
        let mut ids = FxHashSet::default();
        for vertex in &record.vertices {
            if vertex.id == INVALID_VERTEX {
                return Err(Error::ReservedId(vertex.id));
            }
            if !ids.insert(vertex.id) {
                return Err(Error::DuplicateVertex(vertex.id));
            }
        }

        for vertex in &record.vertices {
            for &neighbor in &vertex.neighbors {
                if neighbor == vertex.id {
                    return Err(Error::SelfLoop(vertex.id));
                }
                if neighbor < vertex.id {
                    return Err(Error::BackwardNeighbor {
                        vertex: vertex.id,
                        neighbor,
                    });
                }
                if !ids.contains(&neighbor) {
                    return Err(Error::UnknownNeighbor {
                        vertex: vertex.id,
                        neighbor,
                    });
                }
            }
        }

        let mut graph = Graph::new();
        for vertex in &record.vertices {
            graph.try_insert_vertex(
                Vertex::with_id(vertex.id, Position::new(vertex.x, vertex.y))
                    .labelled(vertex.label.as_str())
                    .styled(vertex.color.as_str(), vertex.line_style),
            )?;
        }

        for vertex in &record.vertices {
            for &neighbor in &vertex.neighbors {
                graph.try_add_edge(vertex.id, neighbor);
            }
        }

        Ok(graph)
    }
}
