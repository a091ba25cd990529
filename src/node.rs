/*!
# Vertex Representation

Vertices are identified by a `VertexId = u32` which is unique within its owning [`Graph`](crate::repr::Graph).
Ids are *stable*: they are handed out by the graph on insertion and are never renumbered,
so an id held by a caller keeps referring to the same vertex until that vertex is removed.

Apart from its id and its neighborhood, a vertex carries presentation attributes
(position, label, color, line style) that are irrelevant to the algorithms but are
preserved whenever a vertex is cloned into a subgraph or written to a record.
*/

use fxhash::FxHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Vertex ids can be any unsigned integer from `0` to `VertexId::MAX - 1`
pub type VertexId = u32;

/// Id-Value that is considered invalid; vertices carrying it have not been inserted into a graph yet
pub const INVALID_VERTEX: VertexId = VertexId::MAX;

/// There can be at most `2^32 - 1` vertices in a graph, so degrees and counts also fit into `u32`
pub type NumVertices = u32;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// How the outline of a vertex is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// A vertex of an undirected, simple graph.
///
/// The neighborhood is only ever mutated by the owning graph which updates both endpoints
/// of an edge together. A vertex outside of a graph (created via [`Vertex::at`]) has the id
/// [`INVALID_VERTEX`] and no neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub(crate) id: VertexId,
    pub(crate) neighbors: FxHashSet<VertexId>,
    position: Position,
    label: String,
    color: String,
    line_style: LineStyle,
}

impl Vertex {
    /// Color assigned to vertices that were not given one explicitly
    pub const DEFAULT_COLOR: &'static str = "black";

    /// Creates a detached vertex placed at `position`.
    /// The owning graph assigns its id on insertion.
    pub fn at(position: Position) -> Self {
        Self::with_id(INVALID_VERTEX, position)
    }

    /// Creates a detached vertex with a pre-specified id
    pub fn with_id(id: VertexId, position: Position) -> Self {
        Self {
            id,
            neighbors: FxHashSet::default(),
            position,
            label: String::new(),
            color: Self::DEFAULT_COLOR.to_string(),
            line_style: LineStyle::default(),
        }
    }

    /// Builder-style setter for the label
    pub fn labelled<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    /// Builder-style setter for color and line style
    pub fn styled<S: Into<String>>(mut self, color: S, line_style: LineStyle) -> Self {
        self.color = color.into();
        self.line_style = line_style;
        self
    }

    /// Returns the id of the vertex ([`INVALID_VERTEX`] if detached)
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns *true* if the vertex belongs to a graph
    pub fn is_attached(&self) -> bool {
        self.id != INVALID_VERTEX
    }

    /// Number of adjacent vertices
    pub fn degree(&self) -> NumVertices {
        self.neighbors.len() as NumVertices
    }

    /// Returns *true* if `other` is adjacent to this vertex
    pub fn is_adjacent_to(&self, other: VertexId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Iterator over the ids of all adjacent vertices (in no particular order)
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors.iter().copied()
    }

    /// Ids of all adjacent vertices in ascending order
    pub fn sorted_neighbors(&self) -> Vec<VertexId> {
        self.neighbors.iter().copied().sorted_unstable().collect()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label<S: Into<String>>(&mut self, label: S) {
        self.label = label.into();
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color<S: Into<String>>(&mut self, color: S) {
        self.color = color.into();
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    pub fn set_line_style(&mut self, line_style: LineStyle) {
        self.line_style = line_style;
    }

    /// Clones the vertex but keeps only those neighbors for which `keep` returns *true*.
    /// This is the building block for induced subgraphs.
    pub(crate) fn clone_restricted<F: Fn(VertexId) -> bool>(&self, keep: F) -> Self {
        Self {
            id: self.id,
            neighbors: self.neighbors.iter().copied().filter(|&v| keep(v)).collect(),
            position: self.position,
            label: self.label.clone(),
            color: self.color.clone(),
            line_style: self.line_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_vertex() {
        let v = Vertex::at(Position::new(1.0, 2.0)).labelled("a");
        assert!(!v.is_attached());
        assert_eq!(v.id(), INVALID_VERTEX);
        assert_eq!(v.degree(), 0);
        assert_eq!(v.label(), "a");
        assert_eq!(v.color(), Vertex::DEFAULT_COLOR);
        assert_eq!(v.line_style(), LineStyle::Solid);
    }

    #[test]
    fn clone_restricted_filters_neighbors() {
        let mut v = Vertex::with_id(0, Position::default()).styled("red", LineStyle::Dashed);
        v.neighbors.extend([1, 2, 3, 4]);

        let w = v.clone_restricted(|u| u % 2 == 0);
        assert_eq!(w.id(), 0);
        assert_eq!(w.sorted_neighbors(), vec![2, 4]);
        assert_eq!(w.color(), "red");
        assert_eq!(w.line_style(), LineStyle::Dashed);
        // original untouched
        assert_eq!(v.degree(), 4);
    }

    #[test]
    fn distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }
}
