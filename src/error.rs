use thiserror::Error;

use crate::node::VertexId;

/// Errors reported by graph editing, pattern search, and record (de)serialization.
///
/// The search itself never fails for well-formed input: the absence of a match is an empty
/// result, not an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pattern graph must be connected but has {components} components")]
    DisconnectedPattern { components: usize },

    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),

    #[error("id {0} is reserved for vertices outside of a graph")]
    ReservedId(VertexId),

    #[error("all vertex ids have been handed out")]
    IdsExhausted,

    #[error("vertex {vertex} lists neighbor {neighbor} which does not exist")]
    UnknownNeighbor { vertex: VertexId, neighbor: VertexId },

    #[error("vertex {0} lists itself as neighbor")]
    SelfLoop(VertexId),

    #[error("vertex {vertex} lists neighbor {neighbor} with a smaller id; edges are stored at their smaller endpoint")]
    BackwardNeighbor { vertex: VertexId, neighbor: VertexId },

    #[error("malformed graph record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
