use thiserror::Error;

use crate::model::NodeId;

/// Unified result type for the frame layout crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised at the document boundary. The solver itself never fails.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("shape `{0}` not found")]
    ShapeNotFound(NodeId),
    #[error("shape stored under `{key}` declares id `{id}`")]
    IdMismatch { key: NodeId, id: NodeId },
    #[error("shape `{0}` is reachable more than once from the root")]
    Cycle(NodeId),
    #[error("invalid layout descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
