use autopost_catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("a generation is already in progress")]
    AlreadyGenerating,

    /// The catalog could not be read. Any previously published batch is kept.
    #[error("catalog source unavailable: {0}")]
    SourceUnavailable(#[source] CatalogError),

    #[error("generation superseded by a newer request")]
    Superseded,

    #[error("generation cancelled")]
    Cancelled,

    #[error("no batch has been generated yet")]
    NoBatch,

    #[error("post index {index} out of range for a batch of {len}")]
    PostIndexOutOfRange { index: usize, len: usize },

    #[error("generation task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
