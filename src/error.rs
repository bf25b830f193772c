use crate::validate::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The submitted form was rejected; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no record with id {0}")]
    NotFound(u32),

    /// The largest id or order number in use leaves no successor.
    #[error("no {0} left to assign")]
    Exhausted(&'static str),

    #[error("persistence failed: {0}")]
    Persistence(#[from] SlotError),

    #[error("malformed stored records: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid slot key: {0:?}")]
    InvalidKey(String),
}
