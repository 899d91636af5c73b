use thiserror::Error;

/// Errors surfaced by the key encoding engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum T9Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Expansion would grow the candidate set past the configured ceiling.
    #[error("candidate ceiling exceeded: {required} candidates required, limit is {limit}")]
    CapacityExceeded { limit: usize, required: usize },

    #[error("config io error: {path} - {reason}")]
    ConfigIo { path: String, reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),
}

pub type Result<T> = std::result::Result<T, T9Error>;
