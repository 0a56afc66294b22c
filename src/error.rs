//! Error types for GSearch
//!
//! Everything here is non-fatal to a running session: the GUI surfaces these
//! as transient status messages and the in-memory recent list stays
//! authoritative.

use thiserror::Error;

/// Main error type for GSearch operations
#[derive(Error, Debug)]
pub enum GsearchError {
    #[error("Failed to read recent searches file: {0}")]
    RecentRead(std::io::Error),

    #[error("Failed to write recent searches file: {0}")]
    RecentWrite(std::io::Error),

    #[error("Recent searches file is malformed: {0}")]
    RecentParse(String),

    #[error("Failed to serialize recent searches: {0}")]
    RecentSerialize(String),

    #[error("Recent entry {index} out of range (list has {len} entries)")]
    InvalidSelection { index: usize, len: usize },

    #[error("Nothing to save: the current criteria produce an empty query")]
    EmptyQuery,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("GUI error: {0}")]
    GuiError(String),
}

/// Result type alias for GSearch operations
pub type Result<T> = std::result::Result<T, GsearchError>;

impl GsearchError {
    /// Check if this error is recoverable (the session keeps its in-memory
    /// state and continues)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GsearchError::GuiError(_))
    }
}
