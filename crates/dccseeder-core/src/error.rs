/// Error types for cataloging
use std::io;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, SeederError>;

/// Errors that can occur while ordering or writing a catalog
#[derive(Debug, thiserror::Error)]
pub enum SeederError {
    /// One or more canonical keys are not base-10 integers
    #[error("Cannot sort crawlers numerically, invalid keys: {keys:?}")]
    InvalidKeys {
        /// Every offending key, in lexical order
        keys: Vec<String>,
    },

    /// Writing to the output sink failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
