//! Error types for e-book reading

/// Result type alias for e-book operations
pub type Result<T> = std::result::Result<T, EbookError>;

/// Errors that can occur while reading an e-book
#[derive(Debug, thiserror::Error)]
pub enum EbookError {
    /// The archive could not be opened or its package document is invalid
    #[error("Failed to open EPUB {path}: {reason}")]
    Open {
        /// Path of the book
        path: String,
        /// Underlying cause as reported by the EPUB reader
        reason: String,
    },

    /// A spine item could not be read
    #[error("Failed to read section {href} (spine #{spine_order}) of {path}")]
    SectionUnreadable {
        /// Path of the book
        path: String,
        /// Section path inside the archive
        href: String,
        /// Position in reading order
        spine_order: usize,
    },
}

