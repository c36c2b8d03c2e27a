//! # dccseeder-ebook
//!
//! EPUB section reader for dccseeder.
//!
//! Opens an EPUB archive and yields its spine items in reading order, each as
//! a [`Section`] whose raw XHTML can be walked line by line. Nothing is
//! stripped or reflowed: scanners see the markup exactly as the book ships it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dccseeder_ebook::parse_epub;
//!
//! let book = parse_epub("dungeon_crawler_carl.epub")?;
//! println!("Title: {}", book.display_title());
//!
//! for section in &book.sections {
//!     println!("{} ({} lines)", section.label(), section.lines().count());
//! }
//! # Ok::<(), dccseeder_ebook::EbookError>(())
//! ```
//!
//! ## Unreadable Sections
//!
//! [`parse_epub`] fails on the first spine item it cannot read.
//! [`parse_epub_lossy`] keeps going and hands back the failures:
//!
//! ```rust,no_run
//! use dccseeder_ebook::parse_epub_lossy;
//!
//! let (book, skipped) = parse_epub_lossy("damaged.epub")?;
//! for err in &skipped {
//!     eprintln!("skipped: {err}");
//! }
//! println!("{} readable sections", book.sections.len());
//! # Ok::<(), dccseeder_ebook::EbookError>(())
//! ```
//!
//! ## Types
//!
//! | Type | Field | Description |
//! |------|-------|-------------|
//! | `ParsedEbook` | `title` | `dc:title` from the package, if present |
//! | `ParsedEbook` | `sections` | Spine items in reading order |
//! | `Section` | `href` | Path inside the archive |
//! | `Section` | `spine_order` | Reading order position |
//! | `Section` | `title` | First `h1`/`h2`/`title` text |
//! | `Section` | `content` | Raw XHTML |

/// EPUB format reader
pub mod epub;
/// Error types for e-book reading
pub mod error;
/// Common types for parsed e-book content
pub mod types;

// Re-export commonly used items
pub use epub::{parse_epub, parse_epub_lossy};
pub use error::{EbookError, Result};
pub use types::{ParsedEbook, Section};
