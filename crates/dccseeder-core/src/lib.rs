//! # dccseeder-core
//!
//! Crawler extraction and cataloging for dccseeder.
//!
//! Book text is scanned line by line for crawler references of the form
//! `Crawler #4,122. “Carl.”`. Every reference becomes a [`Crawler`], is
//! deduplicated by its numeric identifier, and the resulting [`Catalog`] is
//! written out as CSV in ascending numeric order.
//!
//! ## Quick Start
//!
//! ```rust
//! use dccseeder_core::Seeder;
//!
//! let mut seeder = Seeder::new(false);
//! seeder.ingest_lines(["<p>Crawler #12. “Donut.”</p>"]);
//!
//! let mut out = Vec::new();
//! seeder.write_csv(&mut out)?;
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\"12\",\"Donut\"\n\"4,122\",\"Carl\"\n"
//! );
//! # Ok::<(), dccseeder_core::SeederError>(())
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Item | Role |
//! |-------|------|------|
//! | Normalize | [`normalize_id`] | `" 4,122 "` → `"4122"` |
//! | Match | [`extract`] | lines → `Crawler` candidates |
//! | Resolve | [`ConflictResolver`] | insert / skip / overwrite |
//! | Store | [`Catalog`] | canonical key → `Crawler`, numeric ordering |
//! | Serialize | [`Crawler::to_csv`] | `"<id>","<name>"\n` |
//!
//! ## Conflicts
//!
//! Two mentions with the same canonical key but a different name (or a
//! differently formatted id) conflict. The first one wins unless the resolver
//! was built with `force`, in which case the later mention replaces it.

/// Canonical-key ordered storage of crawlers
pub mod catalog;
/// The crawler entity and identifier normalization
pub mod crawler;
/// Error types for cataloging
pub mod error;
/// Crawler reference pattern matching
pub mod matcher;
/// Insert / skip / overwrite policy for extracted crawlers
pub mod resolver;
/// A full scan session over one or more books
pub mod seeder;

pub use catalog::Catalog;
pub use crawler::{normalize_id, Crawler};
pub use error::{Result, SeederError};
pub use matcher::{extract, extract_line};
pub use resolver::{ConflictResolver, Resolution, ResolutionStats};
pub use seeder::Seeder;
