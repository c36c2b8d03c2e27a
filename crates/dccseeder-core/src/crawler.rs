/// The crawler entity and identifier normalization
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonicalize a raw crawler identifier into its catalog key.
///
/// Surrounding whitespace is trimmed and every grouping comma removed; nothing
/// else is touched, so a malformed identifier yields a key that later fails
/// numeric sorting.
///
/// ```
/// use dccseeder_core::normalize_id;
///
/// assert_eq!(normalize_id(" 4,122 "), "4122");
/// assert_eq!(normalize_id("1,000,000"), "1000000");
/// ```
#[inline]
#[must_use = "returns the canonical key"]
pub fn normalize_id(id: &str) -> String {
    id.trim().replace(',', "")
}

/// A numbered, named crawler reference found in book text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crawler {
    /// Identifier exactly as written in the book, e.g. `"4,122"`
    pub id: String,

    /// Display name, trimmed
    pub name: String,
}

impl Crawler {
    /// Creates a crawler from its raw id and name.
    #[inline]
    #[must_use = "creates a crawler"]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The bootstrap entry every catalog starts with.
    #[must_use = "creates the bootstrap crawler"]
    pub fn bootstrap() -> Self {
        Self::new("4,122", "Carl")
    }

    /// Canonical catalog key, see [`normalize_id`].
    #[inline]
    #[must_use = "returns the canonical key"]
    pub fn key(&self) -> String {
        normalize_id(&self.id)
    }

    /// One CSV line: both fields double-quoted verbatim, newline terminated.
    ///
    /// Embedded quotes and commas are not escaped.
    #[must_use = "returns the CSV line"]
    pub fn to_csv(&self) -> String {
        format!("\"{}\",\"{}\"\n", self.id, self.name)
    }

    /// [`Crawler::to_csv`] as bytes, ready for a writer.
    #[inline]
    #[must_use = "returns the CSV line bytes"]
    pub fn marshal_csv(&self) -> Vec<u8> {
        self.to_csv().into_bytes()
    }
}

impl fmt::Display for Crawler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crawler #{} {:?}", self.id, self.name)
    }
}
