/// Canonical-key ordered storage of crawlers
use std::collections::HashMap;
use std::io::Write;

use crate::crawler::Crawler;
use crate::error::{Result, SeederError};

/// Crawlers keyed by canonical identifier.
///
/// The map itself is unordered; [`Catalog::sorted_keys`] computes numeric
/// order on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, Crawler>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates a catalog holding only the bootstrap crawler.
    #[must_use = "creates a seeded catalog"]
    pub fn new() -> Self {
        let mut catalog = Self::empty();
        catalog.add(Crawler::bootstrap());
        catalog
    }

    /// Creates a catalog with no entries at all.
    #[inline]
    #[must_use = "creates an empty catalog"]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Stores `crawler` under its canonical key, replacing any previous entry.
    ///
    /// Returns the replaced entry, if there was one.
    pub fn add(&mut self, crawler: Crawler) -> Option<Crawler> {
        self.entries.insert(crawler.key(), crawler)
    }

    /// Looks up a crawler by canonical key.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Crawler> {
        self.entries.get(key)
    }

    /// Number of distinct crawlers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no crawlers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys in ascending numeric order.
    ///
    /// Every key is parsed as a base-10 `i64` before any ordering happens.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::InvalidKeys`] listing every key that does not
    /// parse; no partial ordering is returned in that case.
    pub fn sorted_keys(&self) -> Result<Vec<String>> {
        let mut parsed = Vec::with_capacity(self.entries.len());
        let mut invalid = Vec::new();

        for key in self.entries.keys() {
            match key.parse::<i64>() {
                Ok(value) => parsed.push((value, key.clone())),
                Err(_) => invalid.push(key.clone()),
            }
        }

        if !invalid.is_empty() {
            invalid.sort();
            return Err(SeederError::InvalidKeys { keys: invalid });
        }

        parsed.sort_unstable_by_key(|(value, _)| *value);
        Ok(parsed.into_iter().map(|(_, key)| key).collect())
    }

    /// Crawlers in ascending numeric key order.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::sorted_keys`].
    pub fn sorted(&self) -> Result<Vec<&Crawler>> {
        Ok(self
            .sorted_keys()?
            .iter()
            .filter_map(|key| self.entries.get(key))
            .collect())
    }

    /// Writes every crawler as one CSV line, in numeric order.
    ///
    /// Ordering is computed before the first byte is written, so an
    /// unsortable catalog leaves the writer untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be sorted or the writer fails.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        for crawler in self.sorted()? {
            log::debug!("Found crawler: ID={}, Name={}", crawler.id, crawler.name);
            writer.write_all(&crawler.marshal_csv())?;
        }
        Ok(())
    }
}
