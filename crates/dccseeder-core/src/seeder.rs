/// A full scan session over one or more books
use std::io::Write;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::matcher::extract;
use crate::resolver::{ConflictResolver, ResolutionStats};

/// Owns the catalog for one run and routes extracted crawlers through the
/// conflict resolver.
///
/// Lines must be fed in file-then-line order; later mentions only replace
/// earlier ones under `force`.
#[derive(Debug, Clone)]
pub struct Seeder {
    catalog: Catalog,
    resolver: ConflictResolver,
    stats: ResolutionStats,
}

impl Seeder {
    /// Starts a session with a bootstrap-seeded catalog.
    #[must_use = "creates a scan session"]
    pub fn new(force: bool) -> Self {
        Self::with_catalog(Catalog::new(), force)
    }

    /// Starts a session on an existing catalog.
    #[must_use = "creates a scan session"]
    pub fn with_catalog(catalog: Catalog, force: bool) -> Self {
        Self {
            catalog,
            resolver: ConflictResolver::new(force),
            stats: ResolutionStats::default(),
        }
    }

    /// Scan `lines` and resolve every crawler found, returning the counts for
    /// this batch alone.
    pub fn ingest_lines<I, S>(&mut self, lines: I) -> ResolutionStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut batch = ResolutionStats::default();
        for crawler in extract(lines) {
            let resolution = self.resolver.resolve(&mut self.catalog, crawler);
            batch.record(&resolution);
        }
        self.stats += batch;
        batch
    }

    /// Counts accumulated over the whole session.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> ResolutionStats {
        self.stats
    }

    /// The catalog built so far.
    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Write the catalog as CSV in numeric id order.
    ///
    /// # Errors
    ///
    /// Returns an error, before writing anything, if any key is not numeric;
    /// or if the writer fails.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.catalog.write_csv(writer)
    }
}
