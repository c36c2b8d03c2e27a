/// Insert / skip / overwrite policy for extracted crawlers
use std::ops::AddAssign;

use crate::catalog::Catalog;
use crate::crawler::Crawler;

/// What happened to one extracted crawler
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// First sighting of this key
    Inserted,
    /// Identical to the stored entry, nothing changed
    Duplicate,
    /// Differed from the stored entry and replaced it (force only)
    Overwritten {
        /// The entry that was replaced
        previous: Crawler,
    },
    /// Differed from the stored entry and was dropped
    Conflict {
        /// The entry that was kept
        existing: Crawler,
    },
}

/// Running counts of resolutions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResolutionStats {
    /// New keys added to the catalog
    pub inserted: usize,
    /// Identical repeat mentions
    pub duplicates: usize,
    /// Entries replaced under force
    pub overwritten: usize,
    /// Differing mentions that were not applied
    pub conflicts: usize,
}

impl ResolutionStats {
    /// Count one resolution.
    pub fn record(&mut self, resolution: &Resolution) {
        match resolution {
            Resolution::Inserted => self.inserted += 1,
            Resolution::Duplicate => self.duplicates += 1,
            Resolution::Overwritten { .. } => self.overwritten += 1,
            Resolution::Conflict { .. } => self.conflicts += 1,
        }
    }

    /// Total number of extracted crawlers seen.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.inserted + self.duplicates + self.overwritten + self.conflicts
    }
}

impl AddAssign for ResolutionStats {
    fn add_assign(&mut self, rhs: Self) {
        self.inserted += rhs.inserted;
        self.duplicates += rhs.duplicates;
        self.overwritten += rhs.overwritten;
        self.conflicts += rhs.conflicts;
    }
}

/// Decides whether an extracted crawler enters the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConflictResolver {
    force: bool,
}

impl ConflictResolver {
    /// Creates a resolver; with `force`, later differing mentions win.
    #[inline]
    #[must_use = "creates a resolver"]
    pub const fn new(force: bool) -> Self {
        Self { force }
    }

    /// Apply `crawler` to `catalog` and report what happened.
    pub fn resolve(&self, catalog: &mut Catalog, crawler: Crawler) -> Resolution {
        let Some(existing) = catalog.get(&crawler.key()) else {
            catalog.add(crawler);
            return Resolution::Inserted;
        };

        if *existing == crawler {
            log::debug!("Duplicate crawler mention found: {crawler}, skipping");
            return Resolution::Duplicate;
        }

        if !self.force {
            log::warn!(
                "Duplicate crawler # found: {crawler} will NOT overwrite {:?}",
                existing.name
            );
            log::warn!("Use --force if you wish to overwrite existing crawlers");
            return Resolution::Conflict {
                existing: existing.clone(),
            };
        }

        log::info!(
            "Duplicate crawler # found: {crawler} force overwrites {:?}",
            existing.name
        );
        let previous = existing.clone();
        catalog.add(crawler);
        Resolution::Overwritten { previous }
    }
}
