//! Sample data seeding
//!
//! Writes a seed catalog into the record store one level at a time, so each
//! level can reference the ids the store assigned to the level above.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::ApplicationResult;
use crate::domain::{NewRecord, SeedCategory};
use crate::infrastructure::traits::RecordStore;

/// What a seeding request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Store already held records; nothing written.
    AlreadySeeded { existing: usize },
    /// Catalog written.
    Seeded { inserted: usize, levels: usize },
}

/// Service for populating the record store.
pub struct SeedService {
    store: Arc<dyn RecordStore>,
}

impl SeedService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Seed `catalog` unless the store is already populated.
    ///
    /// With `force`, existing records are removed first.
    #[instrument(level = "debug", skip(self, catalog), fields(roots = catalog.len()))]
    pub fn seed(&self, catalog: &[SeedCategory], force: bool) -> ApplicationResult<SeedOutcome> {
        let existing = self.store.count()?;
        if existing > 0 {
            if !force {
                info!(existing, "store already seeded");
                return Ok(SeedOutcome::AlreadySeeded { existing });
            }
            debug!(existing, "clearing store before reseeding");
            self.store.clear()?;
        }

        let mut inserted = 0;
        let mut levels = 0;
        let mut frontier: Vec<(&SeedCategory, Option<i64>)> =
            catalog.iter().map(|c| (c, None)).collect();

        while !frontier.is_empty() {
            let batch: Vec<NewRecord> = frontier
                .iter()
                .map(|(c, parent)| NewRecord::new(c.name.as_str(), c.description.as_str(), *parent))
                .collect();
            let ids = self.store.insert_batch(&batch)?;
            inserted += ids.len();
            levels += 1;
            debug!(level = levels, records = ids.len(), "seeded level");

            frontier = frontier
                .iter()
                .zip(ids)
                .flat_map(|(&(category, _), id)| {
                    category.children.iter().map(move |c| (c, Some(id)))
                })
                .collect();
        }

        info!(inserted, levels, "store seeded");
        Ok(SeedOutcome::Seeded { inserted, levels })
    }
}
