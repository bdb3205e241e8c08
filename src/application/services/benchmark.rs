//! Strategy benchmark service
//!
//! Runs the assembly strategies against the record store under the timing
//! harness. Every run performs its own fetch, so the measured time covers
//! store access plus assembly.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::{measure, ApplicationResult, Timed};
use crate::domain::{build_by_scan, build_indexed, Forest, Strategy};
use crate::infrastructure::traits::RecordStore;

/// Results of running both strategies once, in sequence.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub scan: Timed<Forest>,
    pub indexed: Timed<Forest>,
}

impl Comparison {
    /// Both forests hold the same parent/child edges, ignoring order.
    pub fn same_relationships(&self) -> bool {
        self.scan.value.relationships() == self.indexed.value.relationships()
    }

    pub fn get(&self, strategy: Strategy) -> &Timed<Forest> {
        match strategy {
            Strategy::Scan => &self.scan,
            Strategy::Indexed => &self.indexed,
        }
    }
}

/// Service comparing tree assembly strategies.
pub struct BenchmarkService {
    store: Arc<dyn RecordStore>,
}

impl BenchmarkService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fetch and assemble with one strategy, timed.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, strategy: Strategy) -> ApplicationResult<Timed<Forest>> {
        let timed = measure(|| self.assemble(strategy))?;
        info!(
            %strategy,
            elapsed_ms = timed.elapsed_ms(),
            nodes = timed.value.node_count(),
            "forest built"
        );
        Ok(timed)
    }

    /// Scan strategy first, then indexed; never concurrently.
    #[instrument(level = "debug", skip(self))]
    pub fn compare(&self) -> ApplicationResult<Comparison> {
        let scan = self.build(Strategy::Scan)?;
        let indexed = self.build(Strategy::Indexed)?;
        Ok(Comparison { scan, indexed })
    }

    fn assemble(&self, strategy: Strategy) -> ApplicationResult<Forest> {
        let forest = match strategy {
            Strategy::Scan => {
                let records = self.store.fetch_all_joined()?;
                build_by_scan(&records)
            }
            Strategy::Indexed => {
                let records = self.store.fetch_all_projected()?;
                build_indexed(&records)
            }
        };
        Ok(forest)
    }
}
