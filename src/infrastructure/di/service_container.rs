//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{BenchmarkService, SeedService};
use crate::config::Settings;
use crate::infrastructure::traits::RecordStore;
use crate::infrastructure::{InfraResult, SqliteRecordStore};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Record store shared by all services
    pub store: Arc<dyn RecordStore>,
}

impl ServiceContainer {
    /// Create a container backed by the SQLite database named in the settings.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let store = SqliteRecordStore::open(&settings.database)?;
        Ok(Self::with_store(settings, Arc::new(store)))
    }

    /// Create a service container with a custom store (for testing).
    pub fn with_store(settings: Settings, store: Arc<dyn RecordStore>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, store }
    }

    pub fn benchmark_service(&self) -> BenchmarkService {
        BenchmarkService::new(Arc::clone(&self.store))
    }

    pub fn seed_service(&self) -> SeedService {
        SeedService::new(Arc::clone(&self.store))
    }
}
