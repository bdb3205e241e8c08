//! Infrastructure layer: record store implementations and DI container
//!
//! This layer implements the store boundary trait and wires up services.

pub mod di;
pub mod error;
pub mod sqlite;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use sqlite::SqliteRecordStore;
pub use traits::{MemoryRecordStore, RecordStore};
