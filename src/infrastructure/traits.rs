//! Record store boundary trait
//!
//! Abstracts the relational store so services can run against SQLite in
//! production and against an in-memory table in tests.

use std::sync::RwLock;

use crate::domain::{JoinedRecord, NewRecord, Record};
use crate::infrastructure::{InfraError, InfraResult};

/// Source of the flat category table.
///
/// Both fetch methods return a complete snapshot, ordered by id.
pub trait RecordStore: Send + Sync {
    /// All records, each with the ids of its children attached by the store.
    fn fetch_all_joined(&self) -> InfraResult<Vec<JoinedRecord>>;

    /// All records, scalar fields only.
    fn fetch_all_projected(&self) -> InfraResult<Vec<Record>>;

    /// Number of stored records.
    fn count(&self) -> InfraResult<usize>;

    /// Inserts records in one transaction and returns their ids in input order.
    fn insert_batch(&self, records: &[NewRecord]) -> InfraResult<Vec<i64>>;

    /// Removes all records.
    fn clear(&self) -> InfraResult<()>;
}

// ============================================================
// IN-MEMORY IMPLEMENTATION
// ============================================================

/// Vec-backed store. Accepts any records, including dangling parent ids.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with `records`, kept in the given order.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn next_id(records: &[Record]) -> i64 {
        records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}

impl RecordStore for MemoryRecordStore {
    fn fetch_all_joined(&self) -> InfraResult<Vec<JoinedRecord>> {
        let records = self.records.read().map_err(|_| InfraError::Poisoned)?;
        Ok(records
            .iter()
            .map(|r| {
                let child_ids = records
                    .iter()
                    .filter(|c| c.parent_id == Some(r.id))
                    .map(|c| c.id)
                    .collect();
                JoinedRecord::new(r.clone(), child_ids)
            })
            .collect())
    }

    fn fetch_all_projected(&self) -> InfraResult<Vec<Record>> {
        let records = self.records.read().map_err(|_| InfraError::Poisoned)?;
        Ok(records.clone())
    }

    fn count(&self) -> InfraResult<usize> {
        let records = self.records.read().map_err(|_| InfraError::Poisoned)?;
        Ok(records.len())
    }

    fn insert_batch(&self, batch: &[NewRecord]) -> InfraResult<Vec<i64>> {
        let mut records = self.records.write().map_err(|_| InfraError::Poisoned)?;
        let mut ids = Vec::with_capacity(batch.len());
        for new in batch {
            let id = Self::next_id(&records);
            records.push(new.clone().with_id(id));
            ids.push(id);
        }
        Ok(ids)
    }

    fn clear(&self) -> InfraResult<()> {
        self.records
            .write()
            .map_err(|_| InfraError::Poisoned)?
            .clear();
        Ok(())
    }
}
