//! Domain entities: flat records as they come out of the store

use std::fmt;

/// Flat category row with an optional link to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique, store-assigned identifier
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Parent identifier, `None` for root categories
    pub parent_id: Option<i64>,
}

impl Record {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        parent_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            parent_id,
        }
    }

    /// Root shorthand.
    pub fn root(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(id, name, description, None)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent_id {
            Some(parent) => write!(f, "#{} {} (parent #{})", self.id, self.name, parent),
            None => write!(f, "#{} {}", self.id, self.name),
        }
    }
}

/// Record fetched in eager mode: the store has attached the ids of its children.
///
/// The attached ids are payload only. Assembly does not trust them and
/// re-derives children by scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRecord {
    pub record: Record,
    pub child_ids: Vec<i64>,
}

impl JoinedRecord {
    pub fn new(record: Record, child_ids: Vec<i64>) -> Self {
        Self { record, child_ids }
    }
}

impl From<Record> for JoinedRecord {
    fn from(record: Record) -> Self {
        Self::new(record, Vec::new())
    }
}

/// Record waiting to be inserted; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub description: String,
    pub parent_id: Option<i64>,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parent_id: Option<i64>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parent_id,
        }
    }

    pub fn with_id(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            description: self.description,
            parent_id: self.parent_id,
        }
    }
}
