//! Infrastructure-level errors (store and I/O concerns)

use thiserror::Error;

/// Errors raised at the record store boundary.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("database error: {context}")]
    Sqlite {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("record store lock poisoned")]
    Poisoned,
}

impl InfraError {
    /// Create a database error with context.
    pub fn sqlite(context: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Sqlite {
            context: context.into(),
            source,
        }
    }

    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;

/// Extension trait attaching context to `rusqlite` results.
pub trait SqliteResultExt<T> {
    fn context(self, context: &str) -> InfraResult<T>;
}

impl<T> SqliteResultExt<T> for rusqlite::Result<T> {
    fn context(self, context: &str) -> InfraResult<T> {
        self.map_err(|e| InfraError::sqlite(context, e))
    }
}
