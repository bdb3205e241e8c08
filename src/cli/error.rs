//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl From<InfraError> for CliError {
    fn from(e: InfraError) -> Self {
        CliError::Application(ApplicationError::Store(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(ApplicationError::Domain(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Store(InfraError::Io { .. }) => crate::exitcode::IOERR,
                ApplicationError::Store(InfraError::Sqlite { .. }) => crate::exitcode::UNAVAILABLE,
                ApplicationError::Store(InfraError::Poisoned) => crate::exitcode::SOFTWARE,
            },
        }
    }
}
