//! CLI-specific error types and mappings.
//!
//! This module maps `CoreError` to exit codes and user-facing messages.

use geoalbum_core::{CoreError, ProvisioningError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Clone, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The referenced pin or photo does not exist.
    #[error("{0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// The remote photo search failed.
    #[error("{0}")]
    Fetch(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions (see sysexits.h).
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::NotFound(_) => 65, // EX_DATAERR
            CliError::Fetch(_) => 69,    // EX_UNAVAILABLE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
            CliError::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }

    /// Classify an error bubbled up from a handler.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(core) = err.downcast_ref::<CoreError>() {
            return core.into();
        }
        if let Some(cli) = err.downcast_ref::<CliError>() {
            return cli.clone();
        }
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            return CliError::Io(io.to_string());
        }
        CliError::Core(format!("{err:#}"))
    }
}

impl From<&RepositoryError> for CliError {
    fn from(err: &RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => CliError::NotFound(err.to_string()),
            _ => CliError::Database(err.to_string()),
        }
    }
}

impl From<&CoreError> for CliError {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Provisioning(ProvisioningError::Repository(repo_err)) => repo_err.into(),
            CoreError::Provisioning(e @ ProvisioningError::SearchFailed { .. }) => {
                CliError::Fetch(e.to_string())
            }
            CoreError::Provisioning(e @ ProvisioningError::InvalidCoordinate(_)) => {
                CliError::Arguments(e.to_string())
            }
            CoreError::Path(e) => CliError::Config(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
