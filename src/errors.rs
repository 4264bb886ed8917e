//! Error types for daemon operations

use thiserror::Error;

use crate::domain::RangeError;
use crate::index::IndexError;
use crate::reconcile::SubnetError;
use crate::resolver::ResolveError;

/// Errors that can occur in daemon operations
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Subnet range failed to parse
    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    /// Subnet range failed to parse, scoped to the subnet
    #[error("Subnet error: {0}")]
    Subnet(#[from] SubnetError),

    /// Reverse index backend error
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// Address ownership could not be resolved
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic daemon error
    #[error("Daemon error: {0}")]
    Generic(String),
}

/// Result type for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;

impl From<serde_json::Error> for DaemonError {
    fn from(err: serde_json::Error) -> Self {
        DaemonError::Serialization(err.to_string())
    }
}
