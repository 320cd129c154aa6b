//! Repository error types.

use crate::domain::StopId;

/// Errors from reading the bus system catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// No stop with the requested identifier
    #[error("stop {0} not found")]
    StopNotFound(StopId),
}
