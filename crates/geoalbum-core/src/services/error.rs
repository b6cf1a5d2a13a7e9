//! Service-level errors for photo provisioning.

use thiserror::Error;

use crate::domain::Coordinate;
use crate::ports::{RepositoryError, SearchOutcome};

/// Errors raised while provisioning photos for a location.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// The remote search did not succeed. Nothing was written.
    #[error("Photo search failed ({outcome}): {detail}")]
    SearchFailed {
        outcome: SearchOutcome,
        detail: String,
    },

    /// The coordinate is outside the valid latitude/longitude ranges.
    #[error("Invalid coordinate {0}")]
    InvalidCoordinate(Coordinate),

    /// Storage failed, or the location disappeared while a search was in flight.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ProvisioningError {
    /// Whether this error came from the remote search.
    #[must_use]
    pub const fn is_search_failure(&self) -> bool {
        matches!(self, Self::SearchFailed { .. })
    }
}
