//! Error types for cycle operations.

use thiserror::Error;

use crate::board::{FootprintId, InstanceId};
use crate::catalog::CatalogError;

/// Result type for cycle operations.
pub type CycleResult<T> = Result<T, CycleError>;

/// Errors that can occur while cycling a footprint.
///
/// Boundary conditions ("nothing selected", "already at the first/last
/// footprint") are not errors; they are [`CycleOutcome`](super::CycleOutcome)
/// variants. Every error here leaves the board untouched.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The library catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The component's current footprint is absent from its own library's
    /// listing (the library changed externally).
    #[error("footprint not listed in its own library: {footprint}")]
    NotListed {
        /// The footprint that went missing.
        footprint: FootprintId,
    },

    /// The component to be replaced is no longer on the board.
    #[error("component instance no longer on the board: {instance}")]
    InstanceMissing {
        /// Identity of the vanished instance.
        instance: InstanceId,
    },
}

impl CycleError {
    /// Creates a not-listed error.
    #[must_use]
    pub const fn not_listed(footprint: FootprintId) -> Self {
        Self::NotListed { footprint }
    }

    /// Creates an instance-missing error.
    #[must_use]
    pub const fn instance_missing(instance: InstanceId) -> Self {
        Self::InstanceMissing { instance }
    }
}
