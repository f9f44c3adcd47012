use std::error::Error;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::state::roster::{Participant, Role};

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by roster storage backends regardless of the implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not serve the request.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Human readable context for the failure.
        message: String,
        /// Underlying backend failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

/// Fields written when a roster slot is updated.
#[derive(Debug, Clone)]
pub struct SlotUpdate {
    /// New display name (stored trimmed).
    pub name: String,
    /// New declared role.
    pub role: Role,
    /// New confirmation flag.
    pub confirmed: bool,
}

/// Abstraction over the persistence layer for the match-day roster.
///
/// Snapshots returned by [`RosterStore::list`] are internally consistent:
/// implementations must never hand out a roster read mid-mutation.
pub trait RosterStore: Send + Sync {
    /// Full roster ordered by slot id.
    fn list(&self) -> BoxFuture<'static, StorageResult<Vec<Participant>>>;
    /// Apply an update to one slot, returning the stored record or `None`
    /// when the id is unknown.
    fn update(
        &self,
        id: u32,
        update: SlotUpdate,
    ) -> BoxFuture<'static, StorageResult<Option<Participant>>>;
    /// Return every slot to its unclaimed default.
    fn reset(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Probe backend availability.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
