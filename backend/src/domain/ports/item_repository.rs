//! Port for item persistence.
//!
//! Adapters acquire a pooled connection per call, run one statement and hand
//! the connection back before the result is returned. Failures are already
//! expressed in the [`ItemError`] taxonomy when they leave the adapter.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Item, ItemError};

/// Driven port for reading and inserting item records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Fetch the record stored under `id`.
    ///
    /// Resolves to [`ItemError::NotFound`] when no row matches and
    /// [`ItemError::Database`] when the lookup cannot be executed.
    async fn fetch_by_id(&self, id: Uuid) -> Result<Item, ItemError>;

    /// Insert `item` under its own identifier.
    ///
    /// Resolves to the inserted record when exactly one row was written and
    /// to [`ItemError::Conflict`] for any other affected-row count.
    async fn create(&self, item: &Item) -> Result<Item, ItemError>;
}
