//! Driving ports consumed by the HTTP dispatcher.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Item, ItemError};

/// Read-side use case: look up a single item.
#[async_trait]
pub trait ItemQuery: Send + Sync {
    /// Fetch the item stored under `id`.
    async fn get_item(&self, id: Uuid) -> Result<Item, ItemError>;
}

/// Write-side use case: store a new item.
#[async_trait]
pub trait ItemCommand: Send + Sync {
    /// Persist `item`, whose identifier has already been generated.
    async fn create_item(&self, item: Item) -> Result<Item, ItemError>;
}
