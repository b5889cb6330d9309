//! Item domain service.
//!
//! Thin orchestration over [`ItemRepository`]. Every repository call runs
//! inside [`guarded`], the single place where a panic raised below the service
//! is turned into [`ItemError::Unhandled`], so the dispatcher only ever sees
//! values from the closed taxonomy.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::FutureExt;
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::ports::{ItemCommand, ItemEvents, ItemQuery, ItemRepository};
use crate::domain::{Item, ItemError};

/// Item service implementing the driving ports.
#[derive(Clone)]
pub struct ItemService<R, E> {
    repository: Arc<R>,
    events: Arc<E>,
}

impl<R, E> ItemService<R, E> {
    /// Create a service over the given repository and event sink.
    pub fn new(repository: Arc<R>, events: Arc<E>) -> Self {
        Self { repository, events }
    }
}

impl<R, E> ItemService<R, E>
where
    R: ItemRepository,
    E: ItemEvents,
{
    /// Fetch an item by identifier.
    ///
    /// # Errors
    /// Propagates the repository's taxonomy error, or
    /// [`ItemError::Unhandled`] if the repository panics.
    pub async fn get_item(&self, id: Uuid) -> Result<Item, ItemError> {
        guarded(async { self.repository.fetch_by_id(id).await }).await
    }

    /// Store a new item and announce it to other worker units.
    ///
    /// # Errors
    /// Propagates the repository's taxonomy error, or
    /// [`ItemError::Unhandled`] if the repository panics. No event is
    /// published on failure.
    pub async fn create_item(&self, item: Item) -> Result<Item, ItemError> {
        let created = guarded(async { self.repository.create(&item).await }).await?;
        debug!(item_id = %created.id(), "item stored");
        self.events.item_created(&created);
        Ok(created)
    }
}

#[async_trait]
impl<R, E> ItemQuery for ItemService<R, E>
where
    R: ItemRepository,
    E: ItemEvents,
{
    async fn get_item(&self, id: Uuid) -> Result<Item, ItemError> {
        Self::get_item(self, id).await
    }
}

#[async_trait]
impl<R, E> ItemCommand for ItemService<R, E>
where
    R: ItemRepository,
    E: ItemEvents,
{
    async fn create_item(&self, item: Item) -> Result<Item, ItemError> {
        Self::create_item(self, item).await
    }
}

/// Run `operation`, converting a panic into [`ItemError::Unhandled`].
async fn guarded<F>(operation: F) -> Result<Item, ItemError>
where
    F: Future<Output = Result<Item, ItemError>>,
{
    match AssertUnwindSafe(operation).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(payload) => {
            let cause = panic_message(payload.as_ref());
            error!(%cause, "repository panicked");
            Err(ItemError::unhandled(cause))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic without message".to_owned()
    }
}

#[cfg(test)]
#[path = "item_service_tests.rs"]
mod tests;
