//! [`ItemRepository`] over any leased [`ConnectionSource`].
//!
//! Each operation takes one lease, runs one statement, hands the lease back
//! and only then maps the outcome into the domain taxonomy. No connection
//! outlives the call that acquired it, whichever way the statement ends.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::connection::{ConnectionSource, ItemConnection, StatementError};
use super::pool::PoolError;
use crate::domain::ports::ItemRepository;
use crate::domain::{Item, ItemError};

/// Item repository backed by a shared connection source.
pub struct PooledItemRepository<S> {
    source: Arc<S>,
}

impl<S> PooledItemRepository<S> {
    /// Create a repository leasing connections from `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> Clone for PooledItemRepository<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

fn map_pool_error(error: PoolError) -> ItemError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    ItemError::database(message)
}

fn map_statement_error(error: StatementError) -> ItemError {
    ItemError::database(error.message())
}

#[async_trait]
impl<S> ItemRepository for PooledItemRepository<S>
where
    S: ConnectionSource,
{
    async fn fetch_by_id(&self, id: Uuid) -> Result<Item, ItemError> {
        let mut lease = self.source.acquire().await.map_err(map_pool_error)?;
        let outcome = lease.find_item(id).await;
        lease.release();

        match outcome.map_err(map_statement_error)? {
            Some(item) => Ok(item),
            None => {
                debug!(item_id = %id, "item not found");
                Err(ItemError::not_found(id))
            }
        }
    }

    async fn create(&self, item: &Item) -> Result<Item, ItemError> {
        let mut lease = self.source.acquire().await.map_err(map_pool_error)?;
        let outcome = lease.insert_item(item).await;
        lease.release();

        match outcome.map_err(map_statement_error)? {
            1 => Ok(item.clone()),
            affected => {
                debug!(item_id = %item.id(), affected, "insert skipped");
                Err(ItemError::conflict(item.id()))
            }
        }
    }
}
