//! Scoped connection leases.
//!
//! A [`ConnectionSource`] hands out connections wrapped in a [`Lease`]. The
//! lease owns its connection for exactly one unit of work: it is returned to
//! the source when the lease is released or dropped, on every exit path.

use std::ops::{Deref, DerefMut};

use async_trait::async_trait;
use tracing::trace;
use uuid::Uuid;

use super::pool::PoolError;
use crate::domain::Item;

/// Failure reported by the storage engine while running a statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StatementError {
    message: String,
}

impl StatementError {
    /// Wrap an engine message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The engine message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The two item statements a leased connection can run.
#[async_trait]
pub trait ItemConnection: Send {
    /// Look up a single item by primary key.
    async fn find_item(&mut self, id: Uuid) -> Result<Option<Item>, StatementError>;

    /// Insert `item` unless its id already exists, returning the affected row
    /// count.
    async fn insert_item(&mut self, item: &Item) -> Result<usize, StatementError>;
}

/// Source of leased connections, shared by all worker units.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    /// Connection type handed out by this source.
    type Connection: ItemConnection;

    /// Lease a connection for one unit of work.
    async fn acquire(&self) -> Result<Lease<Self::Connection>, PoolError>;
}

/// A connection held for one unit of work.
pub struct Lease<C> {
    conn: C,
}

impl<C> Lease<C> {
    /// Wrap a freshly acquired connection.
    pub fn new(conn: C) -> Self {
        trace!("connection leased");
        Self { conn }
    }

    /// Hand the connection back to its source.
    pub fn release(self) {
        drop(self);
    }
}

impl<C> Deref for Lease<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.conn
    }
}

impl<C> DerefMut for Lease<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.conn
    }
}

impl<C> Drop for Lease<C> {
    fn drop(&mut self) {
        trace!("connection released");
    }
}
