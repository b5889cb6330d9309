//! Test utilities for the item service crate.
//!
//! Compiled for unit tests and, through the `test-support` feature, for the
//! integration tests under `tests/`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Item;
use crate::outbound::persistence::{
    ConnectionSource, ItemConnection, Lease, PoolError, StatementError,
};

#[derive(Default)]
struct MemoryState {
    rows: Mutex<HashMap<Uuid, String>>,
    acquired: AtomicUsize,
    released: AtomicUsize,
    fail_acquire: AtomicBool,
    fail_statements: AtomicBool,
}

/// In-memory [`ConnectionSource`] that counts leases.
///
/// Rows live in a shared map keyed by id; inserts follow the
/// insert-unless-present rule of the real table.
#[derive(Clone, Default)]
pub struct MemoryConnectionSource {
    state: Arc<MemoryState>,
}

impl MemoryConnectionSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored row.
    pub fn insert_row(&self, item: &Item) {
        self.rows().insert(item.id(), item.name().to_owned());
    }

    /// Stored name for `id`, if any.
    pub fn stored_name(&self, id: Uuid) -> Option<String> {
        self.rows().get(&id).cloned()
    }

    /// Number of stored rows.
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Make every following acquire fail.
    pub fn fail_acquire(&self) {
        self.state.fail_acquire.store(true, Ordering::SeqCst);
    }

    /// Make every following statement fail.
    pub fn fail_statements(&self) {
        self.state.fail_statements.store(true, Ordering::SeqCst);
    }

    /// Leases handed out so far.
    pub fn acquired(&self) -> usize {
        self.state.acquired.load(Ordering::SeqCst)
    }

    /// Leases returned so far.
    pub fn released(&self) -> usize {
        self.state.released.load(Ordering::SeqCst)
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, String>> {
        self.state
            .rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Connection leased from a [`MemoryConnectionSource`].
pub struct MemoryConnection {
    source: MemoryConnectionSource,
}

impl MemoryConnection {
    fn check(&self) -> Result<(), StatementError> {
        if self.source.state.fail_statements.load(Ordering::SeqCst) {
            return Err(StatementError::new("relation \"item\" does not exist"));
        }
        Ok(())
    }
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        self.source.state.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ItemConnection for MemoryConnection {
    async fn find_item(&mut self, id: Uuid) -> Result<Option<Item>, StatementError> {
        self.check()?;
        Ok(self
            .source
            .stored_name(id)
            .map(|name| Item::new(id, name)))
    }

    async fn insert_item(&mut self, item: &Item) -> Result<usize, StatementError> {
        self.check()?;
        let mut rows = self.source.rows();
        if rows.contains_key(&item.id()) {
            return Ok(0);
        }
        rows.insert(item.id(), item.name().to_owned());
        Ok(1)
    }
}

#[async_trait]
impl ConnectionSource for MemoryConnectionSource {
    type Connection = MemoryConnection;

    async fn acquire(&self) -> Result<Lease<MemoryConnection>, PoolError> {
        if self.state.fail_acquire.load(Ordering::SeqCst) {
            return Err(PoolError::checkout("timed out waiting for connection"));
        }
        self.state.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Lease::new(MemoryConnection {
            source: self.clone(),
        }))
    }
}
