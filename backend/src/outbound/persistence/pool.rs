//! Async-safe connection pool for Diesel PostgreSQL connections.
//!
//! This module wraps `diesel-async` and `bb8` to provide the process-wide
//! pool that every worker unit leases connections from.
//!
//! # Design
//!
//! - Pool checkout is non-blocking and bounded by the configured timeout.
//! - [`SharedPool`] builds the pool at most once behind a
//!   [`tokio::sync::OnceCell`], so concurrent first requests from different
//!   workers race for a single initialisation and all observe the same pool.
//! - bb8 spawns its reaper on the runtime that builds the pool. The binary
//!   builds it on the system runtime before workers start; only a failed
//!   startup build defers construction to the first acquiring worker.
//! - Teardown is explicit through [`SharedPool::shutdown`].

use std::sync::Arc;
use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use item_service::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://postgres@localhost/biz")
///     .with_max_size(30)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration with the given database URL.
    ///
    /// Defaults: 30 connections, no idle floor, 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 30,
            min_idle: None,
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the minimum number of idle connections to maintain.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    ///
    /// This is the deadline that bounds an acquire stalled on a saturated
    /// pool.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Get the maximum pool size.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Get the idle connection floor.
    pub fn min_idle(&self) -> Option<u32> {
        self.min_idle
    }

    /// Get the checkout timeout.
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

/// Async connection pool for PostgreSQL via Diesel.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed (e.g.,
    /// invalid database URL or connection failure).
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check out a connection that is not tied to the pool's lifetime.
    ///
    /// Dropping the returned connection hands it back to the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get_owned(
        &self,
    ) -> Result<PooledConnection<'static, AsyncPgConnection>, PoolError> {
        self.inner
            .get_owned()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

/// Process-wide pool handle shared by every worker unit.
///
/// The pool itself is created on the first acquire; later callers reuse it
/// without further locking.
pub struct SharedPool {
    config: PoolConfig,
    cell: OnceCell<DbPool>,
}

impl SharedPool {
    /// Create an uninitialised handle for `config`.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    /// Return the pool, building it on first use.
    ///
    /// A failed build leaves the handle uninitialised so the next caller
    /// retries.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` when the pool cannot be constructed.
    pub async fn pool(&self) -> Result<&DbPool, PoolError> {
        self.cell
            .get_or_try_init(|| async {
                let pool = DbPool::new(self.config.clone()).await?;
                info!(max_size = self.config.max_size, "database pool initialised");
                Ok(pool)
            })
            .await
    }

    /// Whether the pool has been built.
    pub fn is_initialised(&self) -> bool {
        self.cell.initialized()
    }

    /// Tear the pool down, closing its connections.
    ///
    /// Only the last handle can shut the pool down. Returns `false` when
    /// other owners remain; the pool is then dropped with them.
    pub fn shutdown(handle: Arc<Self>) -> bool {
        match Arc::try_unwrap(handle) {
            Ok(shared) => {
                if shared.cell.into_inner().is_some() {
                    info!("database pool closed");
                }
                true
            }
            Err(handle) => {
                warn!(
                    owners = Arc::strong_count(&handle),
                    "database pool still shared at shutdown; teardown skipped"
                );
                false
            }
        }
    }
}
