//! Service configuration loaded via OrthoConfig.
//!
//! Values merge from configuration files, `ITEMS_*` environment variables and
//! command-line flags. Numeric tuning knobs carry OrthoConfig defaults; the
//! remaining optional fields fall back to defaults in their accessors.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost/biz";

/// Runtime settings for the item service binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ITEMS")]
pub struct ServiceSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Number of single-threaded worker units.
    #[ortho_config(default = 4)]
    pub workers: usize,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    #[ortho_config(default = 30)]
    pub max_pool_size: u32,
    /// Idle connections the pool keeps open.
    pub min_idle: Option<u32>,
    /// Seconds an acquire may wait for a free connection.
    #[ortho_config(default = 30)]
    pub connection_timeout_secs: u64,
    /// Messages buffered per item event subscriber.
    #[ortho_config(default = 256)]
    pub event_capacity: usize,
}

impl ServiceSettings {
    /// Listener address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Worker unit count; never less than one.
    pub fn workers(&self) -> usize {
        self.workers.max(1)
    }

    /// Database URL, defaulting to the local `biz` database.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Event bus capacity.
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }

    /// Pool configuration derived from these settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.database_url())
            .with_max_size(self.max_pool_size)
            .with_min_idle(self.min_idle)
            .with_connection_timeout(Duration::from_secs(self.connection_timeout_secs))
    }
}
