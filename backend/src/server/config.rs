//! HTTP server configuration object.

use std::net::SocketAddr;

use item_service::settings::ServiceSettings;

/// Listener settings for [`super::create_server`].
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) workers: usize,
}

impl ServerConfig {
    /// Construct a configuration binding `bind_addr` with `workers` worker
    /// units.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, workers: usize) -> Self {
        Self {
            bind_addr,
            workers: workers.max(1),
        }
    }

    /// Derive the listener configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ServiceSettings) -> Self {
        Self::new(settings.bind_addr(), settings.workers())
    }
}
