//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O. One instance is
//! built at startup and cloned into every worker unit.

use std::sync::Arc;

use crate::domain::ports::{ItemCommand, ItemQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub items: Arc<dyn ItemQuery>,
    pub item_commands: Arc<dyn ItemCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(items: Arc<dyn ItemQuery>, item_commands: Arc<dyn ItemCommand>) -> Self {
        Self {
            items,
            item_commands,
        }
    }

    /// Construct state from one service implementing both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ItemQuery + ItemCommand + 'static,
    {
        Self {
            items: service.clone(),
            item_commands: service,
        }
    }
}
