//! Domain types and services.
//!
//! Purpose: define the `Item` record, the closed error taxonomy and the
//! service that drives the repository port. Nothing here knows about HTTP or
//! SQL; adapters live under `inbound` and `outbound`.
//!
//! Public surface:
//! - [`Item`]: immutable record keyed by UUID.
//! - [`ItemError`]: closed failure taxonomy.
//! - [`ItemService`]: orchestration implementing the driving ports.

pub mod error;
pub mod item;
mod item_service;
pub mod ports;

pub use self::error::ItemError;
pub use self::item::{Item, NAME_FIELD};
pub use self::item_service::ItemService;
