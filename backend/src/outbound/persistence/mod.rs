//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides the item repository backed by PostgreSQL via Diesel
//! with async support through `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between statement
//!   outcomes and domain types.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) never leave this module.
//! - **Scoped leases**: every operation holds one [`Lease`] for exactly one
//!   statement.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use item_service::outbound::persistence::{PoolConfig, PooledItemRepository, SharedPool};
//!
//! let pool = Arc::new(SharedPool::new(PoolConfig::new("postgres://localhost/biz")));
//! let repo = PooledItemRepository::new(pool);
//! ```

mod connection;
mod diesel_item_connection;
mod models;
mod pool;
mod pooled_item_repository;
mod schema;

pub use connection::{ConnectionSource, ItemConnection, Lease, StatementError};
pub use diesel_item_connection::DieselItemConnection;
pub use pool::{DbPool, PoolConfig, PoolError, SharedPool};
pub use pooled_item_repository::PooledItemRepository;
