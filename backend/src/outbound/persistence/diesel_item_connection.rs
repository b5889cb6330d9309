//! PostgreSQL-backed [`ItemConnection`] over a pooled Diesel connection.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::pooled_connection::bb8::PooledConnection;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::debug;
use uuid::Uuid;

use super::connection::{ConnectionSource, ItemConnection, Lease, StatementError};
use super::models::{ItemRow, NewItemRow};
use super::pool::{PoolError, SharedPool};
use super::schema::item;
use crate::domain::Item;

/// A pooled PostgreSQL connection; dropping it returns it to the pool.
pub struct DieselItemConnection {
    conn: PooledConnection<'static, AsyncPgConnection>,
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> StatementError {
    let message = error.to_string();
    debug!(%message, %operation, "diesel operation failed");
    StatementError::new(message)
}

#[async_trait]
impl ItemConnection for DieselItemConnection {
    async fn find_item(&mut self, id: Uuid) -> Result<Option<Item>, StatementError> {
        let row = item::table
            .find(id)
            .select(ItemRow::as_select())
            .first(&mut self.conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "select item"))?;
        Ok(row.map(Item::from))
    }

    async fn insert_item(&mut self, record: &Item) -> Result<usize, StatementError> {
        diesel::insert_into(item::table)
            .values(NewItemRow::from(record))
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .map_err(|err| map_diesel_error(err, "insert item"))
    }
}

#[async_trait]
impl ConnectionSource for SharedPool {
    type Connection = DieselItemConnection;

    async fn acquire(&self) -> Result<Lease<DieselItemConnection>, PoolError> {
        let conn = self.pool().await?.get_owned().await?;
        Ok(Lease::new(DieselItemConnection { conn }))
    }
}
