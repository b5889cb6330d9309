//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::item;
use crate::domain::Item;

/// Row struct for reading from the item table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = item)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: Uuid,
    pub name: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item::new(row.id, row.name)
    }
}

/// Insertable struct for creating new item records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = item)]
pub(crate) struct NewItemRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
}

impl<'a> From<&'a Item> for NewItemRow<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            id: item.id(),
            name: item.name(),
        }
    }
}
