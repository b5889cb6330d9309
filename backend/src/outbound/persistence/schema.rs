//! Diesel table definitions for the PostgreSQL schema.
//!
//! The `item` table is provisioned outside this service; these definitions
//! must match it exactly. `diesel print-schema` can regenerate them from a
//! live database.

diesel::table! {
    /// Stored item records.
    item (id) {
        /// Primary key, unique per record.
        id -> Uuid,
        /// Free-form item name.
        name -> Text,
    }
}
