//! Closed failure taxonomy for item operations.
//!
//! Every repository and service call resolves to exactly one value or exactly
//! one [`ItemError`]. The taxonomy is transport agnostic: inbound adapters
//! decide how each variant is rendered (see `inbound::http::error`). None of
//! the variants is retried; each is terminal for the request that produced it.

use uuid::Uuid;

use super::Item;

/// Failure outcome of an item operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    /// A mutation completed without touching the expected row.
    #[error("no rows updated for item {}", .item.id())]
    NoRowsUpdated { item: Item },
    /// The store could not be reached or rejected a statement.
    #[error("database error: {cause}")]
    Database { cause: String },
    /// No record exists for the requested identifier.
    #[error("item {id} not found")]
    NotFound { id: Uuid },
    /// A required request field was absent or unusable.
    #[error("missing required field `{field}`")]
    MissingRequiredField { field: String },
    /// An insert collided with an existing primary key.
    #[error("item {id} already exists")]
    Conflict { id: Uuid },
    /// A fault outside the taxonomy was caught at the service boundary.
    #[error("unhandled error: {cause}")]
    Unhandled { cause: String },
}

impl ItemError {
    /// Construct [`ItemError::NoRowsUpdated`].
    pub fn no_rows_updated(item: Item) -> Self {
        Self::NoRowsUpdated { item }
    }

    /// Construct [`ItemError::Database`].
    pub fn database(cause: impl Into<String>) -> Self {
        Self::Database {
            cause: cause.into(),
        }
    }

    /// Construct [`ItemError::NotFound`].
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Construct [`ItemError::MissingRequiredField`].
    pub fn missing_required_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Construct [`ItemError::Conflict`].
    pub fn conflict(id: Uuid) -> Self {
        Self::Conflict { id }
    }

    /// Construct [`ItemError::Unhandled`].
    pub fn unhandled(cause: impl Into<String>) -> Self {
        Self::Unhandled {
            cause: cause.into(),
        }
    }

    /// Stable machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoRowsUpdated { .. } => "no_rows_updated",
            Self::Database { .. } => "database_error",
            Self::NotFound { .. } => "item_not_found",
            Self::MissingRequiredField { .. } => "missing_required_field",
            Self::Conflict { .. } => "conflict",
            Self::Unhandled { .. } => "unhandled_error",
        }
    }
}

#[cfg(test)]
mod tests;
