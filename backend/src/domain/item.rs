//! Item record.

use std::fmt;

use uuid::Uuid;

use super::ItemError;

/// Field name reported when a create request lacks a usable name.
pub const NAME_FIELD: &str = "name";

/// Immutable item record keyed by a server-generated UUID.
///
/// ## Invariants
/// - `id` is assigned once, either by [`Item::from_name`] when a client asks
///   for a new record or by the store when a persisted row is read back.
/// - Records are never mutated after construction; there are no setters.
///
/// # Examples
/// ```
/// use item_service::domain::Item;
///
/// let item = Item::from_name("widget").expect("non-empty name");
/// assert_eq!(item.name(), "widget");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    id: Uuid,
    name: String,
}

impl Item {
    /// Rebuild an item from stored or decoded parts.
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Create a fresh record for `name` with a newly generated identifier.
    ///
    /// # Errors
    /// Returns [`ItemError::MissingRequiredField`] when `name` is empty.
    pub fn from_name(name: &str) -> Result<Self, ItemError> {
        if name.is_empty() {
            return Err(ItemError::missing_required_field(NAME_FIELD));
        }
        Ok(Self::new(Uuid::new_v4(), name))
    }

    /// Primary key.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Display name supplied at creation.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Split the record into its identifier and name.
    pub fn into_parts(self) -> (Uuid, String) {
        (self.id, self.name)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn from_name_generates_distinct_ids() {
        let first = Item::from_name("widget").expect("valid name");
        let second = Item::from_name("widget").expect("valid name");

        assert_ne!(first.id(), second.id());
        assert_eq!(first.name(), second.name());
    }

    #[rstest]
    fn from_name_rejects_empty_name() {
        let err = Item::from_name("").expect_err("empty name");
        assert_eq!(err, ItemError::missing_required_field(NAME_FIELD));
    }

    #[rstest]
    #[case("   ")]
    #[case("\t\n")]
    fn from_name_accepts_whitespace_only_names(#[case] name: &str) {
        let item = Item::from_name(name).expect("non-empty name");
        assert_eq!(item.name(), name);
    }

    #[rstest]
    fn from_name_keeps_surrounding_whitespace() {
        let item = Item::from_name(" spaced ").expect("valid name");
        assert_eq!(item.name(), " spaced ");
    }

    #[rstest]
    fn into_parts_returns_fields() {
        let id = Uuid::new_v4();
        let (got_id, got_name) = Item::new(id, "gear").into_parts();
        assert_eq!(got_id, id);
        assert_eq!(got_name, "gear");
    }
}
