//! Tests for taxonomy constructors, codes and messages.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn item() -> Item {
    Item::new(Uuid::nil(), "widget")
}

#[rstest]
#[case(ItemError::no_rows_updated(Item::new(Uuid::nil(), "w")), "no_rows_updated")]
#[case(ItemError::database("refused"), "database_error")]
#[case(ItemError::not_found(Uuid::nil()), "item_not_found")]
#[case(ItemError::missing_required_field("name"), "missing_required_field")]
#[case(ItemError::conflict(Uuid::nil()), "conflict")]
#[case(ItemError::unhandled("boom"), "unhandled_error")]
fn every_variant_has_a_stable_code(#[case] error: ItemError, #[case] expected: &str) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn no_rows_updated_mentions_item_id(item: Item) {
    let message = ItemError::no_rows_updated(item.clone()).to_string();
    assert!(message.contains(&item.id().to_string()));
}

#[rstest]
fn not_found_mentions_id() {
    let id = Uuid::new_v4();
    assert_eq!(
        ItemError::not_found(id).to_string(),
        format!("item {id} not found")
    );
}

#[rstest]
fn missing_field_names_the_field() {
    let err = ItemError::missing_required_field("name");
    assert_eq!(err.to_string(), "missing required field `name`");
    assert!(matches!(
        err,
        ItemError::MissingRequiredField { ref field } if field == "name"
    ));
}

#[rstest]
fn database_and_unhandled_keep_cause() {
    assert!(
        ItemError::database("pool timed out")
            .to_string()
            .contains("pool timed out")
    );
    assert!(
        ItemError::unhandled("index out of range")
            .to_string()
            .contains("index out of range")
    );
}
