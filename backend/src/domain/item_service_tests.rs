//! Tests for the item service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{MockItemEvents, MockItemRepository, NoOpItemEvents};
use rstest::rstest;

fn make_service(
    repo: MockItemRepository,
) -> ItemService<MockItemRepository, NoOpItemEvents> {
    ItemService::new(Arc::new(repo), Arc::new(NoOpItemEvents))
}

#[tokio::test]
async fn get_item_returns_repository_record() {
    let item = Item::new(Uuid::new_v4(), "widget");
    let id = item.id();
    let expected = item.clone();
    let mut repo = MockItemRepository::new();
    repo.expect_fetch_by_id()
        .withf(move |requested| *requested == id)
        .times(1)
        .return_once(move |_| Ok(item));

    let fetched = make_service(repo).get_item(id).await.expect("item found");
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn get_item_propagates_not_found() {
    let id = Uuid::new_v4();
    let mut repo = MockItemRepository::new();
    repo.expect_fetch_by_id()
        .times(1)
        .return_once(move |requested| Err(ItemError::not_found(requested)));

    let err = make_service(repo).get_item(id).await.expect_err("missing");
    assert_eq!(err, ItemError::not_found(id));
}

#[tokio::test]
async fn create_item_publishes_stored_record() {
    let item = Item::from_name("widget").expect("valid name");
    let id = item.id();
    let mut repo = MockItemRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|item: &Item| Ok(item.clone()));
    let mut events = MockItemEvents::new();
    events
        .expect_item_created()
        .withf(move |published: &Item| published.id() == id)
        .times(1)
        .return_const(());

    let service = ItemService::new(Arc::new(repo), Arc::new(events));
    let created = service.create_item(item).await.expect("created");
    assert_eq!(created.id(), id);
}

#[rstest]
#[case(ItemError::conflict(Uuid::nil()))]
#[case(ItemError::database("connection reset"))]
#[case(ItemError::no_rows_updated(Item::new(Uuid::nil(), "widget")))]
#[tokio::test]
async fn create_item_failure_skips_publishing(#[case] failure: ItemError) {
    let mut repo = MockItemRepository::new();
    let returned = failure.clone();
    repo.expect_create()
        .times(1)
        .return_once(move |_| Err(returned));
    let mut events = MockItemEvents::new();
    events.expect_item_created().times(0);

    let service = ItemService::new(Arc::new(repo), Arc::new(events));
    let err = service
        .create_item(Item::from_name("widget").expect("valid name"))
        .await
        .expect_err("repository failure");
    assert_eq!(err, failure);
}

#[tokio::test]
async fn panicking_repository_becomes_unhandled_error() {
    let mut repo = MockItemRepository::new();
    repo.expect_fetch_by_id()
        .times(1)
        .returning(|_| panic!("row decoder exploded"));

    let err = make_service(repo)
        .get_item(Uuid::new_v4())
        .await
        .expect_err("panic is classified");
    assert_eq!(err, ItemError::unhandled("row decoder exploded"));
}

#[tokio::test]
async fn panicking_create_becomes_unhandled_error() {
    let mut repo = MockItemRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|item: &Item| panic!("insert failed for {}", item.name()));

    let err = make_service(repo)
        .create_item(Item::new(Uuid::nil(), "gear"))
        .await
        .expect_err("panic is classified");
    assert_eq!(err, ItemError::unhandled("insert failed for gear"));
}

#[rstest]
fn panic_message_falls_back_for_opaque_payloads() {
    let payload: Box<dyn Any + Send> = Box::new(42_u32);
    assert_eq!(panic_message(payload.as_ref()), "panic without message");
}
