//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Item;
use actix_web::body::to_bytes;
use rstest::rstest;
use uuid::Uuid;

async fn render(error: ApiError) -> (StatusCode, ErrorBody) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds");
    (status, body)
}

#[rstest]
#[case(ItemError::no_rows_updated(Item::new(Uuid::nil(), "w")), StatusCode::PAYLOAD_TOO_LARGE)]
#[case(ItemError::database("reset"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(ItemError::not_found(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case(ItemError::missing_required_field("name"), StatusCode::BAD_REQUEST)]
#[case(ItemError::conflict(Uuid::nil()), StatusCode::PAYLOAD_TOO_LARGE)]
#[case(ItemError::unhandled("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_is_fixed_per_variant(#[case] err: ItemError, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&ApiError::from(err)), status);
}

#[rstest]
#[case(ApiError::malformed_id("abc"), "malformed_id")]
#[case(ApiError::MalformedBody, "malformed_body")]
fn request_shape_errors_are_bad_request(#[case] err: ApiError, #[case] code: &str) {
    assert_eq!(ResponseError::status_code(&err), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), code);
}

#[rstest]
#[case(ItemError::database("password authentication failed for user \"svc\""))]
#[case(ItemError::unhandled("index out of bounds"))]
#[actix_web::test]
async fn server_errors_are_redacted(#[case] err: ItemError) {
    let code = err.code();
    let (status, body) = render(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.code, code);
    assert_eq!(body.message, REDACTED_MESSAGE);
}

#[actix_web::test]
async fn client_errors_carry_their_message() {
    let id = Uuid::new_v4();
    let (status, body) = render(ItemError::not_found(id).into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.code, "item_not_found");
    assert_eq!(body.message, format!("item {id} not found"));
}

#[actix_web::test]
async fn missing_field_names_the_field() {
    let (_, body) = render(ItemError::missing_required_field("name").into()).await;

    assert_eq!(body.code, "missing_required_field");
    assert!(body.message.contains("`name`"));
}
