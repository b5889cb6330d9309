//! Item endpoints.
//!
//! ```text
//! GET  /items/{id}
//! POST /items {"name":"widget"}
//! ```
//!
//! Each request moves through `received → validating → dispatched →
//! completed`. Validation failures complete the request without reaching the
//! service.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Item, ItemError, NAME_FIELD};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ApiError, ErrorBody};
use crate::inbound::http::state::HttpState;

/// Item representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    /// Server-generated identifier.
    pub id: Uuid,
    /// Name supplied at creation.
    #[schema(example = "widget")]
    pub name: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        let (id, name) = item.into_parts();
        Self { id, name }
    }
}

/// Request body for creating an item.
///
/// Any `id` supplied by the client is ignored.
#[derive(Debug, ToSchema)]
pub struct CreateItemRequest {
    /// Non-empty item name.
    #[schema(example = "widget")]
    pub name: String,
}

fn parse_item_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::malformed_id(raw))
}

fn parse_new_item(body: &[u8]) -> ApiResult<Item> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| ApiError::MalformedBody)?;
    let fields = payload.as_object().ok_or(ApiError::MalformedBody)?;
    let name = fields
        .get(NAME_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| ItemError::missing_required_field(NAME_FIELD))?;
    Ok(Item::from_name(name)?)
}

/// Fetch an item by identifier.
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = String, Path, description = "Item UUID")),
    responses(
        (status = 200, description = "Stored item", body = ItemResponse),
        (status = 400, description = "Malformed identifier", body = ErrorBody),
        (status = 404, description = "No item with this identifier", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ItemResponse>> {
    let raw = path.into_inner();
    debug!(phase = "validating", id = %raw);
    let id = parse_item_id(&raw)?;

    debug!(phase = "dispatched", item_id = %id);
    let outcome = state.items.get_item(id).await;
    debug!(phase = "completed", ok = outcome.is_ok());

    Ok(web::Json(outcome?.into()))
}

/// Create an item with a server-generated identifier.
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Malformed body or missing name", body = ErrorBody),
        (status = 413, description = "Identifier collision", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    debug!(phase = "validating", body_len = body.len());
    let item = parse_new_item(&body)?;

    debug!(phase = "dispatched", item_id = %item.id());
    let outcome = state.item_commands.create_item(item).await;
    debug!(phase = "completed", ok = outcome.is_ok());

    Ok(HttpResponse::Created().json(ItemResponse::from(outcome?)))
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;
