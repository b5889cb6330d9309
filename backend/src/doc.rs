//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the item and health endpoints together with the
//! request, response and error schemas. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::ErrorBody;
use crate::inbound::http::items::{CreateItemRequest, ItemResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item service API",
        description = "Create and fetch item records; liveness and readiness probes.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::create_item,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ItemResponse, CreateItemRequest, ErrorBody)),
    tags(
        (name = "items", description = "Item records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
