//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod items;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorBody};

use actix_web::web;

/// Register the item and health routes.
///
/// Callers supply [`state::HttpState`] and [`health::HealthState`] as app
/// data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(items::get_item)
        .service(items::create_item)
        .service(health::ready)
        .service(health::live);
}
