//! Item record service library.
//!
//! Layout follows a ports-and-adapters split:
//! - [`domain`] holds the `Item` record, the closed error taxonomy and the
//!   service orchestrating repository calls.
//! - [`outbound`] provides the pooled PostgreSQL repository and the in-process
//!   item event bus.
//! - [`inbound`] exposes the HTTP dispatcher.
//! - [`codec`] implements the length-prefixed wire format used between worker
//!   units.

pub mod codec;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware wrapping every route.
pub use middleware::{REQUEST_ID_HEADER, RequestTrace};
