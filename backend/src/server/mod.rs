//! Server construction and middleware wiring.
//!
//! Every worker unit runs its own single-threaded event loop and builds its
//! own `App`. The handler state is constructed once by the caller and cloned
//! into each worker, so all workers share the same service, repository and
//! pool handle.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use item_service::RequestTrace;
#[cfg(debug_assertions)]
use item_service::doc::ApiDoc;
use item_service::inbound::http::configure;
use item_service::inbound::http::health::HealthState;
use item_service::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequestTrace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Construct an Actix HTTP server over the shared handler state.
///
/// # Parameters
/// - `health_state`: lifecycle phase, marked serving once the socket is bound.
/// - `http_state`: ports shared by every worker unit.
/// - `config`: listener address and worker count.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener. Actix's own
/// signal handling is disabled; pair the server with [`drain_on_signal`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, workers } = config;
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .workers(workers)
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_serving();
    info!(%bind_addr, workers, "item service listening");
    Ok(server)
}

/// Mark the service draining, then stop the server gracefully.
///
/// Probes report the draining phase while in-flight requests finish.
pub async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.mark_draining();
    info!("item service draining");
    handle.stop(true).await;
}

/// Wait for SIGINT or SIGTERM, then [`drain`].
pub async fn drain_on_signal(health_state: web::Data<HealthState>, handle: ServerHandle) {
    shutdown_signal().await;
    drain(health_state, handle).await;
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use actix_web::rt::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = actix_web::rt::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
                return;
            }
            Err(err) => warn!(error = %err, "SIGTERM handler unavailable"),
        }
    }

    if let Err(err) = actix_web::rt::signal::ctrl_c().await {
        warn!(error = %err, "ctrl-c handler unavailable");
    }
}
