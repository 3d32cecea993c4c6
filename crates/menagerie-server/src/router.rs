//! Router assembly for the menagerie HTTP API.
//!
//! [`build_router`] wires the handlers to their routes; [`with_middleware`]
//! adds the tracing, CORS and panic-recovery layers.

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        // Liveness probe
        .route("/health", get(handlers::health::health))
        // Records
        .route(
            "/animals",
            get(handlers::animals::list_animals).post(handlers::animals::create_animal),
        )
        .route("/animals/{name}", get(handlers::animals::get_animal))
        .with_state(state);

    with_middleware(routes)
}

/// Wraps `router` in the standard layer stack.
///
/// A panicking handler becomes a 500 response instead of tearing down the
/// connection task. TraceLayer logs every request at INFO as the access log.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}
