//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor loads the plugin in an iframe from this origin, so every
//! response carries permissive CORS headers. `/healthz` answers liveness
//! probes; every other path is a static file from the plugin bundle.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub fn app(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let assets = ServeDir::new(&config.dist_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn healthz() -> &'static str {
    "ok"
}
