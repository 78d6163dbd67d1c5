//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches Leptos SSR rendering of the storefront chrome, the compiled
//! client assets under `/pkg`, and a liveness probe into one Axum router.
//! The `/api/*` endpoints the client providers call are served elsewhere.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Leptos SSR frontend plus static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(tastebud_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || tastebud_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = pkg_dir(&leptos_options.site_root, &leptos_options.site_pkg_dir);
    tracing::debug!(pkg_dir = %pkg_dir.display(), "serving client assets");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory the compiled WASM, JS, and CSS bundle is written to.
fn pkg_dir(site_root: &str, site_pkg_dir: &str) -> PathBuf {
    Path::new(site_root).join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
