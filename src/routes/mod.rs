//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves the Leptos SSR admin UI, its `/pkg` assets, a health
//! probe, and (optionally) a reverse proxy for `/api/*` so the browser can
//! reach the backend same-origin. Without an upstream, `/api/*` is left to
//! whatever else serves that path.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use proxy::Upstream;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Health probe plus the `/api` proxy when an upstream is configured.
pub fn api_routes(upstream: Option<Upstream>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let router = match upstream {
        Some(upstream) => Router::new()
            .route("/api", any(proxy::forward))
            .route("/api/{*rest}", any(proxy::forward))
            .with_state(upstream),
        None => Router::new(),
    };
    router.route("/healthz", get(healthz)).layer(cors)
}

/// Leptos SSR frontend merged with the API routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(config: &HostConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let upstream = config.upstream.as_deref().map(Upstream::new);
    if let Some(upstream) = &upstream {
        tracing::info!(upstream = upstream.base(), "proxying /api");
    }

    Ok(api_routes(upstream)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
