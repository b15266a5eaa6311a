//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`, `GET /statistics` - HTML pages
//! - `POST /entries/*`, `/submit`, `/statistics/refresh`, `/theme` - Form actions
//! - `GET  /health`              - Health check: sessions, statistics catalog
//! - `/api/*`                    - JSON API
//! - `/static/*`                 - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Session** - `session_id` cookie on HTML routes
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::session;

fn with_session(pages: Router<AppState>, actions: Router<AppState>) -> Router<AppState> {
    Router::new()
        .merge(pages)
        .merge(actions)
        .layer(middleware::from_fn(session::layer))
}

/// HTML pages and form actions behind the session middleware, without rate
/// limiting.
pub fn web_router() -> Router<AppState> {
    with_session(web::routes::page_routes(), web::routes::action_routes())
}

/// Every dynamic route with its rate limiter: pages, the health check,
/// validation and statistics reads on the relaxed bucket; form actions and
/// batch shortening on the strict one.
pub fn rate_limited_router(behind_proxy: bool) -> Router<AppState> {
    let web_router = with_session(
        rate_limit::apply(web::routes::page_routes(), behind_proxy, false),
        rate_limit::apply(web::routes::action_routes(), behind_proxy, true),
    );

    let api_router = Router::new()
        .merge(rate_limit::apply(api::routes::api_read_routes(), behind_proxy, false))
        .merge(rate_limit::apply(api::routes::api_write_routes(), behind_proxy, true));
    let health = rate_limit::apply(
        Router::new().route("/health", get(health_handler)),
        behind_proxy,
        false,
    );

    Router::new()
        .merge(web_router)
        .merge(health)
        .nest("/api", api_router)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let router = rate_limited_router(behind_proxy)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
