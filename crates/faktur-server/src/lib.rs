//! faktur-server
//!
//! HTTP surface for Faktur. Two ways in, one pipeline out: a multipart
//! HTML upload (`/api/generate-pdf`) or a structured invoice payload
//! (`/api/invoices/pdf`), both converted to PDF by `faktur-render` under
//! a bounded concurrency cap.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);
    // headroom for multipart framing on top of the file cap
    let body_limit = state.config.max_upload_bytes + 64 * 1024;

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/generate-pdf", post(routes::pdf::generate_pdf))
        .route("/api/invoices/pdf", post(routes::invoices::invoice_pdf))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// CORS from the configured allow-list.
///
/// Origins not on the list get no CORS headers; requests without an
/// `Origin` header (curl, same-process tools) bypass CORS entirely.
fn cors_layer(allowed: &[String]) -> CorsLayer {
    let origins: Vec<_> = allowed.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
