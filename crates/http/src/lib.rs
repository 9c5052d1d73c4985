//! HTTP API server for laureates.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod response_types;
mod viewer;

use axum::{Json, Router, routing::get};
use handlebars::{Handlebars, TemplateError};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use laureates_service::QueryService;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Reads and ad-hoc inserts against the store
    pub query_service: Arc<QueryService>,
    /// Registered page templates
    pub templates: Handlebars<'static>,
}

impl AppState {
    /// Build the state and register the page templates.
    ///
    /// # Errors
    /// Returns error if a bundled template fails to parse.
    pub fn new(query_service: Arc<QueryService>) -> Result<Self, TemplateError> {
        Ok(Self { query_service, templates: viewer::templates()? })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_index))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/stats", get(handlers::views::stats))
        .route("/data/", get(handlers::views::winner_view))
        .route(
            "/nobelwinners/",
            get(handlers::winners::list_winners).post(handlers::winners::create_winner),
        )
        .route("/nobelwinners/{id}", get(handlers::winners::get_winner))
        .route(
            "/addresses/",
            get(handlers::addresses::list_addresses).post(handlers::addresses::create_address),
        )
        .route("/addresses/{id}", get(handlers::addresses::get_address))
        .route(
            "/organizations/",
            get(handlers::organizations::list_organizations)
                .post(handlers::organizations::create_organization),
        )
        .route("/organizations/{id}", get(handlers::organizations::get_organization))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
