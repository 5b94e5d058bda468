//! Router assembly: common routes, `/api/students`, and the CORS/origin/trace stack.

mod common;
mod student;

pub use common::common_routes;
pub use student::student_routes;

use crate::handlers::origin_guard;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const API_PREFIX: &str = "/api";

/// CORS for exactly one origin.
pub fn cors_layer(state: &AppState) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(state.allowed_origin.clone())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// The full application router. Layers run top to bottom: tracing, origin guard, CORS.
/// Bodies over `max_body_bytes` are refused with 413 when the JSON extractor buffers them.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(API_PREFIX, student_routes(state.clone()))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(state.clone(), origin_guard))
                .layer(cors_layer(&state)),
        )
}
