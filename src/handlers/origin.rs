//! Reject cross-origin requests from anything but the configured origin.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::ORIGIN,
    middleware::Next,
    response::Response,
};

/// Requests without an `Origin` header pass through; a mismatched origin gets 403
/// before any handler runs.
pub async fn origin_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = request.headers().get(ORIGIN) {
        if origin != &state.allowed_origin {
            let origin = String::from_utf8_lossy(origin.as_bytes()).into_owned();
            tracing::warn!(%origin, "rejected cross-origin request");
            return Err(AppError::ForbiddenOrigin(origin));
        }
    }
    Ok(next.run(request).await)
}
