//! Shared application state for all routes. Built once at startup and cloned per request.

use crate::service::StudentService;
use crate::store::StudentStore;
use axum::http::HeaderValue;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
    /// The only origin accepted on cross-origin requests.
    pub allowed_origin: HeaderValue,
}

impl AppState {
    pub fn new(store: Arc<dyn StudentStore>, allowed_origin: HeaderValue) -> Self {
        Self {
            students: StudentService::new(store),
            allowed_origin,
        }
    }
}
