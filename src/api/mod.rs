//! API route modules
//!
//! - [`health`] - health probe
//! - [`funcionarios`] - employee CRUD
//! - [`grupo_familiar`] - family-group CRUD and search
//!
//! Handlers are thin glue: decode the request, call the repository, wrap the
//! outcome in the response envelope.

pub mod funcionarios;
pub mod grupo_familiar;
pub mod health;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(funcionarios::router())
        .merge(grupo_familiar::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
