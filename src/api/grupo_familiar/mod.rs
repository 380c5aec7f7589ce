//! Grupo Familiar API module

mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/grupo-familiar", post(handler::create))
        // Fixed segment before /{id} to avoid a path conflict
        .route("/grupo-familiar/buscar", get(handler::search))
        .route(
            "/grupo-familiar/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/funcionarios/{id}/grupo-familiar",
            get(handler::get_by_funcionario),
        )
}
