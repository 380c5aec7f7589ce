//! Funcionarios API module

mod handler;

use axum::{routing::get, Router};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/funcionarios", get(handler::list).post(handler::create))
        .route(
            "/funcionarios/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
