//! Router assembly for the todo API.

use axum::routing::{get, patch, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete router. Paths use axum 0.8 `/{param}` syntax and
/// `TraceLayer` opens a span per request.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/v1/todos/{id}",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .route("/v1/todos/{id}/toggle", patch(handlers::toggle_todo))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
