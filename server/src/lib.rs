//! HTTP API for the lockscreen todo app.
//!
//! # Overview
//! A thin request/response layer over an in-memory todo store. Five todo
//! endpoints under `/v1/todos` plus `/health`.
//!
//! # Design
//! - [`repository::TodoRepository`] is the storage seam; the only backend is
//!   [`repository::MemoryTodoRepository`].
//! - The repository is injected through [`state::AppState`]; there is no
//!   global state, so every [`app`] call starts from an empty store.
//! - [`error::ApiError`] is the sole mapping from domain errors to HTTP.

pub mod config;
pub mod error;
pub mod handlers;
#[cfg(test)]
mod log_capture;
pub mod model;
pub mod repository;
pub mod router;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub use model::{Todo, DEFAULT_USER_ID};
pub use repository::{MemoryTodoRepository, RepositoryError, TodoRepository};
pub use state::AppState;

/// Router over a fresh in-memory store.
pub fn app() -> Router {
    router::build_router(AppState::in_memory())
}

/// Router over a caller-supplied repository.
pub fn app_with_repository(repo: Arc<dyn TodoRepository>) -> Router {
    router::build_router(AppState::new(repo))
}

/// Serve [`app`] on `listener` until the process stops.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
