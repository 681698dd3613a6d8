//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::repository::{MemoryTodoRepository, TodoRepository};

/// Cloned into each request by axum; clones share one repository.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TodoRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// State backed by a fresh, empty [`MemoryTodoRepository`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTodoRepository::new()))
    }
}
