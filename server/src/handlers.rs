//! Request handlers for the todo API.
//!
//! Handlers validate input, call one repository operation, and map the
//! result. They hold no state of their own beyond [`AppState`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::model::{CreateTodo, Todo, UpdateTodo, DEFAULT_USER_ID};
use crate::state::AppState;

/// `GET /v1/todos`
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state
        .repo
        .list()
        .map_err(|e| ApiError::from_repository(e, "failed to list todos"))?;
    Ok(Json(todos))
}

/// `POST /v1/todos`
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = body.inspect_err(|e| tracing::warn!(error = %e, "rejected create body"))?;
    let fields = input.into_fields().map_err(rejected)?;

    let todo = state
        .repo
        .create(DEFAULT_USER_ID, fields)
        .map_err(|e| ApiError::from_repository(e, "failed to create todo"))?;
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /v1/todos/{id}`
pub async fn update_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    let Json(input) = body.inspect_err(|e| tracing::warn!(%id, error = %e, "rejected update body"))?;
    let fields = input.into_fields().map_err(rejected)?;

    let todo = state
        .repo
        .update(&id, fields)
        .map_err(|e| ApiError::from_repository(e, "failed to update todo"))?;
    tracing::info!(%id, "updated todo");
    Ok(Json(todo))
}

/// `DELETE /v1/todos/{id}`
pub async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state
        .repo
        .delete(&id)
        .map_err(|e| ApiError::from_repository(e, "failed to delete todo"))?;
    tracing::info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /v1/todos/{id}/toggle`
pub async fn toggle_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    let todo = state
        .repo
        .toggle(&id)
        .map_err(|e| ApiError::from_repository(e, "failed to toggle todo"))?;
    tracing::info!(%id, completed = todo.completed, "toggled todo");
    Ok(Json(todo))
}

fn rejected(message: String) -> ApiError {
    tracing::warn!(reason = %message, "rejected todo fields");
    ApiError::Validation(message)
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Any route not in the table.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("not found".to_string())
}
