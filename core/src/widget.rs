//! Lockscreen widget payload.
//!
//! The widget cannot talk to the API. The app writes a short JSON array of
//! `{id, title, completed}` into storage shared with the widget, and the
//! widget renders at most [`WIDGET_LIMIT`] rows from it.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::Todo;

/// Rows the widget has room for.
pub const WIDGET_LIMIT: usize = 3;

/// One widget row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl From<&Todo> for WidgetItem {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            completed: todo.completed,
        }
    }
}

/// Pick the `limit` todos worth showing: open before done, then higher
/// priority, then most recently updated. Ties fall back to id so the result
/// does not depend on the order the server listed them in.
///
/// The widget takes the first rows of the payload as-is; this ordering is
/// decided here, on the app side.
pub fn widget_items(todos: &[Todo], limit: usize) -> Vec<WidgetItem> {
    let mut ranked: Vec<&Todo> = todos.iter().collect();
    ranked.sort_by(|a, b| rank(a).cmp(&rank(b)));
    ranked.into_iter().take(limit).map(WidgetItem::from).collect()
}

fn rank(todo: &Todo) -> (bool, Reverse<i64>, Reverse<DateTime<Utc>>, &str) {
    (
        todo.completed,
        Reverse(todo.priority),
        Reverse(todo.updated_at),
        todo.id.as_str(),
    )
}

/// JSON array for the widget's shared storage, using [`WIDGET_LIMIT`].
pub fn widget_payload(todos: &[Todo]) -> Result<String, ApiError> {
    serde_json::to_string(&widget_items(todos, WIDGET_LIMIT))
        .map_err(|e| ApiError::SerializationError(e.to_string()))
}
