//! Todo record and request bodies.
//!
//! # Design
//! `Todo` is the stored shape and the response shape; the repository hands
//! out clones so no response ever aliases stored state. Request bodies are
//! separate types so server-controlled fields (`id`, `user_id`, timestamps)
//! can never be set by a client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner tag stamped on every record. The service is single-tenant.
pub const DEFAULT_USER_ID: &str = "default";

/// A single todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The client-mutable part of a todo, as handed to the repository.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub completed: bool,
}

/// Body of `POST /v1/todos`. A `completed` field, if sent, is ignored.
/// Optional fields accept both a missing key and an explicit `null`.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
}

/// Body of `PUT /v1/todos/{id}`. Replaces all four mutable fields.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub completed: Option<bool>,
}

impl CreateTodo {
    /// Validate the body and produce the fields of a new record.
    ///
    /// `completed` always starts out false.
    pub fn into_fields(self) -> Result<TodoFields, String> {
        Ok(TodoFields {
            title: require_title(self.title)?,
            description: self.description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            completed: false,
        })
    }
}

impl UpdateTodo {
    pub fn into_fields(self) -> Result<TodoFields, String> {
        Ok(TodoFields {
            title: require_title(self.title)?,
            description: self.description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            completed: self.completed.unwrap_or_default(),
        })
    }
}

fn require_title(title: Option<String>) -> Result<String, String> {
    match title {
        Some(title) if !title.trim().is_empty() => Ok(title),
        Some(_) => Err("title must not be empty".to_string()),
        None => Err("title is required".to_string()),
    }
}
