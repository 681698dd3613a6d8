//! Todo storage.
//!
//! # Design
//! [`TodoRepository`] is the seam between the HTTP layer and storage. Every
//! operation is synchronous and atomic with respect to the others.
//! [`MemoryTodoRepository`] keeps records in a `HashMap` behind a single
//! `std::sync::RwLock`: `list` takes the read lock, every mutation takes the
//! write lock for its whole read-modify-write, and no lock is held across an
//! `.await`. Callers only ever receive clones of stored records.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{Todo, TodoFields};

/// Failures returned by a [`TodoRepository`].
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The id does not resolve to a live record.
    #[error("todo not found")]
    NotFound,

    /// Anything else that went wrong inside the store.
    #[error("storage failure: {0}")]
    Internal(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(err: PoisonError<T>) -> Self {
        RepositoryError::Internal(err.to_string())
    }
}

/// Storage contract for todo records.
pub trait TodoRepository: Send + Sync + 'static {
    /// Snapshot of every stored record, in no particular order.
    fn list(&self) -> Result<Vec<Todo>, RepositoryError>;

    /// Store a new record owned by `user_id`. The repository assigns the id
    /// and both timestamps.
    fn create(&self, user_id: &str, fields: TodoFields) -> Result<Todo, RepositoryError>;

    /// Replace the four mutable fields of `id`.
    fn update(&self, id: &str, fields: TodoFields) -> Result<Todo, RepositoryError>;

    fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Flip `completed` on `id`.
    fn toggle(&self, id: &str) -> Result<Todo, RepositoryError>;
}

/// In-process store; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTodoRepository {
    todos: RwLock<HashMap<String, Todo>>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `mutate` to the record under the write lock and stamp
    /// `updated_at`.
    fn modify<F>(&self, id: &str, mutate: F) -> Result<Todo, RepositoryError>
    where
        F: FnOnce(&mut Todo),
    {
        let mut todos = self.todos.write()?;
        let todo = todos.get_mut(id).ok_or(RepositoryError::NotFound)?;
        mutate(todo);
        todo.updated_at = touch(todo.updated_at);
        Ok(todo.clone())
    }
}

impl TodoRepository for MemoryTodoRepository {
    fn list(&self) -> Result<Vec<Todo>, RepositoryError> {
        let todos = self.todos.read()?;
        Ok(todos.values().cloned().collect())
    }

    fn create(&self, user_id: &str, fields: TodoFields) -> Result<Todo, RepositoryError> {
        let mut todos = self.todos.write()?;

        let mut id = Uuid::new_v4().to_string();
        while todos.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let now = Utc::now();
        let todo = Todo {
            id: id.clone(),
            user_id: user_id.to_string(),
            title: fields.title,
            description: fields.description,
            priority: fields.priority,
            completed: fields.completed,
            created_at: now,
            updated_at: now,
        };
        todos.insert(id, todo.clone());
        Ok(todo)
    }

    fn update(&self, id: &str, fields: TodoFields) -> Result<Todo, RepositoryError> {
        self.modify(id, |todo| {
            todo.title = fields.title;
            todo.description = fields.description;
            todo.priority = fields.priority;
            todo.completed = fields.completed;
        })
    }

    fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut todos = self.todos.write()?;
        todos
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn toggle(&self, id: &str) -> Result<Todo, RepositoryError> {
        self.modify(id, |todo| todo.completed = !todo.completed)
    }
}

/// Current time, clamped so a record's `updated_at` never moves backwards
/// when the wall clock does.
fn touch(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
