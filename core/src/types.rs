//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; integration tests catch any schema drift between
//! the two. Ids are server-assigned sequential integers, so the create
//! payload is a separate type without an `id` field.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier.
pub type TodoId = i64;

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub content: String,
    pub pending: bool,
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub content: String,
    pub pending: bool,
}

impl NewTodo {
    /// A freshly submitted todo always starts in the pending column.
    pub fn pending(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            pending: true,
        }
    }
}
