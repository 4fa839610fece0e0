//! Domain DTOs for the todo API.
//!
//! # Design
//! Ids are opaque: the backend decides whether they are numbers or strings,
//! and `TodoId` keeps whichever form arrived so it serializes back unchanged
//! into request paths and payloads.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a todo record.
///
/// Equality and hashing go through the rendered text, so `Number(42)` and
/// `Text("42")` name the same record, just as they name the same URL path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for TodoId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TodoId::Number(a), TodoId::Number(b)) => a == b,
            (TodoId::Text(a), TodoId::Text(b)) => a == b,
            (TodoId::Number(n), TodoId::Text(s)) | (TodoId::Text(s), TodoId::Number(n)) => n.to_string() == *s,
        }
    }
}

impl Eq for TodoId {}

impl Hash for TodoId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            TodoId::Number(n) => n.to_string().hash(state),
            TodoId::Text(s) => s.hash(state),
        }
    }
}

impl FromStr for TodoId {
    type Err = std::convert::Infallible;

    /// All-digit text becomes `Number`; anything else is kept verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(TodoId::Number)
            .unwrap_or_else(|_| TodoId::Text(s.to_string())))
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Number(n)
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request payload for flipping the completion flag of an existing todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTodo {
    pub completed: bool,
}
