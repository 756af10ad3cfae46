//! Todo Models
//!
//! Data structures matching the remote `/todos` resource.

use serde::{Deserialize, Serialize};

/// Identifier of a todo, remote-issued or allocated locally on add
pub type TodoId = u64;

/// Owner id sent with every write; the demo resource has no users to choose from
pub const DEFAULT_USER_ID: u32 = 1;

/// Todo data structure (matches the remote resource)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Missing on some create echoes, replaced locally anyway
    #[serde(default)]
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "userId", default = "default_user_id")]
    pub user_id: u32,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            user_id: DEFAULT_USER_ID,
        }
    }

    /// Full replacement body carrying a new title
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Full replacement body carrying a new completion flag
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            user_id: DEFAULT_USER_ID,
        }
    }
}

fn default_user_id() -> u32 {
    DEFAULT_USER_ID
}
