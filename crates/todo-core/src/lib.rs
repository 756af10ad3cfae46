//! Todo Core
//!
//! Layered the same way on every target:
//! - model: Todo entities as they appear on the wire
//! - api: remote resource client (trait + reqwest implementation)
//! - state: list controller state machine, no I/O
//! - controller: async driver that runs state transitions around api calls

mod config;
mod error;
mod ids;
mod model;

pub mod api;
pub mod controller;
pub mod state;

pub use api::{HttpTodoApi, TodoApi};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT};
pub use controller::{StateCell, TodoController};
pub use error::{ApiError, ApiResult};
pub use ids::LocalIdAllocator;
pub use model::{NewTodo, Todo, TodoId, DEFAULT_USER_ID};
pub use state::{EditSession, Failure, Operation, Phase, TodoState};
