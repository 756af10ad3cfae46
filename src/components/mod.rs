//! UI Components
//!
//! Reusable Leptos components.

pub mod ui;

mod new_todo_form;
mod todo_app;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use todo_app::TodoApp;
pub use todo_row::TodoRow;
