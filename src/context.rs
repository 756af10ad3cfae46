//! Application Context
//!
//! The todo state signal and the controller, provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{ClientConfig, HttpTodoApi, StateCell, TodoController, TodoState};

pub type Controller = TodoController<HttpTodoApi>;

/// `TodoState` held in a reactive signal
#[derive(Clone, Copy)]
pub struct TodoSignal(RwSignal<TodoState>);

impl TodoSignal {
    pub fn new(state: TodoState) -> Self {
        Self(RwSignal::new(state))
    }

    /// Tracked read, for use inside views and effects
    pub fn with<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        self.0.with(f)
    }
}

impl StateCell for TodoSignal {
    fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> R {
        let mut state = self.0.write();
        f(&mut *state)
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    pub todos: TodoSignal,
    controller: StoredValue<Controller, LocalStorage>,
}

impl TodoContext {
    pub fn new(config: ClientConfig) -> Self {
        let controller = TodoController::new(HttpTodoApi::new(config.clone()), config);
        Self {
            todos: TodoSignal::new(controller.initial_state()),
            controller: StoredValue::new_local(controller),
        }
    }

    /// Owned handle to move into a spawned task
    pub fn controller(&self) -> Controller {
        self.controller.get_value()
    }
}

pub fn use_todo_context() -> TodoContext {
    use_context::<TodoContext>().expect("TodoContext should be provided")
}
