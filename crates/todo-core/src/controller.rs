//! List Controller
//!
//! Runs `TodoState` transitions around remote calls. The state lives wherever the
//! caller keeps it (a `RefCell` in tests, a reactive signal in the browser), so it
//! is reached only through `StateCell` and never borrowed across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::api::TodoApi;
use crate::config::ClientConfig;
use crate::model::TodoId;
use crate::state::TodoState;

/// Somewhere a `TodoState` lives
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R;
    fn update_state<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> R;
}

impl StateCell for RefCell<TodoState> {
    fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        f(&*self.borrow())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

impl<T: StateCell + ?Sized> StateCell for Rc<T> {
    fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        (**self).with_state(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> R {
        (**self).update_state(f)
    }
}

/// Orchestrates remote calls for one collection
#[derive(Debug, Clone)]
pub struct TodoController<A> {
    api: A,
    config: ClientConfig,
}

impl<A: TodoApi> TodoController<A> {
    pub fn new(api: A, config: ClientConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Empty state sized for this controller's list limit
    pub fn initial_state(&self) -> TodoState {
        TodoState::new(self.config.list_limit)
    }

    /// Initial fetch; the state is `Ready` afterwards whatever the outcome
    pub async fn load<S: StateCell>(&self, state: &S) {
        let result = self.api.list(self.config.list_limit).await;
        state.update_state(|s| s.finish_load(result));
        info!(
            "initial load done: {} todos",
            state.with_state(|s| s.items().len())
        );
    }

    /// Create the current draft; returns the local id given to the new todo
    pub async fn add<S: StateCell>(&self, state: &S) -> Option<TodoId> {
        let draft = state.with_state(|s| s.begin_add())?;
        let result = self.api.create(&draft).await;
        state.update_state(|s| s.finish_add(result))
    }

    pub fn set_draft<S: StateCell>(&self, state: &S, text: String) {
        state.update_state(|s| s.set_draft(text));
    }

    pub fn start_edit<S: StateCell>(&self, state: &S, id: TodoId) -> bool {
        state.update_state(|s| s.start_edit(id))
    }

    pub fn set_edit_buffer<S: StateCell>(&self, state: &S, text: String) {
        state.update_state(|s| s.set_edit_buffer(text));
    }

    pub fn cancel_edit<S: StateCell>(&self, state: &S) {
        state.update_state(|s| s.cancel_edit());
    }

    /// Send the edit buffer as the new title; `false` if no request was issued
    pub async fn confirm_edit<S: StateCell>(&self, state: &S, id: TodoId) -> bool {
        let Some(body) = state.update_state(|s| s.begin_confirm_edit(id)) else {
            return false;
        };
        let result = self.api.replace(&body).await;
        state.update_state(|s| s.finish_confirm_edit(&body, result));
        true
    }

    /// Flip the completion flag; `false` if no request was issued
    pub async fn toggle<S: StateCell>(&self, state: &S, id: TodoId) -> bool {
        let Some(body) = state.update_state(|s| s.begin_toggle(id)) else {
            return false;
        };
        let result = self.api.replace(&body).await;
        state.update_state(|s| s.finish_toggle(&body, result));
        true
    }

    /// Delete by id; `false` if no request was issued
    pub async fn delete<S: StateCell>(&self, state: &S, id: TodoId) -> bool {
        if !state.update_state(|s| s.begin_delete(id)) {
            return false;
        }
        let result = self.api.delete(id).await;
        state.update_state(|s| s.finish_delete(id, result));
        true
    }

    pub fn dismiss_error<S: StateCell>(&self, state: &S) {
        state.update_state(|s| s.dismiss_error());
    }
}
