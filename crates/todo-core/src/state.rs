//! List Controller State
//!
//! Owns the in-memory collection and every transition applied to it. Each remote
//! operation is split in two: `begin_*` decides whether a request is issued and
//! returns its body, `finish_*` applies the response once it arrives. Nothing in
//! this module performs I/O.

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::config::DEFAULT_LIST_LIMIT;
use crate::error::{ApiError, ApiResult};
use crate::ids::LocalIdAllocator;
use crate::model::{NewTodo, Todo, TodoId};

/// Whether the initial fetch has resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
}

/// The one todo whose title is being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TodoId,
    pub buffer: String,
}

/// Remote operation kinds, used to scope the error banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Edit,
    Toggle,
    Delete,
}

impl Operation {
    /// User-facing message shown when this operation fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Load => "Failed to fetch todos",
            Operation::Add => "Failed to add todo",
            Operation::Edit => "Failed to update todo",
            Operation::Toggle => "Failed to update todo status",
            Operation::Delete => "Failed to delete todo",
        }
    }
}

/// Last failed operation, shown until a later success or a dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub operation: Operation,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoState {
    phase: Phase,
    items: Vec<Todo>,
    draft: String,
    editing: Option<EditSession>,
    error: Option<Failure>,
    /// Ids with a Replace or Delete in flight
    pending: BTreeSet<TodoId>,
    ids: LocalIdAllocator,
    limit: usize,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_LIMIT)
    }
}

impl TodoState {
    pub fn new(limit: usize) -> Self {
        Self {
            phase: Phase::Loading,
            items: Vec::new(),
            draft: String::new(),
            editing: None,
            error: None,
            pending: BTreeSet::new(),
            ids: LocalIdAllocator::new(),
            limit,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing.as_ref().is_some_and(|session| session.id == id)
    }

    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|failure| failure.message.as_str())
    }

    pub fn is_pending(&self, id: TodoId) -> bool {
        self.pending.contains(&id)
    }

    // ========================
    // Initial load
    // ========================

    pub fn finish_load(&mut self, result: ApiResult<Vec<Todo>>) {
        match result {
            Ok(mut todos) => {
                todos.truncate(self.limit);
                for todo in &todos {
                    self.ids.observe(todo.id);
                }
                debug!("loaded {} todos", todos.len());
                self.items = todos;
                self.succeed();
            }
            Err(err) => {
                self.items.clear();
                self.fail(Operation::Load, &err);
            }
        }
        self.phase = Phase::Ready;
    }

    // ========================
    // Add
    // ========================

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Create body for the current draft, or `None` when it is blank
    pub fn begin_add(&self) -> Option<NewTodo> {
        if self.is_loading() {
            return None;
        }
        let title = self.draft.trim();
        if title.is_empty() {
            debug!("add refused: blank title");
            return None;
        }
        Some(NewTodo::new(title))
    }

    /// Append the echoed todo under a fresh local id; returns that id
    pub fn finish_add(&mut self, result: ApiResult<Todo>) -> Option<TodoId> {
        match result {
            Ok(echo) => {
                let id = match self.ids.next_id() {
                    Some(id) => id,
                    None => self.lowest_free_id(),
                };
                self.items.push(Todo { id, ..echo });
                self.draft.clear();
                self.succeed();
                Some(id)
            }
            Err(err) => {
                self.fail(Operation::Add, &err);
                None
            }
        }
    }

    // ========================
    // Edit
    // ========================

    /// Enter editing for `id`, seeding the buffer with its title
    pub fn start_edit(&mut self, id: TodoId) -> bool {
        let Some(title) = self.get(id).map(|todo| todo.title.clone()) else {
            return false;
        };
        if self.is_pending(id) {
            debug!("edit refused: todo {} has a request in flight", id);
            return false;
        }
        self.editing = Some(EditSession { id, buffer: title });
        true
    }

    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.buffer = text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Replacement body with the edited title and the current completion flag
    pub fn begin_confirm_edit(&mut self, id: TodoId) -> Option<Todo> {
        let session = self.editing.as_ref().filter(|session| session.id == id)?;
        let title = session.buffer.trim();
        if title.is_empty() {
            debug!("edit refused: blank title for todo {}", id);
            return None;
        }
        let body = self.get(id)?.with_title(title);
        self.mark_pending(id).then_some(body)
    }

    pub fn finish_confirm_edit(&mut self, body: &Todo, result: ApiResult<()>) {
        self.pending.remove(&body.id);
        match result {
            Ok(()) => {
                if let Some(todo) = self.items.iter_mut().find(|todo| todo.id == body.id) {
                    todo.title = body.title.clone();
                }
                if self.is_editing(body.id) {
                    self.editing = None;
                }
                self.succeed();
            }
            // Editing stays open with its buffer so the user can retry or cancel
            Err(err) => self.fail(Operation::Edit, &err),
        }
    }

    // ========================
    // Toggle
    // ========================

    /// Replacement body with the completion flag inverted
    pub fn begin_toggle(&mut self, id: TodoId) -> Option<Todo> {
        let body = self.get(id).map(|todo| todo.with_completed(!todo.completed))?;
        self.mark_pending(id).then_some(body)
    }

    pub fn finish_toggle(&mut self, body: &Todo, result: ApiResult<()>) {
        self.pending.remove(&body.id);
        match result {
            Ok(()) => {
                if let Some(todo) = self.items.iter_mut().find(|todo| todo.id == body.id) {
                    todo.completed = body.completed;
                }
                self.succeed();
            }
            Err(err) => self.fail(Operation::Toggle, &err),
        }
    }

    // ========================
    // Delete
    // ========================

    pub fn begin_delete(&mut self, id: TodoId) -> bool {
        self.get(id).is_some() && self.mark_pending(id)
    }

    pub fn finish_delete(&mut self, id: TodoId, result: ApiResult<()>) {
        self.pending.remove(&id);
        match result {
            Ok(()) => {
                self.items.retain(|todo| todo.id != id);
                if self.is_editing(id) {
                    self.editing = None;
                }
                self.succeed();
            }
            Err(err) => self.fail(Operation::Delete, &err),
        }
    }

    // ========================
    // Errors
    // ========================

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Smallest id absent from the collection, once the counter is exhausted
    fn lowest_free_id(&self) -> TodoId {
        let mut id = 1;
        while self.get(id).is_some() {
            id += 1;
        }
        id
    }

    fn mark_pending(&mut self, id: TodoId) -> bool {
        let inserted = self.pending.insert(id);
        if !inserted {
            debug!("refused: todo {} has a request in flight", id);
        }
        inserted
    }

    fn succeed(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, operation: Operation, err: &ApiError) {
        warn!("{:?} failed: {}", operation, err);
        self.error = Some(Failure {
            operation,
            message: operation.failure_message().to_string(),
        });
    }
}
