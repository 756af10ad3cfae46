//! Local Identifier Allocation
//!
//! The demo resource echoes creates with an id it never persists, so every added
//! todo gets an id allocated here instead.

use crate::model::TodoId;

/// Monotonic id source, always above every id it has seen
///
/// `next` is `None` once the id space above the highest observed id is used up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalIdAllocator {
    next: Option<TodoId>,
}

impl Default for LocalIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalIdAllocator {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Record an id that exists elsewhere so it is never handed out
    pub fn observe(&mut self, id: TodoId) {
        if let Some(next) = self.next {
            if id >= next {
                self.next = id.checked_add(1);
            }
        }
    }

    /// Next unused id, or `None` when the counter is exhausted
    pub fn next_id(&mut self) -> Option<TodoId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}
