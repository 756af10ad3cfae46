//! TodoController against an in-process fake of the remote resource.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use async_trait::async_trait;

use todo_core::{
    ApiError, ApiResult, ClientConfig, NewTodo, Operation, Phase, Todo, TodoApi, TodoController,
    TodoId, TodoState,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    List(usize),
    Create(NewTodo),
    Replace(Todo),
    Delete(TodoId),
}

/// Serves a fixed collection and records every call
struct FakeApi {
    todos: Vec<Todo>,
    fail: bool,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    fn with_todos(count: u64) -> Self {
        let todos = (1..=count)
            .map(|id| Todo {
                completed: id % 3 == 0,
                ..Todo::new(id, format!("todo {id}"))
            })
            .collect();
        Self {
            todos,
            fail: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_todos(0)
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn replace_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Replace(_)))
            .count()
    }

    fn outcome(&self) -> ApiResult<()> {
        if self.fail {
            Err(ApiError::Status { status: 500 })
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn list(&self, limit: usize) -> ApiResult<Vec<Todo>> {
        self.calls.borrow_mut().push(Call::List(limit));
        self.outcome()?;
        Ok(self.todos.iter().take(limit).cloned().collect())
    }

    async fn create(&self, draft: &NewTodo) -> ApiResult<Todo> {
        self.calls.borrow_mut().push(Call::Create(draft.clone()));
        self.outcome()?;
        // Same as the demo resource: every create echoes id 201
        Ok(Todo {
            id: 201,
            title: draft.title.clone(),
            completed: draft.completed,
            user_id: draft.user_id,
        })
    }

    async fn replace(&self, todo: &Todo) -> ApiResult<()> {
        self.calls.borrow_mut().push(Call::Replace(todo.clone()));
        self.outcome()
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        self.calls.borrow_mut().push(Call::Delete(id));
        self.outcome()
    }
}

fn setup(api: FakeApi) -> (Rc<FakeApi>, TodoController<Rc<FakeApi>>, RefCell<TodoState>) {
    let api = Rc::new(api);
    let controller = TodoController::new(api.clone(), ClientConfig::default());
    let state = RefCell::new(controller.initial_state());
    (api, controller, state)
}

async fn loaded(api: FakeApi) -> (Rc<FakeApi>, TodoController<Rc<FakeApi>>, RefCell<TodoState>) {
    let (api, controller, state) = setup(api);
    controller.load(&state).await;
    (api, controller, state)
}

fn ids(state: &RefCell<TodoState>) -> Vec<TodoId> {
    state.borrow().items().iter().map(|t| t.id).collect()
}

#[tokio::test]
async fn test_initial_load_populates_rows_in_remote_order() {
    let (api, _controller, state) = loaded(FakeApi::with_todos(7)).await;
    assert_eq!(api.calls(), vec![Call::List(10)]);
    assert_eq!(state.borrow().phase(), Phase::Ready);
    assert_eq!(ids(&state), vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(state.borrow().items()[2].completed);
}

#[tokio::test]
async fn test_initial_load_is_capped_at_ten() {
    let (_api, _controller, state) = loaded(FakeApi::with_todos(200)).await;
    assert_eq!(state.borrow().items().len(), 10);
}

#[tokio::test]
async fn test_failed_load_leaves_collection_empty() {
    let (_api, _controller, state) = loaded(FakeApi::failing()).await;
    let state = state.borrow();
    assert_eq!(state.phase(), Phase::Ready);
    assert!(state.items().is_empty());
    assert!(!state.error_message().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_add_issues_no_call() {
    let (api, controller, state) = loaded(FakeApi::with_todos(3)).await;
    for input in ["", "   ", "\t\n"] {
        controller.set_draft(&state, input.to_string());
        assert!(controller.add(&state).await.is_none());
    }
    assert_eq!(api.calls().len(), 1);
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_add_appends_unique_incomplete_item() {
    let (api, controller, state) = loaded(FakeApi::with_todos(10)).await;
    controller.set_draft(&state, "Buy milk".to_string());
    let first = controller.add(&state).await.unwrap();

    controller.set_draft(&state, "Buy eggs".to_string());
    let second = controller.add(&state).await.unwrap();

    let state = state.borrow();
    let added = state.get(first).unwrap();
    assert_eq!(added.title, "Buy milk");
    assert!(!added.completed);
    assert_eq!(state.items().len(), 12);
    assert_eq!(state.draft(), "");

    let unique: HashSet<_> = state.items().iter().map(|t| t.id).collect();
    assert_eq!(unique.len(), 12);
    assert_ne!(first, second);
    assert_eq!(
        api.calls()[1],
        Call::Create(NewTodo::new("Buy milk"))
    );
}

#[tokio::test]
async fn test_toggle_twice_restores_flag() {
    let (api, controller, state) = loaded(FakeApi::with_todos(3)).await;
    let before = state.borrow().get(2).unwrap().completed;

    assert!(controller.toggle(&state, 2).await);
    assert_eq!(state.borrow().get(2).unwrap().completed, !before);
    assert!(controller.toggle(&state, 2).await);
    assert_eq!(state.borrow().get(2).unwrap().completed, before);

    assert_eq!(api.replace_calls(), 2);
    match &api.calls()[1] {
        Call::Replace(body) => {
            assert_eq!(body.id, 2);
            assert_eq!(body.completed, !before);
            assert_eq!(body.title, "todo 2");
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let (api, controller, state) = loaded(FakeApi::with_todos(5)).await;
    let before: Vec<Todo> = state.borrow().items().to_vec();

    assert!(controller.delete(&state, 3).await);
    assert_eq!(api.calls().last(), Some(&Call::Delete(3)));

    let expected: Vec<Todo> = before.into_iter().filter(|t| t.id != 3).collect();
    assert_eq!(state.borrow().items(), expected.as_slice());
}

#[tokio::test]
async fn test_delete_unknown_id_issues_nothing() {
    let (api, controller, state) = loaded(FakeApi::with_todos(2)).await;
    assert!(!controller.delete(&state, 99).await);
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_edit_confirm_replaces_title() {
    let (api, controller, state) = loaded(FakeApi::with_todos(3)).await;
    assert!(controller.start_edit(&state, 3));
    controller.set_edit_buffer(&state, "rewritten".to_string());
    assert!(controller.confirm_edit(&state, 3).await);

    let state = state.borrow();
    let todo = state.get(3).unwrap();
    assert_eq!(todo.title, "rewritten");
    assert!(todo.completed);
    assert!(state.editing().is_none());
    assert_eq!(
        api.calls().last(),
        Some(&Call::Replace(Todo {
            title: "rewritten".to_string(),
            ..todo.clone()
        }))
    );
}

#[tokio::test]
async fn test_cancel_edit_issues_nothing() {
    let (api, controller, state) = loaded(FakeApi::with_todos(3)).await;
    controller.start_edit(&state, 1);
    controller.set_edit_buffer(&state, "ignored".to_string());
    controller.cancel_edit(&state);

    assert!(!controller.confirm_edit(&state, 1).await);
    assert_eq!(api.calls().len(), 1);
    assert_eq!(state.borrow().get(1).unwrap().title, "todo 1");
}

#[tokio::test]
async fn test_failures_set_scoped_error_and_keep_state() {
    let (_api, controller, state) = setup(FakeApi::failing());
    state.borrow_mut().finish_load(Ok(vec![Todo::new(1, "only")]));

    controller.start_edit(&state, 1);
    controller.set_edit_buffer(&state, "new".to_string());
    assert!(controller.confirm_edit(&state, 1).await);
    assert_eq!(state.borrow().error().unwrap().operation, Operation::Edit);
    assert!(state.borrow().is_editing(1));
    assert_eq!(state.borrow().get(1).unwrap().title, "only");

    assert!(controller.toggle(&state, 1).await);
    assert_eq!(state.borrow().error_message(), Some("Failed to update todo status"));
    assert!(!state.borrow().get(1).unwrap().completed);

    assert!(controller.delete(&state, 1).await);
    assert_eq!(state.borrow().error_message(), Some("Failed to delete todo"));
    assert_eq!(ids(&state), vec![1]);

    controller.dismiss_error(&state);
    assert!(state.borrow().error().is_none());
}
