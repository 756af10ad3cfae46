//! New Todo Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ui::{Button, TextInput};
use crate::context::use_todo_context;

/// Input plus submit button; blank input is ignored by the controller
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();
    let todos = ctx.todos;

    let draft = Signal::derive(move || todos.with(|s| s.draft().to_string()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.add(&todos).await;
        });
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <TextInput
                value=draft
                on_input=Callback::new(move |text: String| ctx.controller().set_draft(&todos, text))
                placeholder="Add a new todo..."
                class="flex-1"
            />
            <Button submit=true>"Add Todo"</Button>
        </form>
    }
}
