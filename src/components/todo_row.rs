//! Todo Row Component
//!
//! One item: checkbox, title and edit/delete, or the inline editor while editing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::TodoId;

use crate::components::ui::{Button, ButtonSize, ButtonVariant, TextInput};
use crate::context::use_todo_context;

#[component]
pub fn TodoRow(id: TodoId) -> impl IntoView {
    let ctx = use_todo_context();
    let todos = ctx.todos;

    let todo = Memo::new(move |_| todos.with(|s| s.get(id).cloned()));
    let title = move || todo.get().map(|t| t.title).unwrap_or_default();
    let completed = move || todo.get().is_some_and(|t| t.completed);
    let pending = Signal::derive(move || todos.with(|s| s.is_pending(id)));
    let editing = move || todos.with(|s| s.is_editing(id));
    let buffer = Signal::derive(move || {
        todos.with(|s| s.editing().map(|e| e.buffer.clone()).unwrap_or_default())
    });

    // The checkbox is controlled: the click is cancelled and `checked` follows state
    let on_toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.toggle(&todos, id).await;
        });
    };
    let on_edit = Callback::new(move |_: ()| {
        ctx.controller().start_edit(&todos, id);
    });
    let on_delete = Callback::new(move |_: ()| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.delete(&todos, id).await;
        });
    });
    let on_confirm = Callback::new(move |_: ()| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.confirm_edit(&todos, id).await;
        });
    });
    let on_cancel = Callback::new(move |_: ()| ctx.controller().cancel_edit(&todos));

    view! {
        <div class=move || if pending.get() { "todo-row pending" } else { "todo-row" }>
            <input
                type="checkbox"
                class="todo-check"
                prop:checked=move || {
                    pending.track();
                    completed()
                }
                disabled=move || pending.get()
                on:click=on_toggle
            />

            <Show
                when=editing
                fallback=move || view! {
                    <span class=move || if completed() { "todo-title completed" } else { "todo-title" }>
                        {title}
                    </span>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        title="Edit"
                        disabled=pending
                        on_click=on_edit
                    >
                        "✎"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        title="Delete"
                        disabled=pending
                        on_click=on_delete
                    >
                        "🗑"
                    </Button>
                }
            >
                <div class="todo-edit">
                    <TextInput
                        value=buffer
                        on_input=Callback::new(move |text: String| ctx.controller().set_edit_buffer(&todos, text))
                        class="flex-1"
                    />
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        title="Save"
                        disabled=pending
                        on_click=on_confirm
                    >
                        "✓"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        title="Cancel"
                        on_click=on_cancel
                    >
                        "✗"
                    </Button>
                </div>
            </Show>
        </div>
    }
}
