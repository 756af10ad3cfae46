//! Todo App Component
//!
//! The list controller: fetches on mount, then renders the card with the error
//! banner, the add form and one row per todo.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::ClientConfig;

use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, Spinner,
};
use crate::components::{NewTodoForm, TodoRow};
use crate::context::TodoContext;

#[component]
pub fn TodoApp() -> impl IntoView {
    let ctx = TodoContext::new(ClientConfig::default());
    provide_context(ctx);
    let todos = ctx.todos;

    // Load once on mount
    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.load(&todos).await;
        });
    });

    let loading = move || todos.with(|s| s.is_loading());
    let error = move || todos.with(|s| s.error_message().map(str::to_string));
    let rows = move || todos.with(|s| s.items().iter().map(|t| t.id).collect::<Vec<_>>());

    view! {
        <Show when=move || !loading() fallback=|| view! { <Spinner /> }>
            <Card class="todo-card">
                <CardHeader>
                    <CardTitle>"Todo List"</CardTitle>
                </CardHeader>
                <CardContent>
                    {move || error().map(|message| view! {
                        <Alert destructive=true class="mb-4">
                            <AlertDescription>{message}</AlertDescription>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                title="Dismiss"
                                on_click=Callback::new(move |_: ()| ctx.controller().dismiss_error(&todos))
                            >
                                "×"
                            </Button>
                        </Alert>
                    })}

                    <NewTodoForm />

                    <div class="todo-list">
                        <For
                            each=rows
                            key=|id| *id
                            children=move |id| view! { <TodoRow id=id /> }
                        />
                    </div>

                    <p class="todo-count">
                        {move || todos.with(|s| {
                            let done = s.items().iter().filter(|t| t.completed).count();
                            format!("{} todos, {} done", s.items().len(), done)
                        })}
                    </p>
                </CardContent>
            </Card>
        </Show>
    }
}
