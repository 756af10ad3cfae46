//! Todo Frontend App
//!
//! Root shell: mounts the todo list.

use leptos::prelude::*;

use crate::components::TodoApp;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <TodoApp />
        </div>
    }
}
