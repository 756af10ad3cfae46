use leptos::prelude::*;

/// Banner box; `destructive` switches to the error palette
#[component]
pub fn Alert(
    #[prop(optional)] destructive: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let variant = if destructive { "alert alert-destructive" } else { "alert" };
    view! {
        <div class=format!("{} {}", variant, class) role="alert">
            {children()}
        </div>
    }
}

#[component]
pub fn AlertDescription(children: Children) -> impl IntoView {
    view! { <p class="alert-description">{children()}</p> }
}
