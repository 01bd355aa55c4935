use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.right_open.get();

    view! {
        <aside
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !is_open()
            aria-label="Notifications"
        >
            {children()}
        </aside>
    }
}
