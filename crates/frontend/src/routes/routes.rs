use crate::dashboards::EcommerceDashboard;
use crate::domain::a001_order::ui::list::OrderList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::pages::Page;
use crate::layout::right::panel::RightPanel;
use crate::layout::Shell;
use leptos::prelude::*;

/// Content of the center zone for the active page.
#[component]
fn ActivePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.active.get() {
        Page::EcommerceDashboard => view! { <EcommerceDashboard /> }.into_any(),
        Page::OrderList => view! { <OrderList /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
            right=|| view! { <RightPanel /> }.into_any()
        />
    }
}
