//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle and breadcrumb of the active page
//! - Search box
//! - Theme toggle
//! - Notifications and right panel toggles

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <button class="top-header__icon-btn" title="Favorite">
                    {icon("star")}
                </button>
                <nav class="breadcrumb">
                    <span class="breadcrumb__section">{move || ctx.active.get().section()}</span>
                    <span class="breadcrumb__separator">"/"</span>
                    <span class="breadcrumb__current">{move || ctx.active.get().title()}</span>
                </nav>
            </div>

            <div class="top-header__actions">
                <div class="top-header__search">
                    {icon("search")}
                    <input type="text" placeholder="Search" />
                    <kbd>"⌘/"</kbd>
                </div>

                <ThemeToggle />

                <button class="top-header__icon-btn" title="History">
                    {icon("history")}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_right()
                    title="Notifications"
                >
                    {icon("bell")}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_right()
                    title=move || if is_right_panel_visible() { "Hide right panel" } else { "Show right panel" }
                >
                    {icon("panel-right")}
                </button>
            </div>
        </div>
    }
}
