use super::use_theme;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Sun/moon button switching between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let is_dark = move || ctx.get_theme().is_dark();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || if is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
            aria-label="Toggle theme"
        >
            {move || if is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}
