use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use contracts::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!(
        "dashboard: page sizes {:?}, default {}",
        config.orders.page_size_options,
        config.orders.default_page_size
    );
    let storage_key = config.theme.storage_key.clone();

    // Provide configuration and the AppGlobalContext store to the whole app via context.
    provide_context(config);
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider storage_key=storage_key>
            <AppRoutes />
        </ThemeProvider>
    }
}
