//! PageFrame: root wrapper of every page rendered in the center zone.
//!
//! Sets two metadata attributes on the root element:
//!   - `id`                  is `"{page_key}--{category}"`, e.g. `"a001_order_list--list"`
//!   - `data-page-category`  is one of the PAGE_CAT_* constants

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Root wrapper with the BEM modifier of its category.
#[component]
pub fn PageFrame(
    /// HTML id in format `{page_key}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
