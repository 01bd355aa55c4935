//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

const FAVORITES: [(&str, &str); 2] = [("fav_overview", "Overview"), ("fav_projects", "Projects")];

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "pie-chart",
            items: vec![
                ("dash_default", "Default", "layout-dashboard"),
                (Page::EcommerceDashboard.key(), "eCommerce", "shopping-bag"),
                ("dash_projects", "Projects", "folder"),
                ("dash_online_courses", "Online Courses", "book"),
            ],
        },
        MenuGroup {
            id: "pages",
            label: "Pages",
            icon: "file-text",
            items: vec![
                (Page::OrderList.key(), "Orders", "package"),
                ("page_user_profile", "User Profile", "user"),
                ("page_account", "Account", "id-card"),
                ("page_corporate", "Corporate", "users"),
                ("page_blog", "Blog", "file-text"),
                ("page_social", "Social", "message-square"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["dashboards".to_string(), "pages".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <span class="avatar avatar--small">"BW"</span>
                <span>"ByeWind"</span>
            </div>

            <div class="app-sidebar__section">
                <div class="app-sidebar__section-title">"Favorites"</div>
                {FAVORITES.iter().map(|(_, label)| view! {
                    <div class="app-sidebar__item app-sidebar__item--muted">
                        <span class="app-sidebar__bullet"></span>
                        <span>{*label}</span>
                    </div>
                }).collect_view()}
            </div>

            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div class="app-sidebar__section">
                        <div
                            class="app-sidebar__item app-sidebar__group"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    let has_page = Page::from_key(id).is_some();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.is_active(id)
                                            class:app-sidebar__item--muted={!has_page}
                                            on:click=move |_| {
                                                ctx.open_page(id);
                                            }
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
