//! Right panel: notifications, activity feed and contacts.

use crate::shared::icons::icon;
use contracts::shared::activity::{initials, ACTIVITIES, CONTACTS, NOTIFICATIONS};
use leptos::prelude::*;

#[component]
pub fn RightPanel() -> impl IntoView {
    view! {
        <div class="app-panel__content">
            <section class="panel-section">
                <h3 class="panel-section__title">"Notifications"</h3>
                {NOTIFICATIONS.iter().map(|n| view! {
                    <div class="panel-item">
                        <span class={format!("panel-item__icon panel-item__icon--{}", n.kind.icon())}>
                            {icon(n.kind.icon())}
                        </span>
                        <div class="panel-item__body">
                            <span class="panel-item__text">{n.text}</span>
                            <span class="panel-item__time">{n.time}</span>
                        </div>
                    </div>
                }).collect_view()}
            </section>

            <section class="panel-section">
                <h3 class="panel-section__title">"Activities"</h3>
                {ACTIVITIES.iter().map(|a| view! {
                    <div class="panel-item panel-item--timeline">
                        <img class="avatar avatar--small" src=a.avatar alt="" />
                        <div class="panel-item__body">
                            <span class="panel-item__text">{a.text}</span>
                            <span class="panel-item__time">{a.time}</span>
                        </div>
                    </div>
                }).collect_view()}
            </section>

            <section class="panel-section">
                <h3 class="panel-section__title">"Contacts"</h3>
                {CONTACTS.iter().map(|c| view! {
                    <div class="panel-item">
                        <span class="avatar avatar--small" title=c.name>{initials(c.name)}</span>
                        <span class="panel-item__text">{c.name}</span>
                    </div>
                }).collect_view()}
            </section>
        </div>
    }
}
