use super::charts::{ProjectionsChart, RevenueByLocation, RevenueChart, SalesDonut, TopProducts};
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::theme::{use_theme, ChartPalette};
use contracts::dashboards::d400_ecommerce::ecommerce_overview;
use leptos::prelude::*;

/// eCommerce overview: metric cards, charts, top products.
///
/// Charts read theme colours, so they render only once the theme is hydrated.
#[component]
pub fn EcommerceDashboard() -> impl IntoView {
    let overview = ecommerce_overview();
    let theme = use_theme();
    let palette = Signal::derive(move || ChartPalette::for_theme(theme.theme.get()));

    view! {
        <PageFrame page_id="d400_ecommerce--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"eCommerce"</h1>
            </div>

            <div class="page__content dashboard-grid">
                <div class="dashboard-grid__metrics">
                    {overview.metrics.iter().cloned().map(|metric| view! {
                        <StatCard metric=metric />
                    }).collect_view()}
                </div>

                <Show
                    when=move || theme.is_hydrated.get()
                    fallback=|| view! { <div class="chart-card chart-card--placeholder"></div> }
                >
                    <ProjectionsChart overview=overview palette=palette />
                </Show>

                <Show
                    when=move || theme.is_hydrated.get()
                    fallback=|| view! { <div class="chart-card chart-card--placeholder chart-card--wide"></div> }
                >
                    <RevenueChart overview=overview palette=palette />
                </Show>

                <RevenueByLocation overview=overview />

                <TopProducts overview=overview />

                <Show
                    when=move || theme.is_hydrated.get()
                    fallback=|| view! { <div class="chart-card chart-card--placeholder"></div> }
                >
                    <SalesDonut overview=overview palette=palette />
                </Show>
            </div>
        </PageFrame>
    }
}
