use crate::shared::components::table::{format_change, format_metric};
use crate::shared::icons::icon;
use contracts::dashboards::d400_ecommerce::MetricCard;
use leptos::prelude::*;

/// Headline metric: title, formatted value and signed change with a trend icon.
#[component]
pub fn StatCard(metric: MetricCard) -> impl IntoView {
    let card_class = format!("stat-card {}", metric.tone.css_modifier());
    let value = format_metric(metric.value, &metric.format);
    let change = format_change(metric.change_percent);

    let (trend_icon, change_class) = if metric.is_positive() {
        ("trending-up", "stat-card__change stat-card__change--up")
    } else {
        ("trending-down", "stat-card__change stat-card__change--down")
    };

    view! {
        <div class=card_class>
            <div class="stat-card__label">{metric.title.clone()}</div>
            <div class="stat-card__body">
                <div class="stat-card__value">{value}</div>
                <span class=change_class>
                    {change}
                    {icon(trend_icon)}
                </span>
            </div>
        </div>
    }
}
