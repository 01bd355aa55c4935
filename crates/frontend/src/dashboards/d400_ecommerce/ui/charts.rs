//! Lightweight CSS/SVG charts of the eCommerce dashboard.

use crate::shared::components::table::{format_compact, format_money, format_percent};
use crate::shared::theme::ChartPalette;
use contracts::dashboards::d400_ecommerce::{percent_of, DonutSegment, EcommerceOverview};
use leptos::prelude::*;
use thaw::*;

const REVENUE_WIDTH: f64 = 600.0;
const REVENUE_HEIGHT: f64 = 200.0;

/// `max` rounded up to a multiple of `step`; never below one step.
pub fn axis_max(max: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return max.max(0.0);
    }
    ((max / step).ceil() * step).max(step)
}

/// `intervals + 1` evenly spaced ticks from 0 to `axis_max`.
pub fn axis_ticks(axis_max: f64, intervals: usize) -> Vec<f64> {
    if intervals == 0 {
        return vec![0.0];
    }
    (0..=intervals)
        .map(|i| axis_max * i as f64 / intervals as f64)
        .collect()
}

/// SVG `points` of a line chart scaled into `width` x `height`.
pub fn polyline_points(values: &[f64], axis_max: f64, width: f64, height: f64) -> String {
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if values.len() > 1 { i as f64 * step } else { width / 2.0 };
            let y = height - percent_of(value, axis_max) / 100.0 * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `stroke-dasharray` and `stroke-dashoffset` of a donut arc on a circle
/// with circumference 100, starting at 12 o'clock.
pub fn donut_dash(segment: &DonutSegment) -> (String, String) {
    let length = segment.length.clamp(0.0, 100.0);
    (
        format!("{:.2} {:.2}", length, 100.0 - length),
        format!("{:.2}", 25.0 - segment.offset),
    )
}

#[component]
pub fn ProjectionsChart(
    overview: &'static EcommerceOverview,
    #[prop(into)] palette: Signal<ChartPalette>,
) -> impl IntoView {
    let max = axis_max(overview.projection_max(), 10.0);
    let ticks = axis_ticks(max, 3);

    view! {
        <div class="chart-card">
            <div class="chart-card__title">"Projections vs Actuals"</div>
            <div class="bar-chart">
                <div class="bar-chart__axis">
                    {ticks.into_iter().rev().map(|t| view! {
                        <span>{format!("{}M", format_compact(t))}</span>
                    }).collect_view()}
                </div>
                <div class="bar-chart__bars">
                    {overview.projections.iter().map(|point| {
                        let actual = percent_of(point.actual, max);
                        let projected = (percent_of(point.projected, max) - actual).max(0.0);
                        view! {
                            <div class="bar-chart__column" title={format!("{}: {}M projected, {}M actual", point.month, point.projected, point.actual)}>
                                <div class="bar-chart__stack">
                                    <div
                                        class="bar-chart__bar bar-chart__bar--projected"
                                        style:height={format!("{:.1}%", projected)}
                                        style:background-color=move || palette.get().projected
                                    ></div>
                                    <div
                                        class="bar-chart__bar"
                                        style:height={format!("{:.1}%", actual)}
                                        style:background-color=move || palette.get().actual
                                    ></div>
                                </div>
                                <span class="bar-chart__label">{point.month.clone()}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RevenueChart(
    overview: &'static EcommerceOverview,
    #[prop(into)] palette: Signal<ChartPalette>,
) -> impl IntoView {
    let max = axis_max(overview.revenue_max(), 10_000_000.0);
    let current: Vec<f64> = overview.revenue.iter().map(|p| p.current).collect();
    let previous: Vec<f64> = overview.revenue.iter().map(|p| p.previous).collect();
    let current_points = polyline_points(&current, max, REVENUE_WIDTH, REVENUE_HEIGHT);
    let previous_points = polyline_points(&previous, max, REVENUE_WIDTH, REVENUE_HEIGHT);
    let totals = overview.week_totals;

    view! {
        <div class="chart-card">
            <div class="chart-card__header">
                <span class="chart-card__title">"Revenue"</span>
                <span class="chart-card__divider">"|"</span>
                <span class="chart-legend">
                    <span class="chart-legend__dot" style:background-color=move || palette.get().direct></span>
                    "Current Week "
                    <strong>{format_money(totals.current, "$")}</strong>
                </span>
                <span class="chart-legend">
                    <span class="chart-legend__dot" style:background-color=move || palette.get().actual></span>
                    "Previous Week "
                    <strong>{format_money(totals.previous, "$")}</strong>
                </span>
            </div>
            <div class="line-chart">
                <div class="line-chart__axis">
                    {axis_ticks(max, 3).into_iter().rev().map(|t| view! {
                        <span>{format_compact(t)}</span>
                    }).collect_view()}
                </div>
                <div class="line-chart__plot">
                    <svg
                        viewBox={format!("0 0 {} {}", REVENUE_WIDTH, REVENUE_HEIGHT)}
                        preserveAspectRatio="none"
                        class="line-chart__svg"
                    >
                        <polyline
                            points=previous_points
                            fill="none"
                            stroke-width="3"
                            stroke-dasharray="6 4"
                            stroke=move || palette.get().actual
                        />
                        <polyline
                            points=current_points
                            fill="none"
                            stroke-width="3"
                            stroke=move || palette.get().direct
                        />
                    </svg>
                    <div class="line-chart__labels">
                        {overview.revenue.iter().map(|p| view! { <span>{p.month.clone()}</span> }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RevenueByLocation(overview: &'static EcommerceOverview) -> impl IntoView {
    let max = overview.location_max();

    view! {
        <div class="chart-card">
            <div class="chart-card__title">"Revenue by Location"</div>
            <div class="location-list">
                {overview.locations.iter().map(|location| view! {
                    <div class="location-list__item">
                        <div class="location-list__row">
                            <span>{location.city.clone()}</span>
                            <span>{format!("{}K", location.value_k)}</span>
                        </div>
                        <div class="progress">
                            <div
                                class="progress__bar"
                                style:width={format!("{:.1}%", percent_of(location.value_k, max))}
                            ></div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn TopProducts(overview: &'static EcommerceOverview) -> impl IntoView {
    view! {
        <div class="chart-card chart-card--wide">
            <div class="chart-card__title">"Top Selling Products"</div>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=80.0>"Price"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=80.0>"Quantity"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Amount"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {overview.top_products.iter().map(|product| view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout truncate=true>{product.name.clone()}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_money(product.price, "$")}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{product.quantity.to_string()}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_money(product.amount(), "$")}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
pub fn SalesDonut(
    overview: &'static EcommerceOverview,
    #[prop(into)] palette: Signal<ChartPalette>,
) -> impl IntoView {
    let segments = overview.donut_segments();
    let largest = overview
        .sales_channels
        .iter()
        .map(|c| c.percentage)
        .fold(0.0, f64::max);

    view! {
        <div class="chart-card">
            <div class="chart-card__title">"Total Sales"</div>
            <div class="donut">
                <svg viewBox="0 0 42 42" class="donut__svg">
                    {segments.iter().enumerate().map(|(i, segment)| {
                        let (dasharray, dashoffset) = donut_dash(segment);
                        view! {
                            <circle
                                cx="21"
                                cy="21"
                                r="15.915"
                                fill="transparent"
                                stroke-width="5"
                                stroke-dasharray=dasharray
                                stroke-dashoffset=dashoffset
                                stroke=move || palette.get().channels()[i % 4]
                            />
                        }
                    }).collect_view()}
                </svg>
                <span class="donut__label">{format_percent(largest, 1)}</span>
            </div>
            <div class="chart-legend chart-legend--list">
                {overview.sales_channels.iter().enumerate().map(|(i, channel)| view! {
                    <div class="chart-legend__row">
                        <span class="chart-legend__dot" style:background-color=move || palette.get().channels()[i % 4]></span>
                        <span class="chart-legend__label">{channel.label.clone()}</span>
                        <span class="chart-legend__value">{format_money(channel.value, "$")}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(28.0, 10.0), 30.0);
        assert_eq!(axis_max(25_000_000.0, 10_000_000.0), 30_000_000.0);
        assert_eq!(axis_max(30.0, 10.0), 30.0);
        assert_eq!(axis_max(0.0, 10.0), 10.0);
    }

    #[test]
    fn test_axis_ticks() {
        assert_eq!(axis_ticks(30.0, 3), vec![0.0, 10.0, 20.0, 30.0]);
        assert_eq!(axis_ticks(30.0, 0), vec![0.0]);
    }

    #[test]
    fn test_polyline_points() {
        assert_eq!(
            polyline_points(&[0.0, 15.0, 30.0], 30.0, 100.0, 50.0),
            "0.0,50.0 50.0,25.0 100.0,0.0"
        );
        assert_eq!(polyline_points(&[10.0], 20.0, 100.0, 50.0), "50.0,25.0");
        assert_eq!(polyline_points(&[], 20.0, 100.0, 50.0), "");
    }

    #[test]
    fn test_donut_dash() {
        let (array, offset) = donut_dash(&DonutSegment {
            offset: 44.4,
            length: 20.0,
        });
        assert_eq!(array, "20.00 80.00");
        assert_eq!(offset, "-19.40");
    }
}
