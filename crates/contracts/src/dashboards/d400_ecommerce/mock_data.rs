use super::dto::*;
use once_cell::sync::Lazy;

static OVERVIEW: Lazy<EcommerceOverview> = Lazy::new(|| EcommerceOverview {
    metrics: vec![
        metric("Customers", 3781.0, ValueFormat::Integer, 11.01, CardTone::Blue),
        metric("Orders", 1219.0, ValueFormat::Integer, -0.03, CardTone::Neutral),
        metric(
            "Revenue",
            695.0,
            ValueFormat::Money {
                symbol: "$".to_string(),
            },
            15.03,
            CardTone::Neutral,
        ),
        metric("Growth", 30.1, ValueFormat::Percent { decimals: 1 }, 6.08, CardTone::Lavender),
    ],
    projections: [
        ("Jan", 18.0, 20.0),
        ("Feb", 25.0, 23.0),
        ("Mar", 22.0, 24.0),
        ("Apr", 28.0, 26.0),
        ("May", 24.0, 22.0),
        ("Jun", 26.0, 28.0),
    ]
    .into_iter()
    .map(|(month, projected, actual)| ProjectionPoint {
        month: month.to_string(),
        projected,
        actual,
    })
    .collect(),
    revenue: [
        ("Jan", 8_000_000.0, 12_000_000.0),
        ("Feb", 17_000_000.0, 10_000_000.0),
        ("Mar", 18_000_000.0, 8_000_000.0),
        ("Apr", 10_000_000.0, 10_000_000.0),
        ("May", 12_000_000.0, 18_000_000.0),
        ("Jun", 25_000_000.0, 22_000_000.0),
    ]
    .into_iter()
    .map(|(month, current, previous)| RevenuePoint {
        month: month.to_string(),
        current,
        previous,
    })
    .collect(),
    week_totals: WeekTotals {
        current: 58_211.0,
        previous: 68_768.0,
    },
    locations: [
        ("New York", 72.0),
        ("San Francisco", 39.0),
        ("Sydney", 25.0),
        ("Singapore", 61.0),
    ]
    .into_iter()
    .map(|(city, value_k)| LocationSales {
        city: city.to_string(),
        value_k,
    })
    .collect(),
    top_products: [
        ("ASOS Ridley High Waist", 79.49, 82),
        ("Marco Lightweight Shirt", 128.50, 37),
        ("Half Sleeve Shirt", 39.99, 64),
        ("Lightweight Jacket", 20.00, 184),
        ("Marco Shoes", 79.49, 64),
    ]
    .into_iter()
    .map(|(name, price, quantity)| TopProduct {
        name: name.to_string(),
        price,
        quantity,
    })
    .collect(),
    sales_channels: [
        ("Direct", 300.56, 44.4),
        ("Affiliate", 135.18, 20.0),
        ("Sponsored", 154.02, 22.8),
        ("E-mail", 48.96, 7.2),
    ]
    .into_iter()
    .map(|(label, value, percentage)| SalesChannel {
        label: label.to_string(),
        value,
        percentage,
    })
    .collect(),
});

fn metric(title: &str, value: f64, format: ValueFormat, change_percent: f64, tone: CardTone) -> MetricCard {
    MetricCard {
        title: title.to_string(),
        value,
        format,
        change_percent,
        tone,
    }
}

/// Static figures of the eCommerce dashboard.
pub fn ecommerce_overview() -> &'static EcommerceOverview {
    &OVERVIEW
}
