use serde::{Deserialize, Serialize};

/// How to format a metric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    /// Whole currency units, e.g. `$695`.
    Money { symbol: String },
    Percent { decimals: u8 },
    Integer,
}

/// Card background variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    Blue,
    Neutral,
    Lavender,
}

impl CardTone {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            CardTone::Blue => "metric-card--blue",
            CardTone::Neutral => "metric-card--neutral",
            CardTone::Lavender => "metric-card--lavender",
        }
    }
}

/// One of the four headline cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub value: f64,
    pub format: ValueFormat,
    /// Change vs. previous period, in percent.
    pub change_percent: f64,
    pub tone: CardTone,
}

impl MetricCard {
    pub fn is_positive(&self) -> bool {
        self.change_percent >= 0.0
    }
}

/// Projections vs actuals, millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: String,
    pub projected: f64,
    pub actual: f64,
}

/// Revenue of the current and previous week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub current: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekTotals {
    pub current: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSales {
    pub city: String,
    /// Thousands.
    pub value_k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl TopProduct {
    pub fn amount(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesChannel {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
}

/// Arc of a donut chart in percent of the full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    pub offset: f64,
    pub length: f64,
}

/// Everything rendered on the eCommerce dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcommerceOverview {
    pub metrics: Vec<MetricCard>,
    pub projections: Vec<ProjectionPoint>,
    pub revenue: Vec<RevenuePoint>,
    /// Legend totals of the revenue chart.
    pub week_totals: WeekTotals,
    pub locations: Vec<LocationSales>,
    pub top_products: Vec<TopProduct>,
    pub sales_channels: Vec<SalesChannel>,
}

impl EcommerceOverview {
    /// Largest projected or actual value, the y-axis maximum of the bar chart.
    pub fn projection_max(&self) -> f64 {
        self.projections
            .iter()
            .map(|p| p.projected.max(p.actual))
            .fold(0.0, f64::max)
    }

    pub fn revenue_max(&self) -> f64 {
        self.revenue
            .iter()
            .map(|p| p.current.max(p.previous))
            .fold(0.0, f64::max)
    }

    pub fn location_max(&self) -> f64 {
        self.locations.iter().map(|l| l.value_k).fold(0.0, f64::max)
    }

    pub fn sales_total(&self) -> f64 {
        self.sales_channels.iter().map(|c| c.value).sum()
    }

    /// Consecutive arcs of the sales donut, one per channel.
    pub fn donut_segments(&self) -> Vec<DonutSegment> {
        let mut offset = 0.0;
        self.sales_channels
            .iter()
            .map(|channel| {
                let segment = DonutSegment {
                    offset,
                    length: channel.percentage,
                };
                offset += channel.percentage;
                segment
            })
            .collect()
    }
}

/// Share of `value` in `max`, in percent, for bar heights.
pub fn percent_of(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}
