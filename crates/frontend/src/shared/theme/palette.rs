use contracts::domain::a001_order::OrderStatus;
use contracts::shared::theme::ThemePreference;

/// Series colours of the dashboard charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartPalette {
    pub projected: &'static str,
    pub actual: &'static str,
    pub direct: &'static str,
    pub affiliate: &'static str,
    pub sponsored: &'static str,
    pub email: &'static str,
}

const LIGHT: ChartPalette = ChartPalette {
    projected: "#D0DFEB",
    actual: "#59A8D4",
    direct: "#1C1C1C",
    affiliate: "#4AA785",
    sponsored: "#8A8CD9",
    email: "#B1E3FF",
};

const DARK: ChartPalette = ChartPalette {
    projected: "#4A5568",
    actual: "#59A8D4",
    direct: "#FFFFFF",
    affiliate: "#4AA785",
    sponsored: "#8A8CD9",
    email: "#63B3ED",
};

impl ChartPalette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => LIGHT,
            ThemePreference::Dark => DARK,
        }
    }

    /// Colours of the sales donut, in channel order.
    pub fn channels(&self) -> [&'static str; 4] {
        [self.direct, self.affiliate, self.sponsored, self.email]
    }

    /// Dot and label colour of an order status badge.
    pub fn status(&self, status: OrderStatus, theme: ThemePreference) -> &'static str {
        match status {
            OrderStatus::InProgress => self.sponsored,
            OrderStatus::Complete => self.affiliate,
            OrderStatus::Pending => self.actual,
            OrderStatus::Approved => "#FFC555",
            OrderStatus::Rejected => {
                if theme.is_dark() {
                    "#8A8A8A"
                } else {
                    "#1C1C1C66"
                }
            }
        }
    }
}

/// Inline status colour, or `None` until the theme is hydrated and the
/// stylesheet's `data-theme` rules colour the label.
pub fn hydrated_status_colour(
    status: OrderStatus,
    theme: ThemePreference,
    is_hydrated: bool,
) -> Option<&'static str> {
    is_hydrated.then(|| ChartPalette::for_theme(theme).status(status, theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        let light = ChartPalette::for_theme(ThemePreference::Light);
        let dark = ChartPalette::for_theme(ThemePreference::Dark);
        assert_eq!(light.direct, "#1C1C1C");
        assert_eq!(dark.direct, "#FFFFFF");
        assert_eq!(light.actual, dark.actual);
        assert_eq!(dark.channels()[3], "#63B3ED");
    }

    #[test]
    fn test_status_colours() {
        let light = ChartPalette::for_theme(ThemePreference::Light);
        assert_eq!(
            light.status(OrderStatus::Complete, ThemePreference::Light),
            "#4AA785"
        );
        assert_eq!(
            light.status(OrderStatus::Rejected, ThemePreference::Dark),
            "#8A8A8A"
        );
        assert_eq!(
            light.status(OrderStatus::Rejected, ThemePreference::Light),
            "#1C1C1C66"
        );
    }

    #[test]
    fn test_status_colour_waits_for_hydration() {
        assert_eq!(
            hydrated_status_colour(OrderStatus::Rejected, ThemePreference::Light, false),
            None
        );
        assert_eq!(
            hydrated_status_colour(OrderStatus::Rejected, ThemePreference::Dark, true),
            Some("#8A8A8A")
        );
        assert_eq!(
            hydrated_status_colour(OrderStatus::Pending, ThemePreference::Light, true),
            Some("#59A8D4")
        );
    }
}
