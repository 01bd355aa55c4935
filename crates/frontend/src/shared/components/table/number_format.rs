//! Number formatting for tables and metric cards (en-US grouping)

use contracts::dashboards::d400_ecommerce::ValueFormat;

/// Formats a number with a comma thousands separator and the given decimals
///
/// `format_number_with_decimals(1234.567, 2)` gives `"1,234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Currency with two decimals, e.g. `$6,518.18`
pub fn format_money(value: f64, symbol: &str) -> String {
    format!("{}{}", symbol, format_number_with_decimals(value, 2))
}

/// Integer with thousands separator, e.g. `3,781`
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(value, decimals))
}

/// Signed change, e.g. `+11.01%` / `-0.03%`
pub fn format_change(percent: f64) -> String {
    let sign = if percent >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, percent)
}

/// Short axis labels: `0`, `10M`, `72K`
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}M", trim_zero(value / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{}K", trim_zero(value / 1_000.0))
    } else {
        trim_zero(value)
    }
}

fn trim_zero(value: f64) -> String {
    let s = format!("{:.1}", value);
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

/// Headline value of a metric card. Money is shown in whole units.
pub fn format_metric(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { symbol } => format!("{}{}", symbol, format_number_int(value)),
        ValueFormat::Percent { decimals } => format_percent(value, *decimals),
        ValueFormat::Integer => format_number_int(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(6518.18, "$"), "$6,518.18");
        assert_eq!(format_money(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_money(0.0, "$"), "$0.00");
        assert_eq!(format_money(79.49, "$"), "$79.49");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(3781.0), "3,781");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(-100000.0), "-100,000");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(11.01), "+11.01%");
        assert_eq!(format_change(-0.03), "-0.03%");
        assert_eq!(format_change(0.0), "+0.00%");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(10_000_000.0), "10M");
        assert_eq!(format_compact(72_000.0), "72K");
        assert_eq!(format_compact(2_500_000.0), "2.5M");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(3781.0, &ValueFormat::Integer), "3,781");
        assert_eq!(
            format_metric(
                695.0,
                &ValueFormat::Money {
                    symbol: "$".to_string()
                }
            ),
            "$695"
        );
        assert_eq!(
            format_metric(30.1, &ValueFormat::Percent { decimals: 1 }),
            "30.1%"
        );
    }
}
