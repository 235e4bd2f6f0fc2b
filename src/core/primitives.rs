use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// `true` when `format` is a `chrono` strftime string without invalid specifiers.
#[must_use]
pub fn is_valid_time_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Formats a sample timestamp for an axis label using a `chrono` format string.
///
/// An invalid format falls back to an ISO date instead of failing the frame.
#[must_use]
pub fn format_timestamp(time: DateTime<Utc>, format: &str) -> String {
    let mut label = String::new();
    if is_valid_time_format(format) && write!(label, "{}", time.format(format)).is_ok() {
        return label;
    }
    time.format("%Y-%m-%d").to_string()
}

/// Formats a numeric value with a fixed number of decimals, mapping `-0` to `0`.
#[must_use]
pub fn format_fixed(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::{decimal_to_f64, format_fixed, format_timestamp};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    #[test]
    fn decimal_conversion_keeps_value() {
        let value = decimal_to_f64(Decimal::new(4_275, 2), "rate").expect("convert");
        assert!((value - 42.75).abs() <= 1e-12);
    }

    #[test]
    fn fixed_format_drops_negative_zero() {
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
        assert_eq!(format_fixed(-1.5, 1), "-1.5");
        assert_eq!(format_fixed(3.0, 0), "3");
    }

    #[test]
    fn invalid_time_format_falls_back_to_iso_date() {
        let time = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(time, "%b %d"), "Mar 15");
        assert_eq!(format_timestamp(time, "%Q"), "2024-03-15");
    }
}
