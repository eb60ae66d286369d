// File: crates/candlesnap-core/src/timeaxis.rs
// Summary: Timeframe parsing and time-axis label granularity/formatting.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::locale::Strings;

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Granularity of time-axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelUnit {
    Minute,
    Hour,
    Day,
    Month,
}

/// Parse a timeframe string like "1m", "15m", "4h", "1d", "1w", "1M" into
/// minutes. `None` for anything that does not split into number + unit.
pub fn timeframe_minutes(timeframe: &str) -> Option<i64> {
    let split_idx = timeframe.chars().take_while(|c| c.is_ascii_digit()).count();
    if split_idx == 0 || split_idx == timeframe.len() {
        return None;
    }
    let amount: i64 = timeframe[..split_idx].parse().ok()?;
    // "m" and "M" differ: minutes vs months.
    let per_unit = match &timeframe[split_idx..] {
        "m" => 1,
        "h" => 60,
        "d" => 1440,
        "w" => 10_080,
        "M" => 43_200,
        _ => return None,
    };
    Some(amount * per_unit)
}

/// Choose the label granularity from the bar timeframe and the visible span:
/// minute bars switch to hour labels past ~2 hours, hour bars to day labels
/// past ~3 days, day bars to month labels past ~90 days.
pub fn label_unit(tf_minutes: i64, span_ms: i64) -> LabelUnit {
    if tf_minutes < 60 {
        if span_ms > 2 * HOUR_MS { LabelUnit::Hour } else { LabelUnit::Minute }
    } else if tf_minutes < 1440 {
        if span_ms > 3 * DAY_MS { LabelUnit::Day } else { LabelUnit::Hour }
    } else if span_ms > 90 * DAY_MS {
        LabelUnit::Month
    } else {
        LabelUnit::Day
    }
}

/// Format one bar's timestamp at the given granularity, truncated to the
/// unit boundary. Month names come from the locale table.
pub fn format_label(time_ms: i64, unit: LabelUnit, strings: &Strings) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(time_ms) else {
        return String::new();
    };
    match unit {
        LabelUnit::Minute => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        LabelUnit::Hour => format!("{:02}:00", dt.hour()),
        LabelUnit::Day => format!("{} {}", dt.day(), strings.months[dt.month0() as usize]),
        LabelUnit::Month => format!("{} {}", strings.months[dt.month0() as usize], dt.year()),
    }
}
