// File: crates/candlesnap-core/src/normalize.rs
// Summary: Per-exchange OHLC payload decoding into the canonical BarSeries.

use serde::Deserialize;
use serde_json::Value;

use crate::bar::{Bar, BarSeries};
use crate::error::NormalizeError;

/// Supported exchange identities. Each carries its own payload layout and
/// timestamp unit; dispatch is by identity, never by sniffing the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exchange {
    /// Array rows `[openTimeMs, "open", "high", "low", "close", "volume", ..]`,
    /// prices as strings, timestamps already in milliseconds.
    Binance,
    /// Array rows `["timeSec", "open", "close", "high", "low", "volume", ..]`,
    /// every field a string, timestamps in seconds.
    Kucoin,
    /// Object rows `{"timestamp": sec, "open": n, "high": n, "low": n,
    /// "close": n, ..}`, timestamps in seconds.
    Getbit,
}

impl Exchange {
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "binance" => Some(Self::Binance),
            "kucoin" => Some(Self::Kucoin),
            "getbit" => Some(Self::Getbit),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Binance => "binance",
            Self::Kucoin => "kucoin",
            Self::Getbit => "getbit",
        }
    }
}

/// Decode a raw exchange payload into a sorted `BarSeries`.
///
/// Pure function of its inputs: parses every record through `Bar::try_new`,
/// coerces timestamps to milliseconds per exchange identity, then sorts
/// ascending (source order is not guaranteed).
pub fn normalize(exchange_id: &str, payload: &Value) -> Result<BarSeries, NormalizeError> {
    let exchange = Exchange::from_id(exchange_id)
        .ok_or_else(|| NormalizeError::UnknownExchange(exchange_id.to_string()))?;

    let rows = payload.as_array().ok_or(NormalizeError::EmptyPayload)?;
    if rows.is_empty() {
        return Err(NormalizeError::EmptyPayload);
    }

    let mut bars = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let bar = match exchange {
            Exchange::Binance => bar_from_columns(row, [0, 1, 2, 3, 4], TimeUnit::Millis),
            Exchange::Kucoin => bar_from_columns(row, [0, 1, 3, 4, 2], TimeUnit::Seconds),
            Exchange::Getbit => bar_from_object(row, TimeUnit::Seconds),
        }
        .map_err(|reason| NormalizeError::MalformedRecord { index, reason })?;
        bars.push(bar);
    }

    Ok(BarSeries::new(bars))
}

#[derive(Clone, Copy)]
enum TimeUnit {
    Seconds,
    Millis,
}

impl TimeUnit {
    fn to_millis(self, raw: f64) -> i64 {
        match self {
            TimeUnit::Seconds => (raw * 1000.0).round() as i64,
            TimeUnit::Millis => raw.round() as i64,
        }
    }
}

/// Decode one array-shaped record. `cols` gives the positions of
/// [time, open, high, low, close] within the row.
fn bar_from_columns(row: &Value, cols: [usize; 5], unit: TimeUnit) -> Result<Bar, String> {
    let fields = row
        .as_array()
        .ok_or_else(|| "record is not an array".to_string())?;

    let num_at = |i: usize| -> Result<f64, String> {
        let v = fields.get(i).ok_or_else(|| format!("missing column {i}"))?;
        parse_number(v).map_err(|e| format!("column {i}: {e}"))
    };

    let [t, o, h, l, c] = cols;
    let time_ms = unit.to_millis(num_at(t)?);
    Bar::try_new(time_ms, num_at(o)?, num_at(h)?, num_at(l)?, num_at(c)?)
        .map_err(str::to_string)
}

/// Object-shaped record with named OHLC fields; extra fields are ignored.
#[derive(Deserialize)]
struct ObjectRow {
    timestamp: f64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

fn bar_from_object(row: &Value, unit: TimeUnit) -> Result<Bar, String> {
    let row: ObjectRow = ObjectRow::deserialize(row).map_err(|e| e.to_string())?;
    let time_ms = unit.to_millis(row.timestamp);
    Bar::try_new(time_ms, row.open, row.high, row.low, row.close).map_err(str::to_string)
}

/// Accept a JSON number or a numeric string; exchanges disagree on which.
fn parse_number(v: &Value) -> Result<f64, String> {
    match v {
        Value::Number(n) => n.as_f64().ok_or_else(|| "number out of range".to_string()),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("not a number: '{s}'")),
        other => Err(format!("expected number, got {other}")),
    }
}
