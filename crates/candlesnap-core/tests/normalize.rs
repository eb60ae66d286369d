// File: crates/candlesnap-core/tests/normalize.rs
// Purpose: Validate per-exchange payload decoding, unit coercion, and errors.

use candlesnap_core::{normalize, Exchange, NormalizeError};
use serde_json::json;

#[test]
fn exchange_ids_resolve_case_insensitively() {
    assert_eq!(Exchange::from_id("Binance"), Some(Exchange::Binance));
    assert_eq!(Exchange::from_id("KUCOIN"), Some(Exchange::Kucoin));
    assert_eq!(Exchange::from_id("getbit").map(|e| e.id()), Some("getbit"));
    assert_eq!(Exchange::from_id("bitmex"), None);
}

#[test]
fn binance_rows_parse_and_sort() {
    // out of order on purpose; prices arrive as strings, timestamps in ms
    let payload = json!([
        [1_700_003_600_000_i64, "101.0", "103.0", "100.5", "102.0", "9.4"],
        [1_700_000_000_000_i64, "100.0", "102.5", "99.0", "101.0", "12.1"],
    ]);
    let series = normalize("binance", &payload).expect("decodes");
    assert_eq!(series.len(), 2);
    let bars = series.bars();
    assert_eq!(bars[0].time_ms, 1_700_000_000_000);
    assert_eq!(bars[1].time_ms, 1_700_003_600_000);
    assert_eq!(bars[0].open, 100.0);
    assert_eq!(bars[0].high, 102.5);
    assert_eq!(bars[0].low, 99.0);
    assert_eq!(bars[0].close, 101.0);
}

#[test]
fn kucoin_seconds_become_millis_and_columns_reorder() {
    // kucoin order is [time, open, close, high, low, ...], all strings, seconds
    let payload = json!([["1700000000", "100.0", "101.0", "102.5", "99.0", "3.3"]]);
    let series = normalize("kucoin", &payload).expect("decodes");
    let bar = &series.bars()[0];
    assert_eq!(bar.time_ms, 1_700_000_000_000);
    // sanity: a millisecond timestamp is at or above 10^12
    assert!(bar.time_ms >= 1_000_000_000_000);
    assert_eq!(bar.open, 100.0);
    assert_eq!(bar.close, 101.0);
    assert_eq!(bar.high, 102.5);
    assert_eq!(bar.low, 99.0);
}

#[test]
fn getbit_object_rows_decode() {
    let payload = json!([
        { "timestamp": 1_700_000_000, "open": 100.0, "high": 110.0, "low": 95.0, "close": 105.0, "volume": 4.2 },
        { "timestamp": 1_700_003_600, "open": 105.0, "high": 108.0, "low": 100.0, "close": 102.0, "volume": 1.0 },
    ]);
    let series = normalize("getbit", &payload).expect("decodes");
    assert_eq!(series.len(), 2);
    assert_eq!(series.bars()[0].time_ms, 1_700_000_000_000);
    assert_eq!(series.bars()[1].close, 102.0);
}

#[test]
fn empty_payload_is_refused() {
    assert_eq!(normalize("binance", &json!([])), Err(NormalizeError::EmptyPayload));
    // not an array at all
    assert_eq!(
        normalize("binance", &json!({"data": []})),
        Err(NormalizeError::EmptyPayload)
    );
}

#[test]
fn malformed_record_reports_index() {
    let payload = json!([
        { "timestamp": 1_700_000_000, "open": 100.0, "high": 110.0, "low": 95.0, "close": 105.0 },
        { "timestamp": 1_700_003_600, "open": 105.0, "high": 108.0, "low": 100.0 },
    ]);
    match normalize("getbit", &payload) {
        Err(NormalizeError::MalformedRecord { index, reason }) => {
            assert_eq!(index, 1);
            assert!(reason.contains("close"), "reason names the field: {reason}");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn unparseable_number_is_malformed() {
    let payload = json!([[1_700_000_000_000_i64, "not-a-price", "103.0", "99.0", "102.0"]]);
    assert!(matches!(
        normalize("binance", &payload),
        Err(NormalizeError::MalformedRecord { index: 0, .. })
    ));
}

#[test]
fn ohlc_invariant_violation_is_malformed() {
    // high below close
    let payload = json!([
        { "timestamp": 1_700_000_000, "open": 100.0, "high": 101.0, "low": 95.0, "close": 105.0 }
    ]);
    assert!(matches!(
        normalize("getbit", &payload),
        Err(NormalizeError::MalformedRecord { index: 0, .. })
    ));
}

#[test]
fn unknown_exchange_is_refused() {
    let payload = json!([[0, "1", "1", "1", "1"]]);
    assert_eq!(
        normalize("hyperfrob", &payload),
        Err(NormalizeError::UnknownExchange("hyperfrob".into()))
    );
}
