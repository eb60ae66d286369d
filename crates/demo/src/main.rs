// File: crates/demo/src/main.rs
// Summary: Demo loads a raw exchange OHLC payload (JSON) and renders a candlestick PNG.

use anyhow::{Context, Result};
use candlesnap_core::{normalize, render_to_png, RenderOptions};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Positional args with sample-data defaults:
    //   [payload.json] [exchange] [symbol] [timeframe] [theme] [language]
    let mut args = std::env::args().skip(1);
    let payload_path = args
        .next()
        .unwrap_or_else(|| "crates/demo/data/getbit_BTCUSDT_1h.json".to_string());
    let exchange = args.next().unwrap_or_else(|| "getbit".to_string());
    let symbol = args.next().unwrap_or_else(|| "BTCUSDT".to_string());
    let timeframe = args.next().unwrap_or_else(|| "1h".to_string());
    let theme = args.next().unwrap_or_else(|| "dark".to_string());
    let language = args.next().unwrap_or_else(|| "en".to_string());

    info!(payload = %payload_path, %exchange, %symbol, %timeframe, "loading payload");

    let raw = std::fs::read_to_string(&payload_path)
        .with_context(|| format!("failed to read payload '{payload_path}'"))?;
    let payload: serde_json::Value =
        serde_json::from_str(&raw).context("payload is not valid JSON")?;

    let series = normalize(&exchange, &payload)
        .with_context(|| format!("normalizing '{exchange}' payload"))?;
    info!(bars = series.len(), span_ms = series.span_ms(), "normalized series");

    let opts = RenderOptions::new(&symbol, &timeframe)
        .with_exchange(&exchange)
        .with_theme(&theme)
        .with_language(&language);

    let out = out_name(&symbol, &timeframe, &theme);
    render_to_png(&series, &opts, &out)
        .with_context(|| format!("rendering to '{}'", out.display()))?;
    info!(out = %out.display(), "wrote chart");

    Ok(())
}

/// Output file name like target/out/chart_BTCUSDT_1h_dark.png
fn out_name(symbol: &str, timeframe: &str, theme: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{symbol}_{timeframe}_{theme}.png"));
    out
}
