// File: crates/candlesnap-core/src/grid.rs
// Summary: Grid line placement and axis label stride helpers.

use crate::scale::{format_price, PriceScale};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// One horizontal grid line with its interpolated price label.
#[derive(Clone, Debug)]
pub struct PriceTick {
    pub y: f32,
    pub label: String,
}

/// Evenly spaced horizontal grid lines across the plot, each labeled with
/// the price the scale maps to that row.
pub fn price_ticks(scale: &PriceScale, rows: usize, decimals: usize) -> Vec<PriceTick> {
    linspace(scale.top_px as f64, scale.bottom_px as f64, rows.max(2))
        .into_iter()
        .map(|y| {
            let y = y as f32;
            PriceTick { y, label: format_price(scale.from_px(y), decimals) }
        })
        .collect()
}

/// Index step so that at most `max_labels` of `count` slots carry a label.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}
