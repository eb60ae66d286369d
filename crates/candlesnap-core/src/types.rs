// File: crates/candlesnap-core/src/types.rs
// Summary: Shared layout types and constants (canvas size, insets, plot rect).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1280;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 720;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // left: price labels, top: title line, bottom: time labels + footer panel
        Self::new(84, 24, 64, 104)
    }
}

/// Plot area boundaries in pixels, derived from canvas size minus insets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotRect {
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Canvas geometry for one render call.
///
/// Every pixel constant the renderer uses lives here so callers can swap the
/// whole geometry at once instead of chasing scattered literals.
#[derive(Clone, Copy, Debug)]
pub struct ChartLayout {
    /// Output image width in pixels.
    pub width: i32,
    /// Output image height in pixels.
    pub height: i32,
    /// Margins reserved for labels, title, and footer.
    pub insets: Insets,
    /// Number of horizontal grid lines (each carries a price label).
    pub grid_lines: usize,
    /// Upper bound on time-axis labels drawn across the series.
    pub max_time_labels: usize,
    /// Fraction of a bar slot left empty between candle bodies.
    pub slot_gap: f32,
    /// Narrowest candle body that will still be drawn, in pixels.
    pub min_body_width: f32,
    /// Height of the footer panel holding the last-price readout.
    pub footer_height: i32,
    /// Font size of the title line.
    pub title_size: f32,
    /// Font size of axis labels.
    pub label_size: f32,
    /// Font size of the footer price readout.
    pub footer_size: f32,
}

impl ChartLayout {
    /// Plot area: canvas minus insets.
    pub const fn plot_rect(&self) -> PlotRect {
        PlotRect {
            left: self.insets.left as i32,
            top: self.insets.top as i32,
            right: self.width - self.insets.right as i32,
            bottom: self.height - self.insets.bottom as i32,
        }
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            grid_lines: 10,
            max_time_labels: 8,
            slot_gap: 0.3,
            min_body_width: 1.0,
            footer_height: 44,
            title_size: 22.0,
            label_size: 13.0,
            footer_size: 24.0,
        }
    }
}
