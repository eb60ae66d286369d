// File: crates/candlesnap-core/src/chart.rs
// Summary: Candlestick rendering pipeline on Skia CPU raster surfaces.

use skia_safe as skia;

use crate::bar::BarSeries;
use crate::error::RenderError;
use crate::grid::{label_stride, price_ticks};
use crate::locale::{self, Strings};
use crate::scale::{decimals_for, format_price, PriceScale, SlotLayout};
use crate::text::TextShaper;
use crate::theme::{self, Theme};
use crate::timeaxis;
use crate::types::{ChartLayout, PlotRect};

/// Presentation options for one render call. Immutable for its duration.
pub struct RenderOptions {
    pub theme: Theme,
    pub strings: Strings,
    /// Display string, passed through unvalidated.
    pub symbol: String,
    /// Display string; also drives the time-axis label granularity.
    pub timeframe: String,
    /// Optional exchange display name for the title line.
    pub exchange: Option<String>,
    pub layout: ChartLayout,
    /// Disable all text for deterministic pixel comparisons in tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            strings: locale::en(),
            symbol: String::new(),
            timeframe: String::new(),
            exchange: None,
            layout: ChartLayout::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn new(symbol: impl Into<String>, timeframe: impl Into<String>) -> Self {
        Self { symbol: symbol.into(), timeframe: timeframe.into(), ..Self::default() }
    }

    /// Resolve a theme by name (unknown names fall back to dark).
    pub fn with_theme(mut self, name: &str) -> Self {
        self.theme = theme::find(name);
        self
    }

    /// Resolve a locale by name (unknown names fall back to English).
    pub fn with_language(mut self, name: &str) -> Self {
        self.strings = locale::find(name);
        self
    }

    pub fn with_exchange(mut self, name: impl Into<String>) -> Self {
        self.exchange = Some(name.into());
        self
    }
}

/// Render the series to an in-memory PNG.
pub fn render_png(series: &BarSeries, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let mut surface = make_surface(&opts.layout)?;
    draw(surface.canvas(), series, opts)?;

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| RenderError::Encoding("PNG encode failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a raw RGBA8 buffer: `(pixels, width, height, stride)`.
/// Used by tests that compare pixels without PNG encoder variance.
pub fn render_rgba8(
    series: &BarSeries,
    opts: &RenderOptions,
) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
    let mut surface = make_surface(&opts.layout)?;
    draw(surface.canvas(), series, opts)?;

    let (w, h) = (opts.layout.width, opts.layout.height);
    let info = skia::ImageInfo::new(
        (w, h),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Premul,
        None,
    );
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::Encoding("pixel readback failed".into()));
    }
    Ok((pixels, w, h, stride))
}

/// Render straight to a PNG file; convenience wrapper for binaries.
pub fn render_to_png(
    series: &BarSeries,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> anyhow::Result<()> {
    let bytes = render_png(series, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

fn make_surface(layout: &ChartLayout) -> Result<skia::Surface, RenderError> {
    skia::surfaces::raster_n32_premul((layout.width, layout.height))
        .ok_or_else(|| RenderError::Encoding("failed to create raster surface".into()))
}

/// Full drawing pass. Pure CPU work; owns no state beyond the canvas.
fn draw(canvas: &skia::Canvas, series: &BarSeries, opts: &RenderOptions) -> Result<(), RenderError> {
    let Some((min_price, max_price)) = series.price_range() else {
        return Err(RenderError::EmptySeries);
    };

    let layout = &opts.layout;
    let theme = &opts.theme;
    let plot = layout.plot_rect();

    canvas.clear(theme.background);

    let pscale = PriceScale::new(plot.top as f32, plot.bottom as f32, min_price, max_price);
    let slots = SlotLayout::new(
        plot.left as f32,
        plot.right as f32,
        series.len(),
        layout.slot_gap,
        layout.min_body_width,
    );
    let decimals = decimals_for(max_price);
    let stride = label_stride(series.len(), layout.max_time_labels);

    // Text machinery only when labels are on; geometry never depends on it.
    let shaper = opts.draw_labels.then(TextShaper::new);

    draw_footer_panel(canvas, opts);
    draw_grid(canvas, &plot, &pscale, &slots, series.len(), stride, opts, shaper.as_ref(), decimals);
    draw_candles(canvas, series, &pscale, &slots, theme);

    if let Some(shaper) = &shaper {
        draw_time_labels(canvas, series, &plot, &slots, stride, opts, shaper);
        draw_header(canvas, &plot, opts, shaper);
        draw_footer_text(canvas, series, opts, shaper, decimals);
    }

    Ok(())
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    pscale: &PriceScale,
    slots: &SlotLayout,
    count: usize,
    stride: usize,
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
    decimals: usize,
) {
    let theme = &opts.theme;
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // Horizontal lines, one price label each.
    for tick in price_ticks(pscale, opts.layout.grid_lines, decimals) {
        canvas.draw_line(
            (plot.left as f32, tick.y),
            (plot.right as f32, tick.y),
            &paint,
        );
        if let Some(shaper) = shaper {
            shaper.draw_right(
                canvas,
                &tick.label,
                plot.left as f32 - 8.0,
                tick.y + 4.0,
                opts.layout.label_size,
                theme.tick,
                true,
            );
        }
    }

    // Vertical lines under the slots that will carry a time label.
    for i in (0..count).step_by(stride.max(1)) {
        let x = slots.center_x(i);
        canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
    }
}

fn draw_candles(
    canvas: &skia::Canvas,
    series: &BarSeries,
    pscale: &PriceScale,
    slots: &SlotLayout,
    theme: &Theme,
) {
    let mut wick = skia::Paint::default();
    wick.set_anti_alias(true);
    wick.set_style(skia::paint::Style::Stroke);
    wick.set_stroke_width(1.0);

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    let half = slots.body_width() * 0.5;

    for (i, bar) in series.bars().iter().enumerate() {
        let x = slots.center_x(i);
        let y_o = pscale.to_px(bar.open);
        let y_h = pscale.to_px(bar.high);
        let y_l = pscale.to_px(bar.low);
        let y_c = pscale.to_px(bar.close);

        let color = if bar.is_up() { theme.candle_up } else { theme.candle_down };
        wick.set_color(color);
        body.set_color(color);

        // wick spans the full high-low range, centered in the slot
        canvas.draw_line((x, y_h), (x, y_l), &wick);

        // body keeps a 1px floor so doji bars stay visible
        let top = y_o.min(y_c);
        let bot = y_o.max(y_c);
        let rect = skia::Rect::from_ltrb(x - half, top, x + half, bot.max(top + 1.0));
        canvas.draw_rect(rect, &body);
    }
}

fn draw_time_labels(
    canvas: &skia::Canvas,
    series: &BarSeries,
    plot: &PlotRect,
    slots: &SlotLayout,
    stride: usize,
    opts: &RenderOptions,
    shaper: &TextShaper,
) {
    // Unknown timeframe strings fall back to the finest granularity.
    let tf_minutes = timeaxis::timeframe_minutes(&opts.timeframe).unwrap_or(1);
    let unit = timeaxis::label_unit(tf_minutes, series.span_ms());

    let y = plot.bottom as f32 + 24.0;
    for (i, bar) in series.bars().iter().enumerate().step_by(stride.max(1)) {
        let label = timeaxis::format_label(bar.time_ms, unit, &opts.strings);
        shaper.draw_center(canvas, &label, slots.center_x(i), y, opts.layout.label_size, opts.theme.tick, true);
    }
}

fn draw_header(canvas: &skia::Canvas, plot: &PlotRect, opts: &RenderOptions, shaper: &TextShaper) {
    let mut title = opts.symbol.clone();
    if !opts.timeframe.is_empty() {
        if !title.is_empty() {
            title.push_str(" · ");
        }
        title.push_str(&opts.timeframe);
    }
    if let Some(exchange) = &opts.exchange {
        if !title.is_empty() {
            title.push_str(" · ");
        }
        title.push_str(exchange);
    }

    let y = opts.layout.insets.top as f32 * 0.55;
    shaper.draw_left(canvas, &title, plot.left as f32, y, opts.layout.title_size, opts.theme.axis_label, false);
    shaper.draw_right(
        canvas,
        opts.strings.chart_title,
        plot.right as f32,
        y,
        opts.layout.label_size,
        opts.theme.tick,
        false,
    );
}

fn draw_footer_panel(canvas: &skia::Canvas, opts: &RenderOptions) {
    let layout = &opts.layout;
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(opts.theme.panel);
    let rect = skia::Rect::from_ltrb(
        0.0,
        (layout.height - layout.footer_height) as f32,
        layout.width as f32,
        layout.height as f32,
    );
    canvas.draw_rect(rect, &paint);
}

fn draw_footer_text(
    canvas: &skia::Canvas,
    series: &BarSeries,
    opts: &RenderOptions,
    shaper: &TextShaper,
    decimals: usize,
) {
    let Some(last) = series.last() else { return };
    let layout = &opts.layout;
    let theme = &opts.theme;

    let x = layout.insets.left as f32;
    let y = layout.height as f32 - layout.footer_height as f32 * 0.35;

    let label = opts.strings.last_price;
    shaper.draw_left(canvas, label, x, y, layout.label_size, theme.axis_label, false);

    // most recent close, colored by its direction against its own open
    let price = format_price(last.close, decimals);
    let color = if last.is_up() { theme.candle_up } else { theme.candle_down };
    let label_w = shaper.measure_width(label, layout.label_size, false);
    shaper.draw_left(canvas, &price, x + label_w + 12.0, y, layout.footer_size, color, true);

    shaper.draw_right(
        canvas,
        opts.strings.attribution,
        (layout.width - layout.insets.right as i32) as f32,
        y,
        layout.label_size * 0.85,
        theme.tick,
        false,
    );
}
