// File: crates/candlesnap-core/benches/render_bench.rs
// Summary: Criterion benchmark for candlestick render throughput.

use candlesnap_core::{render_png, Bar, BarSeries, RenderOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_series(n: usize) -> BarSeries {
    let mut bars = Vec::with_capacity(n);
    for i in 0..n {
        let base = 100.0 + ((i as f64) * 0.05).sin() * 10.0;
        bars.push(
            Bar::try_new(i as i64 * 60_000, base, base + 1.5, base - 1.5, base + 0.5)
                .expect("valid bar"),
        );
    }
    BarSeries::new(bars)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png");
    for &n in &[120usize, 1000usize] {
        group.bench_function(format!("candles_{n}"), |b| {
            let series = build_series(n);
            let mut opts = RenderOptions::new("BTCUSDT", "1m");
            opts.draw_labels = false;
            b.iter(|| {
                let bytes = render_png(&series, &opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
