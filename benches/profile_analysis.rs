//! Benchmarks for the profiling stages and the full single-image analysis.
//!
//! Run with: cargo bench --bench profile_analysis

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fridge_vision::core_modules::brightness_profiler::BrightnessProfiler;
use fridge_vision::core_modules::color_profiler::ColorProfiler;
use fridge_vision::core_modules::edge_profiler::EdgeProfiler;
use fridge_vision::core_modules::random_source::seeded;
use fridge_vision::{FoodAnalyzer, PixelBuffer};

const SIDE: usize = 300;

/// Warm blobs on a pale background with a mild diagonal gradient.
fn synthetic_frame() -> Vec<u8> {
    let mut frame = Vec::with_capacity(SIDE * SIDE * 4);
    for y in 0..SIDE {
        for x in 0..SIDE {
            let in_blob = [(90, 100), (200, 180)].iter().any(|&(cx, cy): &(i64, i64)| {
                let (dx, dy) = (x as i64 - cx, y as i64 - cy);
                dx * dx + dy * dy < 60 * 60
            });
            let pixel = if in_blob {
                [230, 70, 40, 255]
            } else {
                let shade = 180 + ((x + y) / 12) as u8;
                [shade, shade, shade.saturating_sub(10), 255]
            };
            frame.extend_from_slice(&pixel);
        }
    }
    frame
}

fn bench_profilers(c: &mut Criterion) {
    let frame = synthetic_frame();
    let buffer = PixelBuffer::new(&frame, SIDE as u32, SIDE as u32).expect("canvas-sized frame");

    let colors = ColorProfiler::default();
    c.bench_function("color_profile", |b| b.iter(|| black_box(colors.profile(&buffer))));

    let edges = EdgeProfiler::default();
    c.bench_function("edge_profile", |b| b.iter(|| black_box(edges.profile(&buffer))));

    let brightness = BrightnessProfiler::default();
    c.bench_function("brightness_profile", |b| b.iter(|| black_box(brightness.profile(&buffer))));
}

fn bench_full_analysis(c: &mut Criterion) {
    let frame = synthetic_frame();
    let buffer = PixelBuffer::new(&frame, SIDE as u32, SIDE as u32).expect("canvas-sized frame");
    let analyzer = FoodAnalyzer::default();
    let mut rng = seeded(42);

    c.bench_function("analyze_300x300", |b| {
        b.iter(|| black_box(analyzer.analyze(&buffer, &mut rng)))
    });
}

criterion_group!(benches, bench_profilers, bench_full_analysis);
criterion_main!(benches);
