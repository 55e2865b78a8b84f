//! Criterion benchmarks for the retain engine
//!
//! Run with: cargo bench
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sostenido_core::StereoEffect;
use sostenido_retain::Retain;

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_phase(c: &mut Criterion, name: &str, setup: impl Fn() -> Retain) {
    let mut group = c.benchmark_group(name);

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                let mut retain = setup();
                let mut out_l = vec![0.0; block_size];
                let mut out_r = vec![0.0; block_size];
                b.iter(|| {
                    retain.process_block(black_box(&input), black_box(&input), &mut out_l, &mut out_r);
                    black_box(out_l[0])
                })
            },
        );
    }

    group.finish();
}

/// Idle pass-through: gain ramps and the dry path only.
fn bench_idle(c: &mut Criterion) {
    bench_phase(c, "RetainIdle", || {
        let mut retain = Retain::new(SAMPLE_RATE).unwrap();
        retain.set_blend(50.0);
        retain
    });
}

/// Sustained capture: fade shaping and tape writes.
fn bench_capture(c: &mut Criterion) {
    bench_phase(c, "RetainCapture", || {
        let mut retain = Retain::new(SAMPLE_RATE).unwrap();
        retain.set_blend(50.0);
        retain.set_trigger(1.0);
        retain
    });
}

/// Steady looping: tape reads and the seam crossfade.
fn bench_loop(c: &mut Criterion) {
    bench_phase(c, "RetainLoop", || {
        let mut retain = Retain::new(SAMPLE_RATE).unwrap();
        retain.set_blend(100.0);
        retain.set_trigger(1.0);

        // Drive a complete capture so the benched blocks all hit playback.
        let loop_len = retain.loop_samples();
        let input = generate_test_signal(1024);
        let mut out_l = vec![0.0; 1024];
        let mut out_r = vec![0.0; 1024];
        let mut fed = 0;
        while fed <= loop_len {
            retain.process_block(&input, &input, &mut out_l, &mut out_r);
            fed += 1024;
        }
        retain.set_trigger(0.0);
        retain
    });
}

criterion_group!(benches, bench_idle, bench_capture, bench_loop);
criterion_main!(benches);
