//! Performance benchmarks for slowprint.
//!
//! Run with: cargo bench
//!
//! Pauses are recorded rather than slept, so these measure formatting and
//! write overhead only.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io;

use slowprint::config::RenderPlan;
use slowprint::runner::{fill_length, RecordingPause, Renderer};

fn bench_fill_length(c: &mut Criterion) {
    c.bench_function("fill_length_all_steps", |b| {
        b.iter(|| {
            (0..1000)
                .map(|step| fill_length(black_box(22), step, 1000))
                .sum::<usize>()
        })
    });
}

fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for steps in [100usize, 1000, 10_000] {
        let plan = RenderPlan {
            total_steps: steps,
            ..RenderPlan::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(steps), &plan, |b, plan| {
            b.iter(|| {
                let mut renderer =
                    Renderer::new(io::sink(), RecordingPause::new(), plan.clone()).unwrap();
                renderer.run().unwrap();
                black_box(renderer.into_parts().1.requests.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill_length, bench_full_render);
criterion_main!(benches);
