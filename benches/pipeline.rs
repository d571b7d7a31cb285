//! Benchmarks for the ogimg pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ogimg::render::{compose, gradient, grain, pattern, render_page, FontSet};
use ogimg::{gradient_pages, pattern_pages, Colour, Pattern, CANVAS_HEIGHT, CANVAS_WIDTH};

fn bench_backgrounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("backgrounds");

    group.bench_function("pattern_circles", |b| {
        b.iter(|| {
            pattern::render(
                CANVAS_WIDTH,
                CANVAS_HEIGHT,
                black_box(Colour::WARM),
                Colour::YELLOW,
                Pattern::Circles,
            )
        })
    });

    group.bench_function("pattern_spiral", |b| {
        b.iter(|| {
            pattern::render(
                CANVAS_WIDTH,
                CANVAS_HEIGHT,
                black_box(Colour::WARM),
                Colour::TEAL,
                Pattern::Spiral,
            )
        })
    });

    // Interpolation only; the wide blur dominates full-canvas timings
    // and is benchmarked at a reduced size below.
    let mesh_points = match &gradient_pages()[3].background {
        ogimg::Background::Mesh { points } => points.clone(),
        ogimg::Background::Pattern { .. } => unreachable!(),
    };

    group.bench_function("mesh_field_full", |b| {
        b.iter(|| gradient::field(CANVAS_WIDTH, CANVAS_HEIGHT, black_box(&mesh_points)))
    });

    group.bench_function("mesh_render_quarter", |b| {
        b.iter(|| gradient::render(300, 158, black_box(&mesh_points)))
    });

    group.finish();
}

fn bench_grain(c: &mut Criterion) {
    let mut group = c.benchmark_group("grain");
    let base = compose::fill(CANVAS_WIDTH, CANVAS_HEIGHT, Colour::WARM);

    group.bench_function("grain_full_canvas", |b| {
        b.iter(|| {
            let mut img = base.clone();
            let mut rng = StdRng::seed_from_u64(1);
            grain::apply(&mut img, black_box(0.12), &mut rng);
            img
        })
    });

    group.finish();
}

fn bench_full_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("pages");
    group.sample_size(10);

    let page = pattern_pages().remove(0);
    let fonts = FontSet::builtin();

    group.bench_function("render_page_pattern", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            render_page(black_box(&page), &fonts, &mut rng)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_backgrounds, bench_grain, bench_full_page);
criterion_main!(benches);
