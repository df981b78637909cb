//! Benchmarks for the shapeview pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shapeview::{encode_png, extract, GridCompositor, ShapeRenderer, ShortKeyBuilder, TileRenderer};

fn busy_message() -> String {
    let mut message = String::from("Here is my build: ");
    for i in 0..64 {
        if i % 3 == 0 {
            message.push_str("{CuRuSuWu:--CrCr--+cw+blue} ");
        } else {
            message.push_str("{RuRuRuRu+cut} and ");
        }
    }
    message
}

// -- Extraction benchmarks --

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    let small = "look at {CuCuCuCu}";
    let busy = busy_message();

    group.bench_function("extract_single", |b| {
        b.iter(|| extract(black_box(small), &ShortKeyBuilder).unwrap())
    });

    group.bench_function("extract_busy", |b| {
        b.iter(|| extract(black_box(&busy), &ShortKeyBuilder).unwrap())
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let renderer = ShapeRenderer::new();
    let shapes = extract(&busy_message(), &ShortKeyBuilder).unwrap();
    let tiles: Vec<_> = shapes
        .iter()
        .take(64)
        .map(|s| renderer.render(s, 56).unwrap())
        .collect();

    group.bench_function("render_tile_56", |b| {
        b.iter(|| renderer.render(black_box(&shapes[0]), 56).unwrap())
    });

    group.bench_function("composite_64", |b| {
        b.iter(|| GridCompositor::new(56).composite(black_box(&tiles)).unwrap())
    });

    let grid = GridCompositor::new(56).composite(&tiles).unwrap();
    group.bench_function("encode_png_64", |b| {
        b.iter(|| encode_png(black_box(&grid)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_rendering);
criterion_main!(benches);
