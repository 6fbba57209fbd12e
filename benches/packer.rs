use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use areaviz::config::{LayoutConfig, PackerConfig};
use areaviz::layout::{PackInput, Region, compute_chart_layout, pack_circles};
use areaviz::render::render_svg;
use areaviz::theme::Theme;
use areaviz::parse_dataset;

fn synthetic_inputs(n: usize) -> Vec<PackInput> {
    (0..n)
        .map(|i| {
            // Deterministic spread of magnitudes without a RNG.
            let value = ((i * 37 + 11) % 400 + 1) as f32;
            PackInput::new(format!("item-{i}"), value)
        })
        .collect()
}

fn synthetic_dataset(n: usize) -> String {
    let mut out = String::from("{ title: \"Bench\", items: [");
    for i in 0..n {
        let value = ((i * 37 + 11) % 400 + 1) as f32;
        out.push_str(&format!("{{ label: \"Item {i}\", value: {value} }},"));
    }
    out.push_str("] }");
    out
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    let region = Region::new(800.0, 600.0, 40.0);
    let cfg = PackerConfig::default();
    for n in [5usize, 25, 100] {
        let items = synthetic_inputs(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let placements =
                    pack_circles(black_box(items), region, &cfg).expect("pack failed");
                black_box(placements.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let theme = Theme::modern();
    let config = LayoutConfig::default();
    for n in [5usize, 25, 100] {
        let input = synthetic_dataset(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, data| {
            b.iter(|| {
                let dataset = parse_dataset(black_box(data)).expect("parse failed");
                let layout =
                    compute_chart_layout(&dataset, &theme, &config).expect("layout failed");
                let svg = render_svg(&layout, &theme, &config);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pack, bench_end_to_end);
criterion_main!(benches);
