//! Benchmarks for section layout and output

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fiber_section::prelude::*;

fn create_frame_sections(count: u32) -> ModelInput {
    let mut input = ModelInput::example();
    let template = input.sections[0].clone();
    input.sections = (1..=count)
        .map(|tag| RcRectSection {
            tag,
            depth: 0.3 + 0.05 * (tag % 10) as f64,
            ..template.clone()
        })
        .collect();
    input
}

fn benchmark_single_section(c: &mut Criterion) {
    let desc = ModelInput::example().sections[0].clone();
    c.bench_function("rc_rect_build", |b| {
        b.iter(|| {
            let section = black_box(&desc).build().unwrap();
            black_box(section);
        })
    });
}

fn benchmark_model(c: &mut Criterion) {
    let input = create_frame_sections(100);
    c.bench_function("model_100_sections", |b| {
        b.iter(|| {
            let model = Model::from_input(black_box(&input)).unwrap();
            black_box(&model);
        })
    });
}

fn benchmark_tcl_script(c: &mut Criterion) {
    let model = Model::from_input(&create_frame_sections(100)).unwrap();
    c.bench_function("tcl_script_100_sections", |b| {
        b.iter(|| black_box(model.to_script(ScriptFormat::Tcl).unwrap()))
    });
}

fn benchmark_svg(c: &mut Criterion) {
    let mut desc = ModelInput::example().sections[0].clone();
    desc.fibers = FiberCounts::uniform(40);
    let section = desc.build().unwrap();
    let plotter = SvgPlotter::default();
    let palette = Palette::default();
    c.bench_function("svg_fine_grid", |b| {
        b.iter(|| black_box(plotter.render(&section, &palette).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_single_section,
    benchmark_model,
    benchmark_tcl_script,
    benchmark_svg,
);

criterion_main!(benches);
