use criterion::{Criterion, criterion_group, criterion_main};
use list_spacing_engine::{fix_list_spacing, has_spaced_list_items};
mod common;

fn bench_fix_list_spacing(c: &mut Criterion) {
    let mut group = c.benchmark_group("fix_list_spacing");

    for sections in [10, 100, 1000] {
        let loose = common::generate_loose_list_note(sections);
        group.bench_function(format!("loose_{sections}"), |b| {
            b.iter(|| fix_list_spacing(std::hint::black_box(&loose)));
        });

        let tight = common::generate_tight_list_note(sections);
        group.bench_function(format!("tight_{sections}"), |b| {
            b.iter(|| fix_list_spacing(std::hint::black_box(&tight)));
        });
    }

    group.finish();
}

fn bench_quick_reject(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_spaced_list_items");

    let loose = common::generate_loose_list_note(100);
    group.bench_function("loose_100", |b| {
        b.iter(|| has_spaced_list_items(std::hint::black_box(&loose)));
    });

    let prose = "Just a paragraph of prose with no list markers at all.\n\n".repeat(100);
    group.bench_function("prose_100", |b| {
        b.iter(|| has_spaced_list_items(std::hint::black_box(&prose)));
    });

    group.finish();
}

criterion_group!(benches, bench_fix_list_spacing, bench_quick_reject);
criterion_main!(benches);
