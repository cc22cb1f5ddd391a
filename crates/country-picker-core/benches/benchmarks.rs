//! Criterion benchmarks for the hot paths: directory building and the
//! per-keystroke visible-list computation.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use country_picker_core::{build_directory, pipeline, CountryDataset, DirectoryFilter, LocaleTag};

fn bench_build_directory(c: &mut Criterion) {
    let dataset = CountryDataset::bundled().unwrap();

    c.bench_function("build_directory/full", |b| {
        b.iter(|| build_directory(black_box(dataset), LocaleTag::En, &DirectoryFilter::default()))
    });

    let filter = DirectoryFilter {
        include: vec!["US".into(), "DE".into(), "FR".into(), "JP".into()],
        exclude: vec!["FR".into()],
    };
    c.bench_function("build_directory/filtered", |b| {
        b.iter(|| build_directory(black_box(dataset), LocaleTag::De, &filter))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let dataset = CountryDataset::bundled().unwrap();
    let directory = build_directory(dataset, LocaleTag::En, &DirectoryFilter::default());
    let preferred = vec!["US".into(), "GB".into(), "DE".into()];
    let selected = directory.iter().find(|x| x.code() == "JP").cloned();

    c.bench_function("pipeline/empty_query", |b| {
        b.iter(|| {
            pipeline::compute(
                black_box(&directory),
                "",
                selected.as_ref(),
                &preferred,
                None,
            )
        })
    });

    c.bench_function("pipeline/name_search", |b| {
        b.iter(|| pipeline::compute(black_box(&directory), "united", None, &preferred, None))
    });

    c.bench_function("pipeline/calling_code_search", |b| {
        b.iter(|| pipeline::compute(black_box(&directory), "+4", None, &[], None))
    });
}

criterion_group!(benches, bench_build_directory, bench_pipeline);
criterion_main!(benches);
