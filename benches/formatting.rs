use chrono::{Local, TimeZone};
use criterion::{Criterion, criterion_group, criterion_main};
use rotalog::fmt::{Format, LineTemplate, format_attrs, format_datetime, render};
use rotalog::{Level, Record, attr};
use std::hint::black_box;

fn record(attrs: usize) -> Record {
    let ts = Local.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
    let attrs = (0..attrs).map(|i| attr(format!("key{i}"), i)).collect();
    Record::at(ts, Level::Info, "Application started successfully", attrs)
}

fn bench_line_template_parse(c: &mut Criterion) {
    c.bench_function("LineTemplate::parse", |b| {
        b.iter(|| LineTemplate::parse(black_box(Format::DEFAULT_LINE)));
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let format = Format::default();

    for n in [0, 2, 8] {
        let record = record(n);
        group.bench_function(format!("{n}_attrs"), |b| {
            b.iter(|| render(black_box(&record), black_box(&format)));
        });
    }

    let message_only = Format::new().line("${Level} ${Message}");
    let record = record(8);
    group.bench_function("message_only", |b| {
        b.iter(|| render(black_box(&record), black_box(&message_only)));
    });

    group.finish();
}

fn bench_pieces(c: &mut Criterion) {
    let record = record(4);
    let format = Format::default();

    c.bench_function("format_datetime", |b| {
        b.iter(|| format_datetime(black_box(record.timestamp()), black_box(&format.datetime)));
    });
    c.bench_function("format_attrs", |b| {
        b.iter(|| format_attrs(black_box(record.attrs()), black_box(&format)));
    });
}

criterion_group!(
    benches,
    bench_line_template_parse,
    bench_render,
    bench_pieces
);
criterion_main!(benches);
