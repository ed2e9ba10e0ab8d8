use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::{TimeDelta, TimeZone, Utc};
use timebin::{FormatSet, Interval, Unit};

fn bench_round(c: &mut Criterion) {
    let t = Utc.with_ymd_and_hms(2017, 1, 7, 9, 37, 12).unwrap();
    let mut group = c.benchmark_group("round");

    for (name, interval) in [
        ("5m", Interval::FIVE_MINUTES),
        ("2h", Interval::new(2, Unit::Hours)),
        ("1d", Interval::DAY),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &interval, |b, interval| {
            b.iter(|| black_box(interval.round(black_box(t))));
        });
    }

    group.finish();
}

fn bench_format_rounded(c: &mut Criterion) {
    let t = Utc.with_ymd_and_hms(2017, 1, 7, 9, 37, 12).unwrap();
    let concise = FormatSet::concise();

    c.bench_function("format_rounded_5m", |b| {
        b.iter(|| black_box(Interval::FIVE_MINUTES.format_rounded(black_box(t), &concise)));
    });
}

fn bench_inference(c: &mut Criterion) {
    c.bench_function("try_from_duration_15m", |b| {
        b.iter(|| black_box(Interval::try_from_duration(black_box(TimeDelta::minutes(15)))));
    });
}

criterion_group!(benches, bench_round, bench_format_rounded, bench_inference);
criterion_main!(benches);
