use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sandhi_panchanga::orbit::{moon_longitude, sun_longitude};
use sandhi_panchanga::{PanchangaConfig, SunTimes, hora_at, muhurta, panchanga};
use sandhi_time::CalendarDate;

fn orbit_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit");
    group.bench_function("sun_longitude", |b| {
        b.iter(|| sun_longitude(black_box(9500.25)))
    });
    group.bench_function("moon_longitude", |b| {
        b.iter(|| moon_longitude(black_box(9500.25)))
    });
    group.finish();
}

fn panchanga_bench(c: &mut Criterion) {
    let cfg = PanchangaConfig::default();
    let date = CalendarDate::new(2026, 1, 10).unwrap();
    c.bench_function("panchanga_day", |b| {
        b.iter(|| panchanga(black_box(date), &cfg))
    });
}

fn muhurta_bench(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
    let sun = SunTimes::new(
        day.and_hms_opt(6, 12, 0).unwrap(),
        day.and_hms_opt(17, 48, 0).unwrap(),
    )
    .unwrap();
    let instant = day.and_hms_opt(21, 30, 0).unwrap();

    let mut group = c.benchmark_group("muhurta");
    group.bench_function("day_divisions", |b| b.iter(|| muhurta(black_box(&sun))));
    group.bench_function("hora_at", |b| {
        b.iter(|| hora_at(black_box(instant), &sun))
    });
    group.finish();
}

criterion_group!(benches, orbit_bench, panchanga_bench, muhurta_bench);
criterion_main!(benches);
