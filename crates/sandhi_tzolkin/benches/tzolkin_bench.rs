use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sandhi_time::CalendarDate;
use sandhi_tzolkin::{TzolkinConfig, kin_for_date, moon_day, ritual_day};

fn ritual_bench(c: &mut Criterion) {
    let cfg = TzolkinConfig::default();
    let near = CalendarDate::new(2026, 3, 15).unwrap();
    let far = CalendarDate::new(1900, 3, 15).unwrap();

    let mut group = c.benchmark_group("tzolkin");
    group.bench_function("kin_near_anchor", |b| {
        b.iter(|| kin_for_date(black_box(near), &cfg))
    });
    group.bench_function("kin_126_years_back", |b| {
        b.iter(|| kin_for_date(black_box(far), &cfg))
    });
    group.bench_function("moon_day", |b| b.iter(|| moon_day(black_box(near), &cfg)));
    group.bench_function("ritual_day", |b| {
        b.iter(|| ritual_day(black_box(near), &cfg))
    });
    group.finish();
}

criterion_group!(benches, ritual_bench);
criterion_main!(benches);
