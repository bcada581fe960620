use criterion::{Criterion, black_box, criterion_group, criterion_main};

use amlich::SolarDate;
use amlich::vietnamese::day_info::{DayInfo, month_grid};
use amlich::vietnamese::{LunarDate, Month, lunar_to_solar, solar_to_lunar};

fn conversion_bench(c: &mut Criterion) {
    let solar = SolarDate::new(2024, 2, 10);
    let lunar = LunarDate::new(2023, Month::Leap(2), 1);

    let mut group = c.benchmark_group("conversion");
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| solar_to_lunar(black_box(solar)))
    });
    group.bench_function("lunar_to_solar", |b| {
        b.iter(|| lunar_to_solar(black_box(lunar)))
    });
    group.finish();
}

fn almanac_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("almanac");
    group.bench_function("day_info", |b| {
        b.iter(|| DayInfo::new(black_box(SolarDate::new(2024, 2, 10))))
    });
    group.bench_function("month_grid", |b| {
        b.iter(|| month_grid(black_box(2024), black_box(2)))
    });
    group.finish();
}

criterion_group!(benches, conversion_bench, almanac_bench);
criterion_main!(benches);
