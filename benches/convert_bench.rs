use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nongli::chinese::{LunarYear, convert, resolve, table};

fn convert_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.bench_function("after_new_year", |b| {
        b.iter(|| convert(black_box(2018), black_box(5), black_box(20)))
    });
    group.bench_function("before_new_year", |b| {
        b.iter(|| convert(black_box(2024), black_box(2), black_box(9)))
    });
    group.bench_function("resolve", |b| {
        b.iter(|| resolve(black_box(2020), black_box(150)))
    });
    group.finish();
}

fn table_bench(c: &mut Criterion) {
    let entry = table::YearEntry::lookup(2017);

    let mut group = c.benchmark_group("table");
    group.bench_function("decode", |b| {
        b.iter(|| table::decode(black_box(entry.pattern), black_box(13)))
    });
    group.bench_function("lunar_year", |b| {
        b.iter(|| LunarYear::new(black_box(2017)).map(|y| y.days()))
    });
    group.finish();
}

criterion_group!(benches, convert_bench, table_bench);
criterion_main!(benches);
