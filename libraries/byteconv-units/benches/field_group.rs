use byteconv_units::{FieldGroup, UnitScale, parse_quantity};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

fn field_group_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_group");
    group.throughput(Throughput::Elements(1));

    group.bench_function("parse_grouped", |b| {
        b.iter(|| parse_quantity(black_box("1,099,511,627,776")))
    });

    let mut decimal = FieldGroup::new(UnitScale::decimal());
    group.bench_function("edit_decimal_tb", |b| {
        b.iter(|| decimal.edit(black_box(4), black_box("123.456")))
    });

    let mut binary = FieldGroup::new(UnitScale::binary());
    group.bench_function("edit_binary_bytes", |b| {
        b.iter(|| binary.edit(black_box(0), black_box("1,099,511,627,776")))
    });

    group.bench_function("edit_invalid", |b| {
        b.iter(|| binary.edit(black_box(2), black_box("12abc")))
    });

    group.finish();
}

criterion_group!(benches, field_group_benchmarks);
criterion_main!(benches);
