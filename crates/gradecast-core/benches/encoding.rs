use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradecast_core::fields::{Field, FieldValue};
use gradecast_core::form::{FormManager, FormState};
use gradecast_core::row::FeatureRow;

fn bench_row_encoding(c: &mut Criterion) {
    let state = FormState::default();

    c.bench_function("encode_row", |b| {
        b.iter(|| FeatureRow::from(black_box(&state)))
    });
}

fn bench_validated_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    group.bench_function("numeric", |b| {
        let mut manager = FormManager::new();
        b.iter(|| {
            manager
                .set(Field::SleepHours, black_box(FieldValue::Float(8.0)))
                .unwrap()
        })
    });

    group.bench_function("categorical", |b| {
        let mut manager = FormManager::new();
        b.iter(|| {
            manager
                .set(
                    Field::Gender,
                    black_box(FieldValue::Choice("Male".to_string())),
                )
                .unwrap()
        })
    });

    group.bench_function("rejected", |b| {
        let mut manager = FormManager::new();
        b.iter(|| {
            manager
                .set(Field::Age, black_box(FieldValue::Int(30)))
                .unwrap_err()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_row_encoding, bench_validated_set);
criterion_main!(benches);
