use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nongli::{solar_term, stem_branch, GregorianDate, SolarTerm};

fn bench_to_chinese(c: &mut Criterion) {
    let dates: Vec<GregorianDate> = (1u8..=12)
        .map(|month| GregorianDate::new(2017, month, 15).unwrap())
        .collect();
    c.bench_function("to_chinese_year", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(date.to_chinese().unwrap());
            }
        })
    });
}

fn bench_solar_term(c: &mut Criterion) {
    c.bench_function("solar_term_all", |b| {
        b.iter(|| {
            for index in 0..24 {
                let term = SolarTerm::from_index(index).unwrap();
                black_box(solar_term(black_box(2017), term).unwrap());
            }
        })
    });
}

fn bench_stem_branch(c: &mut Criterion) {
    let date = GregorianDate::new(2017, 6, 15).unwrap();
    c.bench_function("stem_branch", |b| {
        b.iter(|| black_box(stem_branch(black_box(date))))
    });
}

criterion_group!(benches, bench_to_chinese, bench_solar_term, bench_stem_branch);
criterion_main!(benches);
