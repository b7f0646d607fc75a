use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fonoplan::PHONE_PLAN_UTIL;

/// A varied sample gives a fairer picture than a single number: prefixed
/// and bare forms, mobiles, service codes and rejects.
fn setup_parsing_data() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("+54 9 11 5123-4567", Some("AR")),
        ("011 4123 4567", Some("AR")),
        ("11 15 5123 4567", Some("AR")),
        ("0800-123-4567", Some("AR")),
        ("911", Some("AR")),
        ("3415123456", Some("AR")),
        ("+5215512345678", Some("MX")),
        ("(212) 555-1234", Some("US")),
        ("+59894123456", None),
        ("not a number", Some("AR")),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();
    // Touch the singleton so dataset loading stays out of the measurement.
    let _ = PHONE_PLAN_UTIL.supported_regions();

    let mut group = c.benchmark_group("Parsing");

    group.bench_function("parse()", |b| {
        b.iter(|| {
            for (number, country) in &numbers_to_parse {
                let _ = PHONE_PLAN_UTIL.parse(black_box(number), black_box(*country));
            }
        })
    });

    group.bench_function("is_valid()", |b| {
        b.iter(|| {
            for (number, country) in &numbers_to_parse {
                let _ = PHONE_PLAN_UTIL.is_valid(black_box(number), black_box(*country));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
