use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fonoplan::{FormatOptions, PHONE_PLAN_UTIL};

fn setup_format_data() -> Vec<(&'static str, &'static str)> {
    vec![
        ("+5491151234567", "AR"),
        ("01141234567", "AR"),
        ("08001234567", "AR"),
        ("+5215512345678", "MX"),
        ("2125551234", "US"),
        ("+59894123456", "UY"),
    ]
}

fn format_benchmark(c: &mut Criterion) {
    let numbers_to_format = setup_format_data();
    let options = FormatOptions::default();
    let _ = PHONE_PLAN_UTIL.supported_regions();

    let mut group = c.benchmark_group("Formatting");

    group.bench_function("format()", |b| {
        b.iter(|| {
            for (number, country) in &numbers_to_format {
                let _ = PHONE_PLAN_UTIL.format(
                    black_box(number),
                    black_box(country),
                    black_box(&options),
                );
            }
        })
    });

    // The partial formatter runs on every keystroke in form fields, so its
    // worst case (incomplete input falling back to heuristics) matters.
    group.bench_function("format_partial() incomplete", |b| {
        b.iter(|| {
            for partial in ["9", "91", "911555", "91155512", "+54911"] {
                let _ = PHONE_PLAN_UTIL.format_partial(
                    black_box(partial),
                    black_box("AR"),
                    black_box(&options),
                );
            }
        })
    });

    group.finish();
}

criterion_group!(benches, format_benchmark);
criterion_main!(benches);
