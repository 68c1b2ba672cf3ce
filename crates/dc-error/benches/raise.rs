//! Raise/reset cost on a single record.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dc_error::{check, ErrorRecord, Origin};

const ORIGIN: Origin = Origin::new("bench.rs", "raise", 1);

fn bench_raise(c: &mut Criterion) {
    let mut group = c.benchmark_group("raise");

    group.bench_function("check_failure", |b| {
        let mut err = ErrorRecord::silent();
        b.iter(|| {
            err.raise_check_failure(black_box(ORIGIN));
            err.reset();
        })
    });

    group.bench_function("user_error", |b| {
        let mut err = ErrorRecord::silent();
        b.iter(|| {
            err.raise_user_error(ORIGIN, black_box("disk full"), 28);
            err.reset();
        })
    });

    group.bench_function("errno", |b| {
        let mut err = ErrorRecord::silent();
        b.iter(|| {
            err.raise_errno(ORIGIN, black_box(libc::ENOENT));
            err.reset();
        })
    });

    group.bench_function("passing_check", |b| {
        let mut err = ErrorRecord::silent();
        b.iter(|| check::equals(&mut err, black_box(4), black_box(4)))
    });

    group.finish();
}

criterion_group!(benches, bench_raise);
criterion_main!(benches);
