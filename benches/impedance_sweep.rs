use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gradient_model::impedance::{surface_impedance, surface_impedance_over_frequencies};
use gradient_model::sweep::logspace_hz;

fn bench_impedance_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("impedance_sweep");
    let freqs = logspace_hz(1.0e9, 1.0e11, 200);

    group.bench_function(BenchmarkId::new("copper_100nm", freqs.len()), |b| {
        b.iter(|| surface_impedance_over_frequencies(&freqs, 100.0e-9, None, 5.8e7).unwrap())
    });
    group.finish();
}

fn bench_single_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("impedance_point");
    for rq_nm in [10.0, 100.0, 1000.0] {
        group.bench_function(BenchmarkId::new("copper_10ghz", rq_nm as usize), |b| {
            b.iter(|| surface_impedance(1.0e10, rq_nm * 1.0e-9, None, 5.8e7).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_impedance_sweep, bench_single_point);
criterion_main!(benches);
