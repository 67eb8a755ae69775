// Range proof prove/verify benchmarks.
//
// Run with: cargo bench --bench range_proof

#[macro_use]
extern crate criterion;

use bulletproofs::{range_proof_prove, range_proof_verify};
use criterion::{BenchmarkId, Criterion};

fn prove_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_prove");
    for &n in &[8usize, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| range_proof_prove(5, n).unwrap());
        });
    }
    group.finish();
}

fn verify_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_verify");
    for &n in &[8usize, 16, 32, 64] {
        let (v_commit, bytes) = range_proof_prove(5, n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| range_proof_verify(&bytes, &v_commit, n));
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = prove_benchmarks, verify_benchmarks
}

criterion_main!(benches);
