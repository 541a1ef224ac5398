//! Criterion benchmarks for the MCDA scorers and the full pipeline.
//!
//! Uses synthetic tables (deterministic pseudo-random criterion values)
//! to measure pure scoring overhead independent of any data source.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mcda_consensus::ahp::{AhpConfig, AhpScorer};
use mcda_consensus::analysis::{perform_analysis, AnalysisConfig};
use mcda_consensus::table::{Alternative, AlternativeTable, Direction};
use mcda_consensus::topsis::{TopsisConfig, TopsisScorer};
use mcda_consensus::uta::{UtaConfig, UtaScorer};

/// Deterministic synthetic table: `n` alternatives over `d` criteria.
fn synthetic_table(n: usize, d: usize) -> AlternativeTable {
    let alternatives = (0..n)
        .map(|i| {
            let values = (0..d)
                .map(|j| {
                    // Cheap LCG keeps the bench reproducible without an RNG dependency.
                    let x = i
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(j.wrapping_mul(1442695040888963407))
                        % 1000;
                    x as f64 / 10.0
                })
                .collect();
            Alternative::new(i as u32 + 1, values)
        })
        .collect();
    AlternativeTable::new(alternatives).expect("synthetic table is rectangular")
}

fn bench_topsis(c: &mut Criterion) {
    let mut group = c.benchmark_group("topsis");
    for &n in &[10usize, 100, 500] {
        let table = synthetic_table(n, 5);
        let config = TopsisConfig::new(vec![0.0; 5], vec![100.0; 5])
            .with_weights(vec![1.0, 2.0, 3.0, 2.0, 1.0])
            .with_directions(vec![
                Direction::Benefit,
                Direction::Cost,
                Direction::Benefit,
                Direction::Benefit,
                Direction::Cost,
            ]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| TopsisScorer::run(black_box(&table), black_box(&config)));
        });
    }
    group.finish();
}

fn bench_ahp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ahp");
    // AHP builds n x n ratio matrices per criterion; keep n moderate.
    for &n in &[10usize, 50, 200] {
        let table = synthetic_table(n, 4);
        let config = AhpConfig::new(vec![0.0; 4], vec![100.0; 4])
            .with_criteria(vec![0, 1, 2, 3])
            .with_comparisons(vec![1.0, 3.0, 5.0, 2.0, 4.0, 2.0])
            .with_directions(vec![Direction::Benefit; 4]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| AhpScorer::run(black_box(&table), black_box(&config)));
        });
    }
    group.finish();
}

fn bench_uta(c: &mut Criterion) {
    let mut group = c.benchmark_group("uta");
    for &n in &[100usize, 1000] {
        let table = synthetic_table(n, 5);
        let config = UtaConfig::new(vec![0.0; 5], vec![100.0; 5]).with_segments(vec![5; 5]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| UtaScorer::run(black_box(&table), black_box(&config)));
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for &n in &[10usize, 50, 100] {
        let table = synthetic_table(n, 4);
        let config = AnalysisConfig::defaults_for(&table);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| perform_analysis(black_box(&table), black_box(&config)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_topsis,
    bench_ahp,
    bench_uta,
    bench_full_pipeline
);
criterion_main!(benches);
