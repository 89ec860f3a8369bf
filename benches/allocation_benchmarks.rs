//! Performance benchmarks for the gratuity engine.
//!
//! This benchmark suite covers:
//! - Exact division for a typical shift crew
//! - Whole-bill distribution for a typical drawer
//! - Scaling of the greedy pass with crew size and drawer depth
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use gratuity_engine::calculation::{compute_distribution, compute_division};
use gratuity_engine::config::{EngineConfig, LeftoverPolicy};
use gratuity_engine::models::{DenominationInventory, Worker};

/// Creates a crew whose hours cycle through a few realistic shift lengths.
fn create_crew(size: usize) -> Vec<Worker> {
    let shift_quarters = [32, 26, 30, 17, 24, 35];
    (0..size)
        .map(|i| {
            let quarters = shift_quarters[i % shift_quarters.len()];
            Worker::new(i, format!("worker_{i:03}"), Decimal::new(quarters * 25, 2))
        })
        .collect()
}

/// Creates a drawer with `depth` bills of every default denomination.
fn create_drawer(config: &EngineConfig, depth: u32) -> DenominationInventory {
    let pairs: Vec<(u32, u32)> = config
        .denominations()
        .face_values()
        .iter()
        .map(|&face_value| (face_value, depth))
        .collect();
    DenominationInventory::from_counts(config.denominations(), pairs)
        .expect("Failed to build drawer")
}

/// Benchmark: Exact division across eight workers.
fn bench_division(c: &mut Criterion) {
    let crew = create_crew(8);
    let total = Decimal::new(128_743, 2);

    c.bench_function("division_8_workers", |b| {
        b.iter(|| black_box(compute_division(black_box(&crew), Some(total))))
    });
}

/// Benchmark: Whole-bill distribution across eight workers.
fn bench_distribution(c: &mut Criterion) {
    let config = EngineConfig::default().with_leftover_policy(LeftoverPolicy::GroupSizeAware);
    let crew = create_crew(8);
    let drawer = create_drawer(&config, 6);

    c.bench_function("distribution_8_workers", |b| {
        b.iter(|| black_box(compute_distribution(black_box(&crew), &drawer, &config)))
    });
}

/// Benchmark: Crew size and drawer depth, to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut group = c.benchmark_group("scaling");

    for crew_size in [1usize, 5, 20, 50].iter() {
        let crew = create_crew(*crew_size);
        let drawer = create_drawer(&config, 10);

        group.throughput(Throughput::Elements(*crew_size as u64));
        group.bench_with_input(BenchmarkId::new("workers", crew_size), crew_size, |b, _| {
            b.iter(|| black_box(compute_distribution(&crew, &drawer, &config)))
        });
    }

    for depth in [10u32, 100, 1_000].iter() {
        let crew = create_crew(20);
        let drawer = create_drawer(&config, *depth);

        group.throughput(Throughput::Elements(u64::from(*depth) * 7));
        group.bench_with_input(BenchmarkId::new("bills_per_denomination", depth), depth, |b, _| {
            b.iter(|| black_box(compute_distribution(&crew, &drawer, &config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_division, bench_distribution, bench_scaling);
criterion_main!(benches);
