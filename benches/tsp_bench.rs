//! Criterion benchmarks for the TSP genetic engine.
//!
//! Uses synthetic ring instances so timings measure engine overhead rather
//! than instance loading.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_genetic::ga::operators::{order_crossover, single_point_crossover, swap_mutation};
use tsp_genetic::ga::{EngineConfig, EvolutionEngine, Selection, Tour};
use tsp_genetic::problem::CostModel;
use tsp_genetic::random::{create_rng, random_permutation};

/// `n` locations evenly spaced on a circle, Euclidean costs.
fn ring(n: usize) -> CostModel {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let a = i as f64 * std::f64::consts::TAU / n as f64;
            (a.cos() * 1000.0, a.sin() * 1000.0)
        })
        .collect();
    let rows = points
        .iter()
        .map(|&(x1, y1)| {
            points
                .iter()
                .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                .collect()
        })
        .collect();
    CostModel::new(rows).expect("ring matrix is valid")
}

// ===========================================================================
// Operators
// ===========================================================================

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");
    for &n in &[20usize, 100, 500] {
        let mut rng = create_rng(1);
        let p1 = random_permutation(n, &mut rng);
        let p2 = random_permutation(n, &mut rng);

        group.bench_with_input(BenchmarkId::new("single_point", n), &n, |b, &n| {
            b.iter(|| single_point_crossover(black_box(&p1), black_box(&p2), n / 2))
        });
        group.bench_with_input(BenchmarkId::new("order_ox", n), &n, |b, _| {
            b.iter(|| order_crossover(black_box(&p1), black_box(&p2), &mut rng))
        });
        group.bench_with_input(BenchmarkId::new("swap", n), &n, |b, _| {
            let mut perm = p1.clone();
            b.iter(|| swap_mutation(black_box(&mut perm), &mut rng))
        });
    }
    group.finish();
}

// ===========================================================================
// Fitness evaluation
// ===========================================================================

fn bench_tour_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_cost");
    for &n in &[20usize, 100, 500] {
        let costs = ring(n);
        let mut rng = create_rng(2);
        let order = random_permutation(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| Tour::new(black_box(order.clone()), &costs))
        });
    }
    group.finish();
}

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sample_size(10);
    for &n in &[20usize, 50] {
        let costs = ring(n);
        for selection in [Selection::InverseCost, Selection::Tournament(3)] {
            let id = BenchmarkId::new(format!("{selection:?}"), n);
            group.bench_with_input(id, &n, |b, _| {
                b.iter(|| {
                    let config = EngineConfig::default()
                        .with_population_size(200)
                        .with_generations(100)
                        .with_selection(selection)
                        .with_seed(42);
                    EvolutionEngine::new(&costs, config)
                        .and_then(|mut engine| engine.run(&()))
                        .map(|r| r.best_cost)
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_operators, bench_tour_cost, bench_engine);
criterion_main!(benches);
