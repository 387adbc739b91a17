//! Benchmarks for the GA-CVRP solver.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
#[cfg(feature = "bench")]
use ga_cvrp::config::Config;
#[cfg(feature = "bench")]
use ga_cvrp::problem::{Node, Problem};
#[cfg(feature = "bench")]
use ga_cvrp::GaAlgorithm;
#[cfg(feature = "bench")]
use rand::SeedableRng;
#[cfg(feature = "bench")]
use rand_chacha::ChaCha8Rng;

/// Create a benchmark problem of specified size.
#[cfg(feature = "bench")]
fn create_benchmark_problem(size: usize) -> Problem {
    let depot = Node::new(0, 0.0, 0.0, 0.0);

    // Clients in a grid arrangement
    let grid_size = (size as f64).sqrt().ceil() as usize;
    let clients = (0..size)
        .map(|i| {
            let row = i / grid_size;
            let col = i % grid_size;
            Node::new(i, col as f64 * 10.0, row as f64 * 10.0, 1.0)
        })
        .collect();

    let num_vehicles = (size / 5).max(1);
    Problem::new(
        format!("BenchProblem_{}", size),
        depot,
        clients,
        num_vehicles,
        10.0,
    )
    .unwrap()
}

#[cfg(feature = "bench")]
fn benchmark_initialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialization");

    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let config = Config::new().with_population_size(50);

            b.iter(|| {
                let mut algorithm =
                    GaAlgorithm::new(problem.clone(), config.clone()).unwrap();
                let mut rng = ChaCha8Rng::seed_from_u64(42);
                algorithm.initialize(&mut rng).unwrap();
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_generation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_step");

    for size in [50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let config = Config::new()
                .with_population_size(50)
                .with_mutation_rate(0.05);

            let mut algorithm = GaAlgorithm::new(problem, config).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            algorithm.initialize(&mut rng).unwrap();

            b.iter(|| algorithm.step(&mut rng));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(benches, benchmark_initialization, benchmark_generation_step);
#[cfg(feature = "bench")]
criterion_main!(benches);

#[cfg(not(feature = "bench"))]
fn main() {}
