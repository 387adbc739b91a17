//! Basic example of using the GA-CVRP library.
//!
//! Runs the solver on a bundled 30-client gas-delivery instance, or on an
//! instance file, and reports the best routes plus the fitness curve.

use clap::Parser;
use ga_cvrp::config::Config;
use ga_cvrp::problem::{Node, Problem};
use ga_cvrp::utils::{
    format_duration, print_fitness_history, print_solution_visualization, save_solution,
};
use ga_cvrp::GaAlgorithm;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Genetic algorithm solver for the CVRP")]
struct Args {
    /// Instance file to solve; the bundled instance is used when omitted
    #[arg(short, long)]
    instance: Option<PathBuf>,

    /// Seed for the random number generator
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 2000)]
    generations: u32,

    /// Per-route mutation probability
    #[arg(short, long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Write the fitness history to this JSON file
    #[arg(long)]
    history: Option<PathBuf>,
}

/// The 30-client gas-delivery instance: depot at (400, 100), 5 vehicles of
/// capacity 100.
fn bundled_instance() -> Result<Problem, Box<dyn std::error::Error>> {
    let depot = Node::new(0, 400.0, 100.0, 0.0);

    let raw: [(f64, f64, f64); 30] = [
        (450.0, 120.0, 10.0),
        (520.0, 180.0, 15.0),
        (580.0, 140.0, 5.0),
        (650.0, 200.0, 20.0),
        (720.0, 160.0, 10.0),
        (780.0, 220.0, 15.0),
        (600.0, 250.0, 5.0),
        (500.0, 300.0, 10.0),
        (700.0, 280.0, 15.0),
        (550.0, 350.0, 20.0),
        (800.0, 150.0, 10.0),
        (750.0, 200.0, 5.0),
        (620.0, 320.0, 15.0),
        (480.0, 400.0, 10.0),
        (680.0, 360.0, 5.0),
        (900.0, 100.0, 20.0),
        (850.0, 180.0, 15.0),
        (500.0, 450.0, 10.0),
        (600.0, 400.0, 5.0),
        (700.0, 450.0, 15.0),
        (420.0, 200.0, 10.0),
        (550.0, 100.0, 5.0),
        (650.0, 150.0, 15.0),
        (750.0, 300.0, 20.0),
        (800.0, 400.0, 10.0),
        (900.0, 250.0, 15.0),
        (450.0, 500.0, 5.0),
        (580.0, 480.0, 10.0),
        (700.0, 500.0, 15.0),
        (620.0, 200.0, 20.0),
    ];

    let clients = raw
        .iter()
        .enumerate()
        .map(|(i, &(x, y, demand))| Node::new(i, x, y, demand))
        .collect();

    Ok(Problem::new(
        "fogas-30".to_string(),
        depot,
        clients,
        5,
        100.0,
    )?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let problem = match &args.instance {
        Some(path) => {
            println!("Loading problem from: {}", path.display());
            Problem::from_file(path)?
        }
        None => bundled_instance()?,
    };
    println!(
        "Loaded problem: {} with {} clients, {} vehicles of capacity {}",
        problem.name,
        problem.client_count(),
        problem.num_vehicles,
        problem.vehicle_capacity
    );

    let population_size = 50.max(problem.client_count() * 2);
    let config = Config::new()
        .with_population_size(population_size)
        .with_num_generations(args.generations)
        .with_mutation_rate(args.mutation_rate);

    let mut algorithm = GaAlgorithm::new(problem.clone(), config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    println!(
        "Starting search ({} generations, population {})",
        args.generations, population_size
    );
    let start_time = Instant::now();
    let best = algorithm.run(&mut rng)?.clone();
    let runtime = start_time.elapsed();

    println!("Search completed in {}", format_duration(runtime));
    println!("Best fitness: {:.2}", algorithm.best_fitness);
    println!("Number of routes: {}", best.routes.len());

    let output_path = format!("{}.sol", problem.name);
    println!("Saving solution to: {}", output_path);
    save_solution(&best, &problem, &output_path)?;

    print_solution_visualization(&best, &problem);
    print_fitness_history(&algorithm.fitness_history);

    if let Some(path) = &args.history {
        println!("Writing fitness history to: {}", path.display());
        serde_json::to_writer(File::create(path)?, &algorithm.fitness_history)?;
    }

    Ok(())
}
