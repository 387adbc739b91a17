//! # GA-CVRP
//!
//! A genetic algorithm for the Capacitated Vehicle Routing Problem (CVRP):
//! partition clients among a fleet of identical-capacity vehicles so every
//! client is served exactly once, minimizing total travel distance.
//!
//! The engine is a plain generational GA. Candidate solutions hold one route
//! per vehicle slot; each generation evaluates the whole population, selects
//! the best half as parents, breeds children through crossover, mutation and
//! repair, and carries the best-ever individual forward unconditionally.
//! All randomness flows through an explicitly passed generator, so runs are
//! reproducible from a seed.

pub mod config;
pub mod error;
pub mod genetic;
pub mod population;
pub mod problem;
pub mod repair;
pub mod solution;
pub mod utils;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::genetic::Genetic;
use crate::population::Population;
use crate::problem::Problem;
use crate::solution::Individual;

use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The main algorithm structure driving the generational loop.
pub struct GaAlgorithm {
    pub problem: Problem,
    pub config: Config,
    pub population: Population,
    pub best_individual: Option<Individual>,
    pub best_fitness: f64,
    /// Best fitness observed per generation, append-only
    pub fitness_history: Vec<f64>,
    pub generation: u32,
    pub genetic: Genetic,
    cancel: Arc<AtomicBool>,
}

impl GaAlgorithm {
    /// Create a new solver for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.mutation_rate) {
            return Err(Error::InvalidArgument(format!(
                "mutation rate must be in [0, 1], got {}",
                config.mutation_rate
            )));
        }

        Ok(GaAlgorithm {
            problem,
            config,
            population: Population {
                individuals: Vec::new(),
            },
            best_individual: None,
            best_fitness: f64::INFINITY,
            fitness_history: Vec::new(),
            generation: 0,
            genetic: Genetic,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Handle for requesting cancellation from outside the run loop.
    ///
    /// The flag is checked once per generation boundary; a generation in
    /// flight always completes before the request is honored.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Build and evaluate the initial population.
    ///
    /// The best-known solution is seeded from the first feasible individual
    /// in population order. Fails with [`Error::NoValidInitialSolution`]
    /// when every individual of the first generation is infeasible.
    pub fn initialize(&mut self, rng: &mut impl Rng) -> Result<()> {
        self.population = Population::initialize(&self.problem, &self.config, rng)?;

        let fitness_values = self.population.evaluate_all(&self.problem);
        let first_feasible = fitness_values
            .iter()
            .position(|f| f.is_finite())
            .ok_or(Error::NoValidInitialSolution)?;

        self.best_individual = Some(self.population.individuals[first_feasible].clone());
        self.best_fitness = fitness_values[first_feasible];
        self.fitness_history.push(self.best_fitness);

        info!(
            "initialized population of {} for {} clients, initial best {:.2}",
            self.population.len(),
            self.problem.client_count(),
            self.best_fitness
        );

        Ok(())
    }

    /// Advance the search by one generation.
    ///
    /// Evaluates the whole population, updates the best-ever individual,
    /// appends the generation minimum to the fitness history, then replaces
    /// the population with the offspring of the top half, keeping a copy of
    /// the best-ever individual as the final member.
    pub fn step(&mut self, rng: &mut impl Rng) {
        let fitness_values = self.population.evaluate_all(&self.problem);

        let mut min_index = 0;
        for (i, &fitness) in fitness_values.iter().enumerate() {
            if fitness < fitness_values[min_index] {
                min_index = i;
            }
        }
        let min_fitness = fitness_values[min_index];

        if min_fitness < self.best_fitness {
            self.best_fitness = min_fitness;
            self.best_individual = Some(self.population.individuals[min_index].clone());
            debug!(
                "generation {}: new best fitness {:.2}",
                self.generation, min_fitness
            );
        }
        self.fitness_history.push(min_fitness);

        let mut offspring = Vec::with_capacity(self.config.population_size);
        let parents = self
            .population
            .select_parents(&fitness_values, self.config.num_parents());

        for (parent1, parent2) in parents.into_iter().tuples() {
            let (mut child1, mut child2) =
                self.genetic.crossover(parent1, parent2, &self.problem, rng);

            self.genetic
                .mutate(&mut child1, self.config.mutation_rate, &self.problem, rng);
            self.genetic
                .mutate(&mut child2, self.config.mutation_rate, &self.problem, rng);

            offspring.push(child1);
            offspring.push(child2);
        }

        offspring.truncate(self.config.population_size.saturating_sub(1));
        if let Some(best) = &self.best_individual {
            offspring.push(best.clone());
        }

        self.population = Population {
            individuals: offspring,
        };
        self.generation += 1;
    }

    /// Run the algorithm for the configured number of generations.
    ///
    /// Stops early only when the cancellation flag is observed at a
    /// generation boundary. Returns the best-ever individual.
    pub fn run(&mut self, rng: &mut impl Rng) -> Result<&Individual> {
        self.initialize(rng)?;

        while self.generation < self.config.num_generations {
            if self.cancel.load(Ordering::Relaxed) {
                info!("cancelled at generation {}", self.generation);
                break;
            }
            self.step(rng);
        }

        info!(
            "finished after {} generations, best fitness {:.2}",
            self.generation, self.best_fitness
        );

        self.best_individual
            .as_ref()
            .ok_or(Error::NoValidInitialSolution)
    }
}
