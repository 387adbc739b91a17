//! Configuration parameters for the genetic algorithm.

use serde::{Deserialize, Serialize};

/// Configuration settings for a solver run. Fixed once the run starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of individuals per generation
    pub population_size: usize,
    /// Number of generations to run
    pub num_generations: u32,
    /// Per-route probability of each mutation kind, in [0, 1]
    pub mutation_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            population_size: 50,
            num_generations: 2000,
            mutation_rate: 0.05,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the number of generations.
    pub fn with_num_generations(mut self, generations: u32) -> Self {
        self.num_generations = generations;
        self
    }

    /// Set the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Number of parents selected each generation (top half of the population).
    pub fn num_parents(&self) -> usize {
        self.population_size / 2
    }
}
