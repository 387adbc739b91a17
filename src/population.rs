//! Population management: initialization, evaluation, and parent selection.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::solution::{Individual, Route};
use rand::{seq::SliceRandom, Rng};
use std::cmp::Ordering;

/// The set of candidate solutions for one generation.
#[derive(Debug, Clone)]
pub struct Population {
    pub individuals: Vec<Individual>,
}

impl Population {
    /// Build the initial population by capacity-greedy random assignment.
    ///
    /// For each individual the clients are shuffled and appended to the
    /// current vehicle slot while capacity allows; an overflowing client
    /// advances to the next slot. Once past the last slot, every slot is
    /// scanned for spare capacity, and a client that fits nowhere is left
    /// out of that individual (coverage is restored later by repair).
    pub fn initialize(
        problem: &Problem,
        config: &Config,
        rng: &mut impl Rng,
    ) -> Result<Population> {
        if config.population_size == 0 {
            return Err(Error::InvalidArgument(
                "population size must be greater than 0".to_string(),
            ));
        }

        let num_clients = problem.client_count();
        let num_vehicles = problem.num_vehicles;
        let mut individuals = Vec::with_capacity(config.population_size);

        for _ in 0..config.population_size {
            let mut routes = vec![Route::new(); num_vehicles];
            let mut order: Vec<usize> = (0..num_clients).collect();
            order.shuffle(rng);

            let mut current = 0;
            let mut load = 0.0;

            for client in order {
                let demand = problem.demand_of(client);

                if current < num_vehicles && load + demand <= problem.vehicle_capacity {
                    routes[current].clients.push(client);
                    load += demand;
                } else if current < num_vehicles {
                    current += 1;
                    if current < num_vehicles {
                        routes[current].clients.push(client);
                        load = demand;
                    } else {
                        Self::place_anywhere(&mut routes, client, demand, problem);
                    }
                } else {
                    Self::place_anywhere(&mut routes, client, demand, problem);
                }
            }

            individuals.push(Individual::from_routes(routes));
        }

        Ok(Population { individuals })
    }

    /// Append the client to the first route with spare capacity, if any.
    fn place_anywhere(routes: &mut [Route], client: usize, demand: f64, problem: &Problem) {
        for route in routes.iter_mut() {
            if route.load(problem) + demand <= problem.vehicle_capacity {
                route.clients.push(client);
                return;
            }
        }
    }

    /// Evaluate the fitness of every individual, in population order.
    pub fn evaluate_all(&self, problem: &Problem) -> Vec<f64> {
        self.individuals
            .iter()
            .map(|individual| individual.evaluate(problem))
            .collect()
    }

    /// Select the `num_parents` best individuals, ascending by fitness.
    ///
    /// The sort is stable: ties keep population order, and infeasible
    /// individuals (infinite fitness) sort behind every feasible one.
    pub fn select_parents<'a>(
        &'a self,
        fitness_values: &[f64],
        num_parents: usize,
    ) -> Vec<&'a Individual> {
        let mut order: Vec<usize> = (0..self.individuals.len()).collect();
        order.sort_by(|&a, &b| {
            fitness_values[a]
                .partial_cmp(&fitness_values[b])
                .unwrap_or(Ordering::Equal)
        });

        order
            .into_iter()
            .take(num_parents)
            .map(|i| &self.individuals[i])
            .collect()
    }

    /// Get the population size.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}
