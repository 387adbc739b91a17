//! Genetic operators: per-slot crossover and swap/relocate mutation.

use crate::problem::Problem;
use crate::repair::Repair;
use crate::solution::{Individual, Route};
use rand::Rng;

/// Implements the genetic operators of the algorithm.
pub struct Genetic;

impl Genetic {
    /// Combine two parents slot by slot into two children.
    ///
    /// The children have `max(parent1.len, parent2.len)` route slots. For
    /// each slot, child 1 takes parent 1's route when parent 2 has no route
    /// there or a fair coin lands heads, and parent 2's route otherwise;
    /// child 2 draws independently with the parent roles swapped. The draws
    /// are independent, not mirrored complements. An assembled route that
    /// exceeds capacity is truncated from its tail until it fits. Both
    /// children are repaired before being returned.
    pub fn crossover(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        problem: &Problem,
        rng: &mut impl Rng,
    ) -> (Individual, Individual) {
        let num_slots = parent1.route_count().max(parent2.route_count());

        let mut routes1 = Vec::with_capacity(num_slots);
        let mut routes2 = Vec::with_capacity(num_slots);

        for i in 0..num_slots {
            routes1.push(Self::draw_slot(parent1, parent2, i, problem, rng));
            routes2.push(Self::draw_slot(parent2, parent1, i, problem, rng));
        }

        let mut child1 = Individual::from_routes(routes1);
        let mut child2 = Individual::from_routes(routes2);

        Repair::restore(&mut child1, problem);
        Repair::restore(&mut child2, problem);

        (child1, child2)
    }

    /// Draw slot `i` preferring `first`, then truncate the tail to capacity.
    fn draw_slot(
        first: &Individual,
        second: &Individual,
        i: usize,
        problem: &Problem,
        rng: &mut impl Rng,
    ) -> Route {
        let mut route = if i < first.route_count()
            && (i >= second.route_count() || rng.gen_bool(0.5))
        {
            first.routes[i].clone()
        } else if i < second.route_count() {
            second.routes[i].clone()
        } else {
            Route::new()
        };

        while route.load(problem) > problem.vehicle_capacity && !route.clients.is_empty() {
            route.clients.pop();
        }

        route
    }

    /// Perturb an individual in place, then repair it. Never fails.
    ///
    /// Each route slot undergoes two independent trials against the mutation
    /// rate: an intra-route swap of two distinct positions (no-op below two
    /// clients), and the relocation of one random client to a different
    /// route slot. The relocation target is drawn uniformly from all slots
    /// except the source; the client is appended there only if capacity
    /// holds, and stays removed otherwise, pending repair.
    pub fn mutate(
        &self,
        individual: &mut Individual,
        mutation_rate: f64,
        problem: &Problem,
        rng: &mut impl Rng,
    ) {
        let num_slots = individual.route_count();

        for i in 0..num_slots {
            if rng.gen::<f64>() < mutation_rate && individual.routes[i].len() >= 2 {
                let picks = rand::seq::index::sample(rng, individual.routes[i].len(), 2);
                individual.routes[i].clients.swap(picks.index(0), picks.index(1));
            }

            if rng.gen::<f64>() < mutation_rate
                && !individual.routes[i].is_empty()
                && num_slots > 1
            {
                let pos = rng.gen_range(0..individual.routes[i].len());
                let client = individual.routes[i].clients.remove(pos);

                let mut target = rng.gen_range(0..num_slots - 1);
                if target >= i {
                    target += 1;
                }

                let demand = problem.demand_of(client);
                if individual.routes[target].load(problem) + demand <= problem.vehicle_capacity {
                    individual.routes[target].clients.push(client);
                }
            }
        }

        Repair::restore(individual, problem);
    }
}
