//! Repair operator restoring coverage and slot-count invariants.

use crate::problem::Problem;
use crate::solution::{Individual, Route};

/// Restores the structural invariants that crossover and mutation may break.
pub struct Repair;

impl Repair {
    /// Reinsert missing clients and normalize the route-slot count.
    ///
    /// Missing clients are processed in ascending id order. Each one goes to
    /// the first route (in slot order) whose load stays within capacity
    /// after insertion; when no route qualifies, a new overflow slot holding
    /// just that client is appended without a capacity check. Afterwards the
    /// individual is padded with empty routes up to the fixed vehicle count,
    /// or truncated from the end when it has extra slots.
    ///
    /// Truncation can discard clients placed in the removed overflow slots;
    /// the individual then scores the infeasibility sentinel until a later
    /// repair reinserts them.
    pub fn restore(individual: &mut Individual, problem: &Problem) {
        let missing = individual.missing_clients(problem.client_count());

        for client in missing {
            let demand = problem.demand_of(client);
            let slot = individual
                .routes
                .iter()
                .position(|route| route.load(problem) + demand <= problem.vehicle_capacity);

            match slot {
                Some(i) => individual.routes[i].clients.push(client),
                None => individual.routes.push(Route::with_client(client)),
            }
        }

        while individual.routes.len() < problem.num_vehicles {
            individual.routes.push(Route::new());
        }
        individual.routes.truncate(problem.num_vehicles);
    }
}
