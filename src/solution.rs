//! Candidate solution representation and fitness evaluation.

use crate::problem::Problem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An individual's fitness: total route distance, or `f64::INFINITY` when
/// any route exceeds capacity or any client is left unserved.
pub const INFEASIBLE: f64 = f64::INFINITY;

/// The ordered sequence of clients visited by one vehicle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    /// Client ids in visit order (depot excluded; it anchors both ends)
    pub clients: Vec<usize>,
}

impl Route {
    /// Create a new, empty route.
    pub fn new() -> Self {
        Route {
            clients: Vec::new(),
        }
    }

    /// Create a route with a single client.
    pub fn with_client(client: usize) -> Self {
        Route {
            clients: vec![client],
        }
    }

    /// Total demand carried on this route.
    pub fn load(&self, problem: &Problem) -> f64 {
        self.clients.iter().map(|&c| problem.demand_of(c)).sum()
    }

    /// Travel distance depot -> clients in order -> depot.
    pub fn distance(&self, problem: &Problem) -> f64 {
        if self.clients.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        let mut prev = 0;
        for &client in &self.clients {
            total += problem.get_distance(prev, client + 1);
            prev = client + 1;
        }
        total + problem.get_distance(prev, 0)
    }

    /// Check if the route is empty.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Number of clients on the route.
    pub fn len(&self) -> usize {
        self.clients.len()
    }
}

/// A candidate solution: one route per vehicle slot.
///
/// The invariants (full client coverage, per-route capacity, fixed slot
/// count) may be violated transiently between genetic operators; the repair
/// pass restores them before an individual re-enters the population.
#[derive(Clone, Serialize, Deserialize)]
pub struct Individual {
    pub routes: Vec<Route>,
}

impl Individual {
    /// Create an individual with the given number of empty route slots.
    pub fn new(num_vehicles: usize) -> Self {
        Individual {
            routes: vec![Route::new(); num_vehicles],
        }
    }

    /// Create an individual from explicit routes.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Individual { routes }
    }

    /// Get the number of route slots.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Evaluate the total travel distance of this individual.
    ///
    /// Pure: no mutation, deterministic for identical inputs. Returns
    /// [`INFEASIBLE`] when any route's summed demand exceeds the vehicle
    /// capacity or when any client is missing from every route. Each route
    /// is priced depot -> c1 -> ... -> cn -> depot, with client id `c`
    /// living at matrix index `c + 1`.
    pub fn evaluate(&self, problem: &Problem) -> f64 {
        let n = problem.client_count();
        let mut total_distance = 0.0;
        let mut visited = vec![false; n];
        let mut visited_count = 0;

        for route in &self.routes {
            if route.load(problem) > problem.vehicle_capacity {
                return INFEASIBLE;
            }

            let mut prev = 0; // depot
            for &client in &route.clients {
                total_distance += problem.get_distance(prev, client + 1);
                prev = client + 1;
                if !visited[client] {
                    visited[client] = true;
                    visited_count += 1;
                }
            }
            total_distance += problem.get_distance(prev, 0);
        }

        if visited_count != n {
            return INFEASIBLE;
        }

        total_distance
    }

    /// Check feasibility (capacity and coverage).
    pub fn is_feasible(&self, problem: &Problem) -> bool {
        self.evaluate(problem).is_finite()
    }

    /// Clients of `0..num_clients` absent from every route, in ascending order.
    pub fn missing_clients(&self, num_clients: usize) -> Vec<usize> {
        let mut present = vec![false; num_clients];

        for route in &self.routes {
            for &client in &route.clients {
                present[client] = true;
            }
        }

        (0..num_clients).filter(|&c| !present[c]).collect()
    }
}

impl fmt::Debug for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Individual:")?;
        writeln!(f, "  Routes: {}", self.routes.len())?;

        for (i, route) in self.routes.iter().enumerate() {
            writeln!(f, "  Route {}: {:?}", i, route.clients)?;
        }

        Ok(())
    }
}
