//! Problem definition and data structures for the CVRP.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// Represents a node (client or depot) in the CVRP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub demand: f64,
}

impl Node {
    /// Create a new node.
    pub fn new(id: usize, x: f64, y: f64, demand: f64) -> Self {
        Node { id, x, y, demand }
    }

    /// Calculate the Euclidean distance between two nodes.
    pub fn distance(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A CVRP problem instance.
///
/// The distance matrix places the depot at index 0 and client `i` at index
/// `i + 1`. It is symmetric and never modified after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub depot: Node,
    pub clients: Vec<Node>,
    pub num_vehicles: usize,
    pub vehicle_capacity: f64,
    pub distance_matrix: Vec<Vec<f64>>,
}

impl Problem {
    /// Create a new CVRP problem, validating its structural preconditions.
    pub fn new(
        name: String,
        depot: Node,
        clients: Vec<Node>,
        num_vehicles: usize,
        vehicle_capacity: f64,
    ) -> Result<Self> {
        if clients.is_empty() {
            return Err(Error::InvalidArgument(
                "client list must not be empty".to_string(),
            ));
        }
        if num_vehicles < 1 {
            return Err(Error::InvalidArgument(
                "vehicle count must be at least 1".to_string(),
            ));
        }

        let total_demand: f64 = clients.iter().map(|c| c.demand).sum();
        let fleet_capacity = num_vehicles as f64 * vehicle_capacity;
        if total_demand > fleet_capacity {
            return Err(Error::InvalidArgument(format!(
                "total demand {} exceeds fleet capacity {}",
                total_demand, fleet_capacity
            )));
        }

        let distance_matrix = Self::compute_distance_matrix(&depot, &clients);

        Ok(Problem {
            name,
            depot,
            clients,
            num_vehicles,
            vehicle_capacity,
            distance_matrix,
        })
    }

    /// Distance between two matrix indices (0 = depot, i + 1 = client i).
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Get the number of clients (excluding the depot).
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// Get the demand of a client by its id.
    pub fn demand_of(&self, client: usize) -> f64 {
        self.clients[client].demand
    }

    /// Sum of all client demands.
    pub fn total_demand(&self) -> f64 {
        self.clients.iter().map(|c| c.demand).sum()
    }

    /// Generate the full distance matrix over depot and clients.
    fn compute_distance_matrix(depot: &Node, clients: &[Node]) -> Vec<Vec<f64>> {
        let n = clients.len() + 1;
        let mut matrix = vec![vec![0.0; n]; n];

        let mut points: Vec<&Node> = Vec::with_capacity(n);
        points.push(depot);
        points.extend(clients.iter());

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = points[i].distance(points[j]);
                }
            }
        }

        matrix
    }

    /// Load a problem from a file.
    ///
    /// Format: a name line, a line with `<capacity> <num_vehicles>`, then one
    /// node per line as `<id> <x> <y> <demand>`. The first node with demand 0
    /// is the depot; the remaining nodes become clients in order of
    /// appearance.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut lines = reader.lines();

        let name = lines
            .next()
            .ok_or_else(|| Error::Parse("missing name line".to_string()))??
            .trim()
            .to_string();

        let vehicle_info = lines
            .next()
            .ok_or_else(|| Error::Parse("missing vehicle line".to_string()))??;
        let parts: Vec<&str> = vehicle_info.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(Error::Parse(
                "vehicle line must contain capacity and vehicle count".to_string(),
            ));
        }
        let vehicle_capacity = parse_field::<f64>(parts[0], "capacity")?;
        let num_vehicles = parse_field::<usize>(parts[1], "vehicle count")?;

        let mut depot = None;
        let mut clients = Vec::new();

        for line_result in lines {
            let line = line_result?;
            let parts: Vec<&str> = line.split_whitespace().collect();

            if parts.len() >= 4 {
                let x = parse_field::<f64>(parts[1], "x coordinate")?;
                let y = parse_field::<f64>(parts[2], "y coordinate")?;
                let demand = parse_field::<f64>(parts[3], "demand")?;

                if demand == 0.0 && depot.is_none() {
                    depot = Some(Node::new(0, x, y, 0.0));
                } else {
                    clients.push(Node::new(clients.len(), x, y, demand));
                }
            }
        }

        let depot = depot.ok_or_else(|| Error::Parse("no depot node found".to_string()))?;

        Problem::new(name, depot, clients, num_vehicles, vehicle_capacity)
    }
}

fn parse_field<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| Error::Parse(format!("invalid {}: {}", what, value)))
}
