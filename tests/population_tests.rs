//! Unit tests for population initialization and parent selection.

use ga_cvrp::config::Config;
use ga_cvrp::error::Error;
use ga_cvrp::population::Population;
use ga_cvrp::problem::{Node, Problem};
use ga_cvrp::solution::{Individual, Route};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Creates a simple test problem with a depot and 9 unit-demand clients.
fn create_test_problem() -> Problem {
    let depot = Node::new(0, 0.0, 0.0, 0.0);

    let mut clients = Vec::new();
    for i in 0..3 {
        for j in 0..3 {
            let id = i * 3 + j;
            let x = (i as f64 + 1.0) * 10.0;
            let y = (j as f64 + 1.0) * 10.0;
            clients.push(Node::new(id, x, y, 1.0));
        }
    }

    Problem::new("TestProblem".to_string(), depot, clients, 3, 5.0).unwrap()
}

#[test]
fn test_initialize_population_shape() {
    let problem = create_test_problem();
    let config = Config::new().with_population_size(20);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let population = Population::initialize(&problem, &config, &mut rng).unwrap();

    assert_eq!(population.len(), 20);
    for individual in &population.individuals {
        assert_eq!(individual.route_count(), problem.num_vehicles);
    }
}

#[test]
fn test_initialize_respects_capacity_and_uniqueness() {
    let problem = create_test_problem();
    let config = Config::new().with_population_size(30);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let population = Population::initialize(&problem, &config, &mut rng).unwrap();

    for individual in &population.individuals {
        let mut seen = vec![false; problem.client_count()];
        for route in &individual.routes {
            assert!(route.load(&problem) <= problem.vehicle_capacity);
            for &client in &route.clients {
                assert!(!seen[client], "client {} assigned twice", client);
                seen[client] = true;
            }
        }
    }
}

#[test]
fn test_initialize_rejects_zero_population() {
    let problem = create_test_problem();
    let config = Config::new().with_population_size(0);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let result = Population::initialize(&problem, &config, &mut rng);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_initialize_is_reproducible_from_seed() {
    let problem = create_test_problem();
    let config = Config::new().with_population_size(10);

    let mut rng1 = ChaCha8Rng::seed_from_u64(99);
    let mut rng2 = ChaCha8Rng::seed_from_u64(99);

    let pop1 = Population::initialize(&problem, &config, &mut rng1).unwrap();
    let pop2 = Population::initialize(&problem, &config, &mut rng2).unwrap();

    for (a, b) in pop1.individuals.iter().zip(pop2.individuals.iter()) {
        for (ra, rb) in a.routes.iter().zip(b.routes.iter()) {
            assert_eq!(ra.clients, rb.clients);
        }
    }
}

/// Build a population of single-route individuals tagged by their first client.
fn tagged_population(count: usize) -> Population {
    let individuals = (0..count)
        .map(|i| Individual::from_routes(vec![Route::with_client(i)]))
        .collect();
    Population { individuals }
}

#[test]
fn test_select_parents_ascending_by_fitness() {
    let population = tagged_population(5);
    let fitness = vec![30.0, f64::INFINITY, 10.0, 20.0, f64::INFINITY];

    let parents = population.select_parents(&fitness, 3);

    assert_eq!(parents.len(), 3);
    assert_eq!(parents[0].routes[0].clients, vec![2]);
    assert_eq!(parents[1].routes[0].clients, vec![3]);
    assert_eq!(parents[2].routes[0].clients, vec![0]);
}

#[test]
fn test_select_parents_infeasible_sort_last() {
    let population = tagged_population(4);
    let fitness = vec![f64::INFINITY, 5.0, f64::INFINITY, 7.0];

    let parents = population.select_parents(&fitness, 4);

    assert_eq!(parents[0].routes[0].clients, vec![1]);
    assert_eq!(parents[1].routes[0].clients, vec![3]);
    // Infeasible entries keep their relative order at the back.
    assert_eq!(parents[2].routes[0].clients, vec![0]);
    assert_eq!(parents[3].routes[0].clients, vec![2]);
}

#[test]
fn test_select_parents_ties_keep_population_order() {
    let population = tagged_population(4);
    let fitness = vec![5.0, 1.0, 5.0, 1.0];

    let parents = population.select_parents(&fitness, 4);

    assert_eq!(parents[0].routes[0].clients, vec![1]);
    assert_eq!(parents[1].routes[0].clients, vec![3]);
    assert_eq!(parents[2].routes[0].clients, vec![0]);
    assert_eq!(parents[3].routes[0].clients, vec![2]);
}

#[test]
fn test_evaluate_all_matches_individual_evaluate() {
    let problem = create_test_problem();
    let config = Config::new().with_population_size(5);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let population = Population::initialize(&problem, &config, &mut rng).unwrap();
    let fitness = population.evaluate_all(&problem);

    assert_eq!(fitness.len(), population.len());
    for (individual, &value) in population.individuals.iter().zip(fitness.iter()) {
        assert_eq!(individual.evaluate(&problem), value);
    }
}
