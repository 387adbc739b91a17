//! Utility functions for reporting and console visualization.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::problem::Problem;
use crate::solution::Individual;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Save a solution to a file.
pub fn save_solution<P: AsRef<Path>>(
    individual: &Individual,
    problem: &Problem,
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    let fitness = individual.evaluate(problem);

    writeln!(file, "CVRP Solution for instance: {}", problem.name)?;
    writeln!(file, "Total Distance: {:.2}", fitness)?;
    writeln!(file, "Is Feasible: {}", fitness.is_finite())?;
    writeln!(file, "Number of Routes: {}", individual.routes.len())?;
    writeln!(file)?;

    for (i, route) in individual.routes.iter().enumerate() {
        write!(file, "Route #{}: ", i + 1)?;

        if route.is_empty() {
            writeln!(file, "Empty")?;
            continue;
        }

        write!(file, "0")?; // Depot
        for &client in &route.clients {
            write!(file, " -> {}", client + 1)?;
        }
        writeln!(file, " -> 0")?; // Return to depot

        writeln!(file, "  Distance: {:.2}", route.distance(problem))?;
        writeln!(
            file,
            "  Load: {:.2} / {:.2}",
            route.load(problem),
            problem.vehicle_capacity
        )?;
        writeln!(file)?;
    }

    Ok(())
}

/// Print a character-grid visualization of the routes to the console.
pub fn print_solution_visualization(individual: &Individual, problem: &Problem) {
    println!("Solution Visualization for {}", problem.name);
    println!("Total Distance: {:.2}", individual.evaluate(problem));
    println!("Number of Routes: {}", individual.routes.len());
    println!();

    // Find max and min coordinates for scaling
    let mut min_x = problem.depot.x;
    let mut min_y = problem.depot.y;
    let mut max_x = problem.depot.x;
    let mut max_y = problem.depot.y;

    for client in &problem.clients {
        min_x = min_x.min(client.x);
        min_y = min_y.min(client.y);
        max_x = max_x.max(client.x);
        max_y = max_y.max(client.y);
    }

    let span_x = (max_x - min_x).max(1.0);
    let span_y = (max_y - min_y).max(1.0);

    let width = 80;
    let height = 25;

    let mut grid = vec![vec![' '; width]; height];

    let route_symbols = ['*', '+', 'x', '#', '@', '&', '%', '=', '^', '$'];

    for (r_idx, route) in individual.routes.iter().enumerate() {
        let symbol = route_symbols[r_idx % route_symbols.len()];

        for &client in &route.clients {
            let node = &problem.clients[client];
            let x = ((node.x - min_x) / span_x * (width as f64 - 1.0)) as usize;
            let y = ((node.y - min_y) / span_y * (height as f64 - 1.0)) as usize;

            grid[y][x] = symbol;
        }
    }

    let depot_x = ((problem.depot.x - min_x) / span_x * (width as f64 - 1.0)) as usize;
    let depot_y = ((problem.depot.y - min_y) / span_y * (height as f64 - 1.0)) as usize;
    grid[depot_y][depot_x] = 'D';

    for row in &grid {
        for &cell in row {
            print!("{}", cell);
        }
        println!();
    }
    println!();

    println!("Legend:");
    println!("D - Depot");
    for (r_idx, _) in individual
        .routes
        .iter()
        .enumerate()
        .take(route_symbols.len())
    {
        println!("{} - Route #{}", route_symbols[r_idx], r_idx + 1);
    }
    println!();
}

/// Print the best-fitness-per-generation curve as a console plot.
pub fn print_fitness_history(history: &[f64]) {
    let finite: Vec<f64> = history.iter().copied().filter(|f| f.is_finite()).collect();
    if finite.is_empty() {
        println!("Fitness history: no feasible generations recorded");
        return;
    }

    let width = 60;
    let height = 15;

    let mut min_fitness = f64::MAX;
    let mut max_fitness = f64::MIN;
    for &fitness in &finite {
        min_fitness = min_fitness.min(fitness);
        max_fitness = max_fitness.max(fitness);
    }
    let span = (max_fitness - min_fitness).max(1e-9);

    let mut grid = vec![vec![' '; width]; height];

    for (i, &fitness) in finite.iter().enumerate() {
        let x = if finite.len() > 1 {
            i * (width - 1) / (finite.len() - 1)
        } else {
            0
        };
        let level = ((fitness - min_fitness) / span * (height as f64 - 1.0)) as usize;
        let y = height - 1 - level;
        grid[y][x] = '*';
    }

    println!(
        "Fitness over {} generations (best {:.2}, worst {:.2}):",
        history.len(),
        min_fitness,
        max_fitness
    );
    for row in &grid {
        print!("|");
        for &cell in row {
            print!("{}", cell);
        }
        println!("|");
    }
    println!();
}
