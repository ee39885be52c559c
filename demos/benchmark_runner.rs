use grid_astar::GridMap;
use maze_benchmark::*;
use std::path::Path;
use std::time::{Duration, Instant};

// Runs every Moving AI benchmark found under ./maps and ./scenarios.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let root = Path::new(".");
    let mut total_time = Duration::ZERO;
    for name in benchmark_names(root)? {
        println!("Benchmark name: {}", name);
        let benchmark = load_benchmark(root, &name)?;
        let map = GridMap::new(&benchmark.map, benchmark.width, benchmark.height)?;
        let number_of_scenarios = benchmark.scenarios.len().max(1) as u32;
        let before = Instant::now();
        let found = run_scenarios(&map, &benchmark.scenarios);
        let elapsed = before.elapsed();
        println!(
            "\tElapsed time: {:.2?}; per scenario: {:.2?}; paths found: {}/{}",
            elapsed,
            elapsed / number_of_scenarios,
            found,
            benchmark.scenarios.len()
        );
        total_time += elapsed;
    }
    println!("\tTotal benchmark time: {:.2?}", total_time);
    Ok(())
}

fn run_scenarios(map: &GridMap, scenarios: &[Scenario]) -> usize {
    scenarios
        .iter()
        .filter(|s| map.shortest_path(s.start, s.end).is_some())
        .count()
}
