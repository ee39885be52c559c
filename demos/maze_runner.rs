use clap::Parser;
use grid_astar::compute_shortest_path;
use maze_benchmark::{generate_maze, serialize_board, RunConfig};
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Times repeated searches across a seeded maze from its top-left to its bottom-right cell.
#[derive(Parser, Debug)]
struct Args {
    /// Maze width, odd and at least 3
    #[arg(long, default_value_t = RunConfig::default().width)]
    width: usize,
    /// Maze height, odd and at least 3
    #[arg(long, default_value_t = RunConfig::default().height)]
    height: usize,
    /// Number of timed searches
    #[arg(long, default_value_t = RunConfig::default().cycles)]
    cycles: usize,
    #[arg(long, default_value_t = RunConfig::default().seed)]
    seed: u64,
    /// Print the maze with the found path
    #[arg(long)]
    print: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> RunConfig {
        RunConfig {
            width: args.width,
            height: args.height,
            cycles: args.cycles,
            seed: args.seed,
            print_board: args.print,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = RunConfig::from(Args::parse());
    let map = match generate_maze(config.width, config.height, config.seed) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut total_time = Duration::ZERO;
    let mut path = None;
    for _ in 0..config.cycles {
        let before = Instant::now();
        let result = compute_shortest_path(
            &map,
            config.width,
            config.height,
            config.start(),
            config.end(),
        );
        total_time += before.elapsed();
        match result {
            Ok(found) => path = found,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if config.print_board {
        print!(
            "{}",
            serialize_board(&map, config.width, config.height, path.as_deref().unwrap_or(&[]))
        );
    }
    match &path {
        Some(path) => println!("Path length: {}", path.len()),
        None => println!("No path"),
    }
    let per_cycle = total_time / config.cycles.max(1) as u32;
    println!("Avg {:.3} ms", per_cycle.as_secs_f64() * 1000.0);
    ExitCode::SUCCESS
}
