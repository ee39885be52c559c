//! Helpers for exercising grid path searches: seeded maze generation, text rendering of a
//! board with a path on it, and loading of the
//! [Moving AI](https://movingai.com/benchmarks/grids.html) grid benchmarks.
//!
//! Maps are plain row-major `Vec<u8>` buffers where `1` marks a wall and `0` marks floor.
mod board;
mod config;
mod error;
mod maze;
mod moving_ai;

pub use board::serialize_board;
pub use config::RunConfig;
pub use error::BenchmarkError;
pub use maze::{generate_maze, FLOOR, WALL};
pub use moving_ai::{
    benchmark_names, get_benchmark, load_benchmark, parse_map, parse_scenarios, Benchmark,
    Scenario,
};
