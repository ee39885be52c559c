use crate::error::BenchmarkError;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const WALL: u8 = 1;
pub const FLOOR: u8 = 0;

const CELL_STEPS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Generates a perfect maze with a randomized depth-first backtracker seeded by `seed`.
///
/// The maze has `(width - 1) / 2` by `(height - 1) / 2` cells. Cell `(x, y)` sits at
/// `(2x + 1, 2y + 1)` in the returned buffer and the passage to a neighbouring cell opens
/// the wall between them. Everything else stays [WALL]. Every cell is reachable from every
/// other cell, in particular `(1, 1)` from `(width - 2, height - 2)`.
pub fn generate_maze(width: usize, height: usize, seed: u64) -> Result<Vec<u8>, BenchmarkError> {
    if width < 3 || height < 3 || width % 2 != 1 || height % 2 != 1 {
        return Err(BenchmarkError::InvalidMazeSize { width, height });
    }
    let maze_width = (width - 1) / 2;
    let maze_height = (height - 1) / 2;
    let mut map = vec![WALL; width * height];
    let mut visited = vec![false; maze_width * maze_height];
    let mut rng = StdRng::seed_from_u64(seed);

    let carve = |map: &mut Vec<u8>, x: usize, y: usize| map[y * width + x] = FLOOR;

    let mut stack = vec![(0usize, 0usize)];
    visited[0] = true;
    carve(&mut map, 1, 1);
    while let Some(&(x, y)) = stack.last() {
        let unvisited = CELL_STEPS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx).filter(|&nx| nx < maze_width)?;
                let ny = y.checked_add_signed(dy).filter(|&ny| ny < maze_height)?;
                (!visited[ny * maze_width + nx]).then_some((nx, ny))
            })
            .collect::<Vec<_>>();
        match unvisited.choose(&mut rng) {
            Some(&(nx, ny)) => {
                // The wall sits halfway between the two cell centres
                carve(&mut map, x + nx + 1, y + ny + 1);
                carve(&mut map, nx * 2 + 1, ny * 2 + 1);
                visited[ny * maze_width + nx] = true;
                stack.push((nx, ny));
            }
            None => {
                stack.pop();
            }
        }
    }
    debug!(
        "Generated {}x{} maze with seed {} ({} cells)",
        width,
        height,
        seed,
        maze_width * maze_height
    );
    Ok(map)
}
