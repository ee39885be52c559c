//! # grid_astar
//!
//! Shortest-path search on a rectangular occupancy grid where each cell is either passable or
//! blocked. The search keeps an open and a closed registry of nodes, moves through the grid in
//! the four axis-aligned directions and reconstructs the path by following parent links back
//! from the end.
//!
//! Nodes are expanded in the order they were registered, which makes the expansion
//! breadth-first and the returned path shortest in steps. A squared Euclidean estimate of the
//! remaining distance only decides which of two registrations of the same cell is kept; it
//! never reorders the frontier.
//!
//! ```
//! use grid_astar::{allocate_map, compute_shortest_path, BLOCKED};
//! use grid_util::point::Point;
//!
//! let mut map = allocate_map(3, 3);
//! map[4] = BLOCKED;
//! let path = compute_shortest_path(&map, 3, 3, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.len(), 5);
//! ```
mod engine;
mod error;
mod grid_map;
mod node;
pub mod registry;

pub use crate::engine::SearchEngine;
pub use crate::error::MapError;
pub use crate::grid_map::{allocate_map, GridMap};
pub use crate::node::SearchNode;
pub use crate::registry::{ClosedRegistry, OpenRegistry, Registry};

use grid_util::point::Point;

/// Cell value marking an impassable cell. Every other value is passable.
pub const BLOCKED: u8 = 1;

/// Neighbour offsets in expansion order: north, west, south, east. The order only decides
/// which of two equally scored registrations survives.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Computes a path from `start` to `end` over the row-major buffer `map` of `width * height`
/// cells. Returns `Ok(None)` if no path exists and an error only if the buffer does not match
/// the given dimensions.
pub fn compute_shortest_path(
    map: &[u8],
    width: usize,
    height: usize,
    start: Point,
    end: Point,
) -> Result<Option<Vec<Point>>, MapError> {
    let grid_map = GridMap::new(map, width, height)?;
    Ok(grid_map.shortest_path(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_start_goal() {
        let map = allocate_map(1, 1);
        let start = Point::new(0, 0);
        let path = compute_shortest_path(&map, 1, 1, start, start).unwrap();
        assert_eq!(path, Some(vec![start]));
    }

    #[test]
    fn malformed_buffer_is_rejected() {
        let map = allocate_map(2, 2);
        let result = compute_shortest_path(&map, 3, 2, Point::new(0, 0), Point::new(1, 1));
        assert!(matches!(result, Err(MapError::DimensionMismatch { .. })));
    }

    /// Asserts that the optimal 4 step solution around a center obstacle is found.
    #[test]
    fn solve_simple_problem() {
        //  ___
        // |S  |
        // | # |
        // |  E|
        //  ___
        let mut map = allocate_map(3, 3);
        map[4] = BLOCKED;
        let path = compute_shortest_path(&map, 3, 3, Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 5);
        assert!(!path.contains(&Point::new(1, 1)));
    }
}
