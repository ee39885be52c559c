use crate::engine::SearchEngine;
use crate::error::MapError;
use crate::{BLOCKED, NEIGHBOUR_OFFSETS};
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;

/// Allocates a zero-filled (fully passable) occupancy buffer of `width * height` cells.
pub fn allocate_map(width: usize, height: usize) -> Vec<u8> {
    vec![0; width * height]
}

/// [GridMap] is a read-only view over a caller-owned occupancy buffer laid out row-major.
/// A cell holding [BLOCKED] is impassable, any other value is passable. The view never
/// copies or mutates the buffer, so one buffer can back any number of concurrent searches.
#[derive(Clone, Copy, Debug)]
pub struct GridMap<'a> {
    cells: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> GridMap<'a> {
    /// Wraps `cells` after checking that it holds exactly `width * height` values.
    pub fn new(cells: &'a [u8], width: usize, height: usize) -> Result<GridMap<'a>, MapError> {
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(MapError::DimensionOverflow { width, height });
        }
        match width.checked_mul(height) {
            Some(n) if n == cells.len() => Ok(GridMap {
                cells,
                width,
                height,
            }),
            Some(_) => Err(MapError::DimensionMismatch {
                width,
                height,
                len: cells.len(),
            }),
            None => Err(MapError::DimensionOverflow { width, height }),
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn cells(&self) -> &'a [u8] {
        self.cells
    }
    /// Strict half-open bounds test.
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }
    fn get_ix_point(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }
    /// Raw cell value at `p`. The caller bounds-checks first; an out-of-bounds point is a
    /// contract violation and panics on the buffer index in the worst case.
    pub fn cost(&self, p: Point) -> u8 {
        debug_assert!(self.in_bounds(p), "{} is outside the map", p);
        self.cells[self.get_ix_point(p)]
    }
    /// In bounds and not [BLOCKED].
    pub fn is_passable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.cost(p) != BLOCKED
    }

    /// Runs one full search from `start` to `end`. Returns [None] if no path exists.
    /// A search from a point to itself yields the single-point path.
    pub fn shortest_path(&self, start: Point, end: Point) -> Option<Vec<Point>> {
        if start == end {
            debug!("Start and end coincide at {}", start);
            return Some(vec![start]);
        }
        let mut engine = SearchEngine::new(self, start, end);
        if !engine.search() {
            return None;
        }
        let path = engine.path();
        debug!(
            "Path from {} to {} has {} points after {} expansions",
            start,
            end,
            path.len(),
            engine.expansions()
        );
        Some(path)
    }

    /// Links every pair of passable four-neighbours into the same component.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Point::new(x, y);
                if !self.is_passable(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(point);
                // Only the forward half of the neighbourhood, the other half links back to us.
                for (dx, dy) in [(1, 0), (0, 1)] {
                    let n = Point::new(x + dx, y + dy);
                    if self.is_passable(n) {
                        components.union(parent_ix, self.get_ix_point(n));
                    }
                }
            }
        }
        components
    }

    fn passable_neighbours(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| Point::new(p.x + dx, p.y + dy))
            .filter(move |&n| self.is_passable(n))
    }

    /// Checks if a search from `start` would reach `end`: either they are adjacent, or a passable
    /// neighbour of `start` shares a component with a passable neighbour of `end`. This
    /// answers the same question as a completed search without building a path.
    pub fn reachable(&self, start: Point, end: Point) -> bool {
        let adjacent = NEIGHBOUR_OFFSETS
            .iter()
            .any(|&(dx, dy)| Point::new(start.x + dx, start.y + dy) == end);
        if start == end || adjacent {
            return true;
        }
        let components = self.components();
        self.passable_neighbours(start).any(|n| {
            let n_ix = self.get_ix_point(n);
            self.passable_neighbours(end)
                .any(|m| components.equiv(n_ix, self.get_ix_point(m)))
        })
    }
}

impl fmt::Display for GridMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            let line = row
                .iter()
                .map(|&v| if v == BLOCKED { '#' } else { '.' })
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let cells = allocate_map(3, 3);
        assert_eq!(
            GridMap::new(&cells, 4, 3).unwrap_err(),
            MapError::DimensionMismatch {
                width: 4,
                height: 3,
                len: 9
            }
        );
        assert!(GridMap::new(&cells, 3, 3).is_ok());
    }

    #[test]
    fn bounds_are_half_open() {
        let cells = allocate_map(4, 2);
        let map = GridMap::new(&cells, 4, 2).unwrap();
        assert!(map.in_bounds(Point::new(0, 0)));
        assert!(map.in_bounds(Point::new(3, 1)));
        assert!(!map.in_bounds(Point::new(4, 0)));
        assert!(!map.in_bounds(Point::new(0, 2)));
        assert!(!map.in_bounds(Point::new(-1, 0)));
    }

    #[test]
    fn cost_is_row_major() {
        let mut cells = allocate_map(3, 2);
        cells[5] = BLOCKED;
        cells[1] = 7;
        let map = GridMap::new(&cells, 3, 2).unwrap();
        assert_eq!(map.cost(Point::new(2, 1)), BLOCKED);
        assert_eq!(map.cost(Point::new(1, 0)), 7);
        assert!(!map.is_passable(Point::new(2, 1)));
        // Anything other than 1 is passable
        assert!(map.is_passable(Point::new(1, 0)));
    }

    /// Corresponds to the following 3x2 grid:
    ///  ___
    /// |.#.|
    /// |.#.|
    ///  ___
    #[test]
    fn wall_splits_components() {
        let cells = vec![0, 1, 0, 0, 1, 0];
        let map = GridMap::new(&cells, 3, 2).unwrap();
        let components = map.components();
        assert!(components.equiv(0, 3));
        assert!(!components.equiv(0, 2));
        assert!(!map.reachable(Point::new(0, 0), Point::new(2, 1)));
        assert!(map.reachable(Point::new(0, 0), Point::new(0, 1)));
    }

    #[test]
    fn blocked_end_is_reachable_through_neighbour() {
        //  ___
        // |..#|
        //  ___
        let cells = vec![0, 0, 1];
        let map = GridMap::new(&cells, 3, 1).unwrap();
        assert!(map.reachable(Point::new(0, 0), Point::new(2, 0)));
    }

    #[test]
    fn display_marks_blocked_cells() {
        let cells = vec![0, 1, 1, 0];
        let map = GridMap::new(&cells, 2, 2).unwrap();
        assert_eq!(map.to_string(), ".#\n#.\n");
    }
}
