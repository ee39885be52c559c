use grid_util::point::Point;

/// Settings for one timing run over a generated maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Must be odd and at least 3.
    pub width: usize,
    /// Must be odd and at least 3.
    pub height: usize,
    /// How many times the search is repeated.
    pub cycles: usize,
    pub seed: u64,
    /// Render the board with the found path after the run.
    pub print_board: bool,
}

impl Default for RunConfig {
    fn default() -> RunConfig {
        RunConfig {
            width: 151,
            height: 151,
            cycles: 100,
            seed: 42,
            print_board: false,
        }
    }
}

impl RunConfig {
    /// Top-left maze cell.
    pub fn start(&self) -> Point {
        Point::new(1, 1)
    }
    /// Bottom-right maze cell.
    pub fn end(&self) -> Point {
        Point::new(self.width as i32 - 2, self.height as i32 - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_default_maze() {
        let config = RunConfig::default();
        assert_eq!(config.start(), Point::new(1, 1));
        assert_eq!(config.end(), Point::new(149, 149));
    }
}
