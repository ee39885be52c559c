use grid_util::point::Point;

/// One registered grid cell during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub position: Point,
    /// Position of the node whose expansion registered this one, [None] for the start node.
    pub parent: Option<Point>,
    /// Unit steps taken from the start.
    pub cost: i64,
    /// Squared Euclidean distance to the end. Kept in `i64` since the square of an `i32`
    /// coordinate delta does not fit an `i32`.
    pub distance: i64,
}

impl SearchNode {
    pub fn new(position: Point, parent: Option<Point>, cost: i64, distance: i64) -> SearchNode {
        SearchNode {
            position,
            parent,
            cost,
            distance,
        }
    }
    /// Combined score used to decide re-registration, never expansion order.
    pub fn score(&self) -> i64 {
        self.cost.saturating_add(self.distance)
    }
}
