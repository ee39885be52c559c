use crate::grid_map::GridMap;
use crate::node::SearchNode;
use crate::registry::{lookup, ClosedRegistry, Lookup, OpenRegistry};
use crate::{BLOCKED, NEIGHBOUR_OFFSETS};
use grid_util::point::Point;
use log::{info, trace};
use std::collections::VecDeque;

/// Runs a single search over a [GridMap]. The open registry is consumed in insertion order,
/// so expansion is breadth-first; the heuristic only decides which of two registrations of
/// the same cell survives. The registries live as long as the engine and are never shared.
#[derive(Clone, Debug)]
pub struct SearchEngine<'a> {
    map: GridMap<'a>,
    start: Point,
    end: Point,
    open: OpenRegistry,
    closed: ClosedRegistry,
    expansions: usize,
}

impl<'a> SearchEngine<'a> {
    pub fn new(map: &GridMap<'a>, start: Point, end: Point) -> SearchEngine<'a> {
        SearchEngine {
            map: *map,
            start,
            end,
            open: OpenRegistry::new(),
            closed: ClosedRegistry::new(),
            expansions: 0,
        }
    }
    pub fn open(&self) -> &OpenRegistry {
        &self.open
    }
    pub fn closed(&self) -> &ClosedRegistry {
        &self.closed
    }
    /// Number of nodes moved from the open to the closed registry so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Squared Euclidean distance from `p` to the end. The deltas are widened before squaring
    /// and the result saturates instead of wrapping.
    pub fn heuristic(&self, p: Point) -> i64 {
        let x = i64::from(self.end.x) - i64::from(p.x);
        let y = i64::from(self.end.y) - i64::from(p.y);
        x.saturating_mul(x).saturating_add(y.saturating_mul(y))
    }

    /// Expands nodes until one of them has the end as a neighbour ([true]) or the open registry
    /// runs dry ([false]). The end itself is never registered. The start is not compared
    /// against the end, so a search from a point to itself only succeeds once a neighbour
    /// of that point is expanded; [GridMap::shortest_path] handles that case up front.
    pub fn search(&mut self) -> bool {
        let start = SearchNode::new(self.start, None, 0, self.heuristic(self.start));
        self.open.push_back(start);

        while let Some(node) = self.open.pop_front() {
            self.closed.push(node);
            self.expansions += 1;
            if self.expand(&node) {
                trace!(
                    "Found {} as a neighbour of {} after {} expansions",
                    self.end, node.position, self.expansions
                );
                return true;
            }
        }
        info!(
            "{} is not reachable from {}, open registry exhausted after {} expansions",
            self.end, self.start, self.expansions
        );
        false
    }

    /// Registers the passable neighbours of `node`. Returns [true] as soon as a neighbour is the
    /// end, without looking at the remaining neighbours.
    fn expand(&mut self, node: &SearchNode) -> bool {
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            let neighbour = Point::new(node.position.x + dx, node.position.y + dy);
            if neighbour == self.end {
                return true;
            }
            if self.map.in_bounds(neighbour) && self.map.cost(neighbour) != BLOCKED {
                let cost = node.cost + 1;
                let distance = self.heuristic(neighbour);
                if !self.is_registered(neighbour, cost.saturating_add(distance)) {
                    self.open.push_back(SearchNode::new(
                        neighbour,
                        Some(node.position),
                        cost,
                        distance,
                    ));
                }
            }
        }
        false
    }

    /// Whether `position` is already registered with a strictly lower combined score than
    /// `score`. A registration that is not better is evicted on the way, closed first.
    fn is_registered(&mut self, position: Point, score: i64) -> bool {
        match lookup(&mut self.closed, position, score) {
            Lookup::Better => true,
            Lookup::Evicted => false,
            Lookup::Absent => lookup(&mut self.open, position, score) == Lookup::Better,
        }
    }

    /// Reconstructs the path from start to end, both inclusive, after a successful
    /// [search](Self::search).
    ///
    /// Starting from the last expanded node, the closed registry is scanned once from back to
    /// front, picking up each parent as it is passed. This relies on a parent always being
    /// expanded before its children; the parent links are not checked for cycles.
    pub fn path(&self) -> Vec<Point> {
        let mut path = VecDeque::from([self.end]);
        if let Some(back) = self.closed.last().filter(|n| n.position != self.start) {
            path.push_front(back.position);
            let mut parent = back.parent;
            for node in self.closed.iter().rev() {
                if parent == Some(node.position) && node.position != self.start {
                    path.push_front(node.position);
                    parent = node.parent;
                }
            }
        }
        path.push_front(self.start);
        path.into()
    }
}
