//! The open and closed node registries. Both keep insertion order and support removing a node
//! by position; lookups go through a hash index instead of a scan over the collection.
use crate::node::SearchNode;
use fxhash::{FxBuildHasher, FxHashMap};
use grid_util::point::Point;
use indexmap::IndexMap;
use log::trace;
use std::collections::VecDeque;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Position-indexed access shared by both registries, which is all the re-registration check needs.
pub trait Registry {
    fn find(&self, position: &Point) -> Option<&SearchNode>;
    fn evict(&mut self, position: &Point) -> Option<SearchNode>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of looking up a candidate position in a single registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// Registered with a strictly lower combined score, the candidate is dropped.
    Better,
    /// Registered with a score that is not lower, the old node was removed.
    Evicted,
    Absent,
}

pub(crate) fn lookup<R: Registry + ?Sized>(
    registry: &mut R,
    position: Point,
    score: i64,
) -> Lookup {
    match registry.find(&position).map(SearchNode::score) {
        Some(existing) if existing < score => Lookup::Better,
        Some(existing) => {
            trace!(
                "Evicting {} (score {}) in favour of score {}",
                position,
                existing,
                score
            );
            registry.evict(&position);
            Lookup::Evicted
        }
        None => Lookup::Absent,
    }
}

/// Nodes discovered but not yet expanded, consumed strictly first-in first-out.
///
/// Every registration gets a ticket. Evicting a node only drops it from the index, which turns
/// its queue slot stale; stale slots are skipped when popping, so the visible order is exactly
/// the insertion order of the live nodes.
#[derive(Clone, Debug, Default)]
pub struct OpenRegistry {
    queue: VecDeque<(Point, u64)>,
    nodes: FxHashMap<Point, (SearchNode, u64)>,
    next_ticket: u64,
}

impl OpenRegistry {
    pub fn new() -> OpenRegistry {
        OpenRegistry::default()
    }
    /// Appends `node` behind every live node.
    pub fn push_back(&mut self, node: SearchNode) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.nodes.insert(node.position, (node, ticket));
        self.queue.push_back((node.position, ticket));
    }
    /// Removes the earliest registered live node.
    pub fn pop_front(&mut self) -> Option<SearchNode> {
        while let Some((position, ticket)) = self.queue.pop_front() {
            if matches!(self.nodes.get(&position), Some((_, t)) if *t == ticket) {
                return self.nodes.remove(&position).map(|(node, _)| node);
            }
        }
        None
    }
    /// Live nodes in expansion order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.queue.iter().filter_map(move |(position, ticket)| {
            self.nodes
                .get(position)
                .filter(|(_, t)| t == ticket)
                .map(|(node, _)| node)
        })
    }
}

impl Registry for OpenRegistry {
    fn find(&self, position: &Point) -> Option<&SearchNode> {
        self.nodes.get(position).map(|(node, _)| node)
    }
    fn evict(&mut self, position: &Point) -> Option<SearchNode> {
        self.nodes.remove(position).map(|(node, _)| node)
    }
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Nodes that have been expanded, in the order they were expanded.
#[derive(Clone, Debug, Default)]
pub struct ClosedRegistry {
    nodes: FxIndexMap<Point, SearchNode>,
}

impl ClosedRegistry {
    pub fn new() -> ClosedRegistry {
        ClosedRegistry::default()
    }
    pub fn push(&mut self, node: SearchNode) {
        self.nodes.insert(node.position, node);
    }
    /// The most recently expanded node.
    pub fn last(&self) -> Option<&SearchNode> {
        self.nodes.last().map(|(_, node)| node)
    }
    /// Nodes in expansion order; reverse it to walk back from the most recent one.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SearchNode> + '_ {
        self.nodes.values()
    }
}

impl Registry for ClosedRegistry {
    fn find(&self, position: &Point) -> Option<&SearchNode> {
        self.nodes.get(position)
    }
    fn evict(&mut self, position: &Point) -> Option<SearchNode> {
        // Shifting keeps the expansion order the path reconstruction depends on.
        self.nodes.shift_remove(position)
    }
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, y: i32, cost: i64, distance: i64) -> SearchNode {
        SearchNode::new(Point::new(x, y), None, cost, distance)
    }

    #[test]
    fn open_is_fifo() {
        let mut open = OpenRegistry::new();
        open.push_back(node(0, 0, 0, 0));
        open.push_back(node(1, 0, 0, 0));
        open.push_back(node(2, 0, 0, 0));
        let order = std::iter::from_fn(|| open.pop_front())
            .map(|n| n.position.x)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![0, 1, 2]);
        assert!(open.is_empty());
    }

    /// A node that is evicted and registered again moves behind everything registered before it.
    #[test]
    fn reregistered_node_moves_to_back() {
        let mut open = OpenRegistry::new();
        open.push_back(node(0, 0, 1, 0));
        open.push_back(node(1, 0, 1, 0));
        assert_eq!(lookup(&mut open, Point::new(0, 0), 1), Lookup::Evicted);
        open.push_back(node(0, 0, 1, 0));
        assert_eq!(open.len(), 2);
        let xs = open.iter().map(|n| n.position.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![1, 0]);
        assert_eq!(open.pop_front().map(|n| n.position.x), Some(1));
        assert_eq!(open.pop_front().map(|n| n.position.x), Some(0));
        assert_eq!(open.pop_front(), None);
    }

    #[test]
    fn lookup_keeps_strictly_better_nodes() {
        let mut closed = ClosedRegistry::new();
        closed.push(node(3, 3, 2, 5));
        assert_eq!(lookup(&mut closed, Point::new(3, 3), 8), Lookup::Better);
        assert_eq!(closed.len(), 1);
        // Equal scores do not protect the registered node
        assert_eq!(lookup(&mut closed, Point::new(3, 3), 7), Lookup::Evicted);
        assert!(closed.is_empty());
        assert_eq!(lookup(&mut closed, Point::new(3, 3), 7), Lookup::Absent);
    }

    #[test]
    fn closed_eviction_preserves_order() {
        let mut closed = ClosedRegistry::new();
        for x in 0..4 {
            closed.push(node(x, 0, i64::from(x), 0));
        }
        closed.evict(&Point::new(1, 0));
        let xs = closed.iter().rev().map(|n| n.position.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![3, 2, 0]);
        assert_eq!(closed.last().map(|n| n.position.x), Some(3));
    }
}
