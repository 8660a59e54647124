// SPDX-License-Identifier: MIT OR Apache-2.0
//! Directional reachability over pin connections.
//!
//! Backs the "select whole tree" gesture: from a root node, walk the
//! directed connection edges forward (successors) or backward
//! (predecessors) and collect every node reached.

use crate::graph::Graph;
use crate::node::NodeId;
use indexmap::IndexSet;
use std::collections::VecDeque;

/// Traversal direction over connection edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow output connections to downstream nodes
    Successor,
    /// Follow input connections to upstream nodes
    Predecessor,
}

/// Collect every node reachable from `root` along `direction`, root
/// included.
///
/// Breadth-first with enqueue-time dedup keyed by node id, so cyclic and
/// diamond-shaped graphs terminate and each node is processed at most once.
/// An isolated root yields a singleton set. The set is only handed back
/// once the walk is complete; callers never observe partial results.
///
/// The root is expected to exist in the graph; a missing root is a
/// programmer error and yields an empty set.
pub fn reachable(graph: &Graph, root: NodeId, direction: Direction) -> IndexSet<NodeId> {
    let mut visited = IndexSet::new();
    if graph.node(root).is_none() {
        debug_assert!(false, "traversal root is not in the graph");
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(root);
    queue.push_back(root);

    while let Some(node_id) = queue.pop_front() {
        let Some(node) = graph.node(node_id) else {
            continue;
        };

        match direction {
            Direction::Successor => {
                for pin in &node.outputs {
                    for conn in graph.connections_from_pin(pin.id) {
                        if visited.insert(conn.to_node) {
                            queue.push_back(conn.to_node);
                        }
                    }
                }
            }
            Direction::Predecessor => {
                for pin in &node.inputs {
                    for conn in graph.connections_to_pin(pin.id) {
                        if visited.insert(conn.from_node) {
                            queue.push_back(conn.from_node);
                        }
                    }
                }
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeKind};
    use crate::pin::{Pin, PinKind};

    struct Fixture {
        graph: Graph,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                graph: Graph::new("traversal"),
            }
        }

        fn node(&mut self, title: &str) -> NodeId {
            let node = Node::new(NodeKind::Plain, title)
                .with_input(Pin::new("in", PinKind::Port))
                .with_output(Pin::new("out", PinKind::Port));
            self.graph.add_node(node)
        }

        fn wire(&mut self, from: NodeId, to: NodeId) {
            // fresh output pin per edge so fan-out is explicit
            let out = Pin::new("out+", PinKind::Port);
            let out_id = out.id;
            self.graph.node_mut(from).unwrap().outputs.push(out);
            let in_pin = self.graph.node(to).unwrap().inputs[0].id;
            self.graph.connect(from, out_id, to, in_pin).unwrap();
        }
    }

    #[test]
    fn test_isolated_root_is_singleton() {
        let mut fx = Fixture::new();
        let a = fx.node("A");
        let set = reachable(&fx.graph, a, Direction::Successor);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&a));
        let set = reachable(&fx.graph, a, Direction::Predecessor);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_successor_fan_out() {
        let mut fx = Fixture::new();
        let root = fx.node("root");
        let c1 = fx.node("c1");
        let c2 = fx.node("c2");
        let unrelated = fx.node("x");
        fx.wire(root, c1);
        fx.wire(root, c2);

        let set = reachable(&fx.graph, root, Direction::Successor);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&root) && set.contains(&c1) && set.contains(&c2));
        assert!(!set.contains(&unrelated));
    }

    #[test]
    fn test_predecessor_chain() {
        let mut fx = Fixture::new();
        let a = fx.node("a");
        let b = fx.node("b");
        let c = fx.node("c");
        fx.wire(a, b);
        fx.wire(b, c);

        let set = reachable(&fx.graph, c, Direction::Predecessor);
        assert_eq!(set.len(), 3);

        // downstream-only from c
        let set = reachable(&fx.graph, c, Direction::Successor);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_diamond_visits_once() {
        let mut fx = Fixture::new();
        let top = fx.node("top");
        let l = fx.node("l");
        let r = fx.node("r");
        let bottom = fx.node("bottom");
        fx.wire(top, l);
        fx.wire(top, r);
        fx.wire(l, bottom);
        fx.wire(r, bottom);

        let set = reachable(&fx.graph, top, Direction::Successor);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut fx = Fixture::new();
        let a = fx.node("a");
        let b = fx.node("b");
        let c = fx.node("c");
        fx.wire(a, b);
        fx.wire(b, c);
        // close the loop
        fx.wire(c, a);

        let set = reachable(&fx.graph, a, Direction::Successor);
        assert_eq!(set.len(), 3);
        let set = reachable(&fx.graph, b, Direction::Predecessor);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_inverse_consistency() {
        let mut fx = Fixture::new();
        let a = fx.node("a");
        let b = fx.node("b");
        let c = fx.node("c");
        fx.wire(a, b);
        fx.wire(a, c);
        fx.wire(b, c);

        let ids = [a, b, c];
        for &x in &ids {
            let forward = reachable(&fx.graph, x, Direction::Successor);
            for &y in &forward {
                let backward = reachable(&fx.graph, y, Direction::Predecessor);
                assert!(backward.contains(&x), "reachability must be symmetric");
            }
        }
    }
}
