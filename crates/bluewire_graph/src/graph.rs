// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph arena holding nodes and connections.

use crate::connection::{Connection, ConnectionId};
use crate::node::{Node, NodeId};
use crate::pin::PinId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A blueprint graph.
///
/// Single owned arena for nodes and connections, keyed by stable ids with
/// deterministic iteration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Graph name
    pub name: String,
    /// Nodes in the graph
    nodes: IndexMap<NodeId, Node>,
    /// Connections between pins
    connections: IndexMap<ConnectionId, Connection>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
            connections: IndexMap::new(),
        }
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Remove a node and every connection touching it
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.connections.retain(|_, c| !c.involves_node(node_id));
        self.nodes.swap_remove(&node_id)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Connect an output pin to an input pin.
    ///
    /// Validates that both endpoints exist, that the edge is not a
    /// self-loop, that it runs output to input, and that the pin kinds
    /// type-cast.
    pub fn connect(
        &mut self,
        from_node: NodeId,
        from_pin: PinId,
        to_node: NodeId,
        to_pin: PinId,
    ) -> Result<ConnectionId, ConnectError> {
        let source_node = self
            .nodes
            .get(&from_node)
            .ok_or(ConnectError::NodeNotFound(from_node))?;
        let target_node = self
            .nodes
            .get(&to_node)
            .ok_or(ConnectError::NodeNotFound(to_node))?;

        // structural rejection, before any pin inspection
        if from_node == to_node {
            return Err(ConnectError::SelfLoop);
        }

        let source_pin = source_node
            .pin(from_pin)
            .ok_or(ConnectError::PinNotFound(from_pin))?;
        let target_pin = target_node
            .pin(to_pin)
            .ok_or(ConnectError::PinNotFound(to_pin))?;

        if !source_node.has_output(from_pin) || !target_node.has_input(to_pin) {
            return Err(ConnectError::WrongDirection);
        }

        if !source_pin.kind.can_type_cast(target_pin.kind) {
            return Err(ConnectError::IncompatiblePins);
        }

        let connection = Connection::new(from_node, from_pin, to_node, to_pin);
        let id = connection.id;
        self.connections.insert(id, connection);
        Ok(id)
    }

    /// Remove a connection
    pub fn disconnect(&mut self, connection_id: ConnectionId) -> Option<Connection> {
        self.connections.swap_remove(&connection_id)
    }

    /// Get a connection by ID
    pub fn connection(&self, connection_id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&connection_id)
    }

    /// Get all connections
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Get connections leaving a specific output pin
    pub fn connections_from_pin(&self, pin_id: PinId) -> impl Iterator<Item = &Connection> {
        self.connections.values().filter(move |c| c.from_pin == pin_id)
    }

    /// Get connections arriving at a specific input pin
    pub fn connections_to_pin(&self, pin_id: PinId) -> impl Iterator<Item = &Connection> {
        self.connections.values().filter(move |c| c.to_pin == pin_id)
    }

    /// Get connections touching a node on either end
    pub fn connections_for_node(&self, node_id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections
            .values()
            .filter(move |c| c.involves_node(node_id))
    }

    /// Get the number of connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Whether any connection touches this pin
    pub fn pin_connected(&self, pin_id: PinId) -> bool {
        self.connections.values().any(|c| c.involves_pin(pin_id))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

/// Error when creating a connection
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Pin not found on its node
    #[error("Pin not found: {0:?}")]
    PinNotFound(PinId),

    /// Edge does not run output to input
    #[error("Connection must run from an output pin to an input pin")]
    WrongDirection,

    /// Pin kinds cannot type-cast
    #[error("Incompatible pin kinds")]
    IncompatiblePins,

    /// Self-loop not allowed
    #[error("Self-loop not allowed")]
    SelfLoop,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::pin::{Pin, PinKind};

    fn plain(title: &str, inputs: &[PinKind], outputs: &[PinKind]) -> Node {
        let mut node = Node::new(NodeKind::Plain, title);
        for (i, kind) in inputs.iter().enumerate() {
            node.inputs.push(Pin::new(format!("in{i}"), *kind));
        }
        for (i, kind) in outputs.iter().enumerate() {
            node.outputs.push(Pin::new(format!("out{i}"), *kind));
        }
        node
    }

    #[test]
    fn test_connect_and_query() {
        let mut graph = Graph::new("test");
        let a = plain("A", &[], &[PinKind::Float]);
        let b = plain("B", &[PinKind::Float], &[]);
        let a_out = a.outputs[0].id;
        let b_in = b.inputs[0].id;
        let a = graph.add_node(a);
        let b = graph.add_node(b);

        let conn = graph.connect(a, a_out, b, b_in).unwrap();
        assert_eq!(graph.connection_count(), 1);
        assert!(graph.pin_connected(a_out));
        assert!(graph.pin_connected(b_in));
        assert_eq!(graph.connections_from_pin(a_out).count(), 1);
        assert_eq!(graph.connection(conn).unwrap().to_node, b);
    }

    #[test]
    fn test_connect_rejects_bad_edges() {
        let mut graph = Graph::new("test");
        let a = plain("A", &[PinKind::Port], &[PinKind::Float]);
        let b = plain("B", &[PinKind::Boolean], &[]);
        let a_out = a.outputs[0].id;
        let a_in = a.inputs[0].id;
        let b_in = b.inputs[0].id;
        let a = graph.add_node(a);
        let b = graph.add_node(b);

        // input used as source
        assert!(matches!(
            graph.connect(a, a_in, b, b_in),
            Err(ConnectError::WrongDirection)
        ));
        // Float cannot cast to Boolean
        assert!(matches!(
            graph.connect(a, a_out, b, b_in),
            Err(ConnectError::IncompatiblePins)
        ));
        // self-loop rejected before pin kinds are even compared
        assert!(matches!(
            graph.connect(a, a_out, a, a_in),
            Err(ConnectError::SelfLoop)
        ));
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_remove_node_drops_connections() {
        let mut graph = Graph::new("test");
        let a = plain("A", &[], &[PinKind::Integer]);
        let b = plain("B", &[PinKind::Integer], &[PinKind::Integer]);
        let c = plain("C", &[PinKind::Integer], &[]);
        let a_out = a.outputs[0].id;
        let b_in = b.inputs[0].id;
        let b_out = b.outputs[0].id;
        let c_in = c.inputs[0].id;
        let a = graph.add_node(a);
        let b = graph.add_node(b);
        let c = graph.add_node(c);

        graph.connect(a, a_out, b, b_in).unwrap();
        graph.connect(b, b_out, c, c_in).unwrap();
        assert_eq!(graph.connection_count(), 2);

        graph.remove_node(b);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.connection_count(), 0);
    }
}
