// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection (directed edge) definitions for the blueprint graph.

use crate::node::NodeId;
use crate::pin::PinId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    /// Create a new random connection ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// A directed connection from an output pin to an input pin.
///
/// Endpoints are arena ids, so a connection never keeps a node alive and
/// never dangles - lookups go back through the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection ID
    pub id: ConnectionId,
    /// Node owning the source (output) pin
    pub from_node: NodeId,
    /// Source pin
    pub from_pin: PinId,
    /// Node owning the target (input) pin
    pub to_node: NodeId,
    /// Target pin
    pub to_pin: PinId,
}

impl Connection {
    /// Create a new connection
    pub fn new(from_node: NodeId, from_pin: PinId, to_node: NodeId, to_pin: PinId) -> Self {
        Self {
            id: ConnectionId::new(),
            from_node,
            from_pin,
            to_node,
            to_pin,
        }
    }

    /// Check if this connection touches a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.from_node == node_id || self.to_node == node_id
    }

    /// Check if this connection touches a specific pin
    pub fn involves_pin(&self, pin_id: PinId) -> bool {
        self.from_pin == pin_id || self.to_pin == pin_id
    }
}
