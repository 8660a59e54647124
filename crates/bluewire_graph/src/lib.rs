// SPDX-License-Identifier: MIT OR Apache-2.0
//! Blueprint graph model for the Bluewire editor.
//!
//! This crate provides the data model and read-only algorithms behind the
//! visual scripting surface:
//! - Nodes with typed input/output pins
//! - Directed pin-to-pin connections
//! - Node templates for the create-node palette
//! - Successor/predecessor reachability used by tree selection
//! - Node/pin rendering primitives
//!
//! ## Architecture
//!
//! Nodes and connections live in a single arena ([`Graph`]) keyed by stable
//! ids. Pins are owned by their node; connection endpoints are ids, never
//! pointers, so traversal can never dangle. Everything here is synchronous
//! and single-threaded - the editor shell drives it from UI callbacks.

pub mod connection;
pub mod graph;
pub mod node;
pub mod pin;
pub mod registry;
pub mod render;
pub mod traversal;

pub use connection::{Connection, ConnectionId};
pub use graph::{ConnectError, Graph};
pub use node::{Node, NodeId, NodeKind, NodeStyle, VarRole, VarScope};
pub use pin::{Pin, PinDirection, PinId, PinKind};
pub use registry::{NodeRegistry, NodeTemplate};
pub use traversal::{reachable, Direction};
