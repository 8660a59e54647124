// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the blueprint graph.

use crate::pin::{Pin, PinId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which side of a variable binding a node sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarRole {
    /// Writes the variable
    Set,
    /// Reads the variable
    Get,
}

impl VarRole {
    /// The role highlighted when a node of this role enters the selection
    pub fn opposite(self) -> Self {
        match self {
            Self::Set => Self::Get,
            Self::Get => Self::Set,
        }
    }
}

/// Which family of variable nodes a binding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarScope {
    /// Reference (by-ref) variable nodes
    Reference,
    /// Value (by-copy) variable nodes
    Value,
}

/// Node kind.
///
/// A closed tagged set: behavior everywhere selects on this discriminant
/// rather than on runtime type identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Generic logic node
    Plain,
    /// Sub-graph node; double-click opens the page at `path`
    Function {
        /// Resource path of the function's own graph page
        path: PathBuf,
    },
    /// Writes a reference variable
    SetReference {
        /// Variable name (not unique across the graph)
        name: String,
    },
    /// Reads a reference variable
    GetReference {
        /// Variable name (not unique across the graph)
        name: String,
    },
    /// Writes a value variable
    SetValue {
        /// Variable name (not unique across the graph)
        name: String,
    },
    /// Reads a value variable
    GetValue {
        /// Variable name (not unique across the graph)
        name: String,
    },
}

impl NodeKind {
    /// Decompose a variable node into (scope, role, name).
    ///
    /// Returns `None` for non-variable kinds.
    pub fn variable_binding(&self) -> Option<(VarScope, VarRole, &str)> {
        match self {
            Self::SetReference { name } => Some((VarScope::Reference, VarRole::Set, name)),
            Self::GetReference { name } => Some((VarScope::Reference, VarRole::Get, name)),
            Self::SetValue { name } => Some((VarScope::Value, VarRole::Set, name)),
            Self::GetValue { name } => Some((VarScope::Value, VarRole::Get, name)),
            Self::Plain | Self::Function { .. } => None,
        }
    }

    /// Whether this is one of the four variable kinds
    pub fn is_variable(&self) -> bool {
        self.variable_binding().is_some()
    }
}

/// Default node panel background
pub const PANEL_BG_DEFAULT: [u8; 3] = [25, 25, 25];
/// Panel background of a variable node linked to the current selection
pub const PANEL_BG_HIGHLIGHT: [u8; 3] = [88, 80, 22];

/// Mutable per-node style record.
///
/// Highlighting rewrites `panel_bg` only; every other field must survive a
/// highlight pass untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Panel width in graph units
    pub width: f32,
    /// Panel height in graph units
    pub height: f32,
    /// Number of content rows the panel reserves
    pub line_count: u32,
    /// Panel background color
    pub panel_bg: [u8; 3],
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 100.0,
            line_count: 1,
            panel_bg: PANEL_BG_DEFAULT,
        }
    }
}

/// A node instance in the graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Node kind
    pub kind: NodeKind,
    /// Display title
    pub title: String,
    /// Position in the graph UI
    pub position: [f32; 2],
    /// Input pins, top to bottom
    pub inputs: Vec<Pin>,
    /// Output pins, top to bottom
    pub outputs: Vec<Pin>,
    /// Visual style; read and written through [`Node::style`]/
    /// [`Node::set_style`] so background repaints stay read-modify-write
    style: NodeStyle,
}

impl Node {
    /// Create a new node
    pub fn new(kind: NodeKind, title: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            kind,
            title: title.into(),
            position: [0.0, 0.0],
            inputs: Vec::new(),
            outputs: Vec::new(),
            style: NodeStyle::default(),
        }
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    /// Append an input pin
    pub fn with_input(mut self, pin: Pin) -> Self {
        self.inputs.push(pin);
        self
    }

    /// Append an output pin
    pub fn with_output(mut self, pin: Pin) -> Self {
        self.outputs.push(pin);
        self
    }

    /// Get an input pin by index
    pub fn input(&self, index: usize) -> Option<&Pin> {
        self.inputs.get(index)
    }

    /// Get an output pin by index
    pub fn output(&self, index: usize) -> Option<&Pin> {
        self.outputs.get(index)
    }

    /// Get a pin by ID, searching inputs then outputs
    pub fn pin(&self, pin_id: PinId) -> Option<&Pin> {
        self.inputs
            .iter()
            .find(|p| p.id == pin_id)
            .or_else(|| self.outputs.iter().find(|p| p.id == pin_id))
    }

    /// Whether `pin_id` is one of this node's input pins
    pub fn has_input(&self, pin_id: PinId) -> bool {
        self.inputs.iter().any(|p| p.id == pin_id)
    }

    /// Whether `pin_id` is one of this node's output pins
    pub fn has_output(&self, pin_id: PinId) -> bool {
        self.outputs.iter().any(|p| p.id == pin_id)
    }

    /// Get the style record
    pub fn style(&self) -> NodeStyle {
        self.style
    }

    /// Replace the style record
    pub fn set_style(&mut self, style: NodeStyle) {
        self.style = style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_binding() {
        let kind = NodeKind::SetValue {
            name: "score".to_string(),
        };
        assert_eq!(
            kind.variable_binding(),
            Some((VarScope::Value, VarRole::Set, "score"))
        );
        assert!(kind.is_variable());
        assert!(!NodeKind::Plain.is_variable());
        assert!(!NodeKind::Function {
            path: PathBuf::from("fn.bw")
        }
        .is_variable());
    }

    #[test]
    fn test_opposite_role() {
        assert_eq!(VarRole::Set.opposite(), VarRole::Get);
        assert_eq!(VarRole::Get.opposite(), VarRole::Set);
    }

    #[test]
    fn test_pin_lookup() {
        use crate::pin::PinKind;

        let node = Node::new(NodeKind::Plain, "Add")
            .with_input(Pin::new("A", PinKind::Float))
            .with_input(Pin::new("B", PinKind::Float))
            .with_output(Pin::new("Sum", PinKind::Float));

        let a = node.input(0).unwrap().id;
        let sum = node.output(0).unwrap().id;
        assert!(node.has_input(a));
        assert!(!node.has_output(a));
        assert!(node.has_output(sum));
        assert_eq!(node.pin(sum).unwrap().name, "Sum");
    }
}
