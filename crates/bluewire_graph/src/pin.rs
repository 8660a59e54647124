// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pin definitions for node inputs/outputs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinId(pub Uuid);

impl PinId {
    /// Create a new random pin ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PinId {
    fn default() -> Self {
        Self::new()
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinDirection {
    /// Input pin (left side of a node)
    Input,
    /// Output pin (right side of a node)
    Output,
}

/// Data classification of a pin.
///
/// This is a closed set: every pin in a blueprint graph is one of these
/// kinds, and all dispatch is on the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinKind {
    /// Execution/control flow
    Port,
    /// Boolean value
    Boolean,
    /// Integer value
    Integer,
    /// Floating point value
    Float,
    /// Short string value
    String,
    /// Multi-line text value
    Text,
    /// 3D vector
    Vector,
    /// Euler rotation
    Rotator,
    /// Full transform (translation/rotation/scale)
    Transform,
    /// Object reference
    Object,
}

impl PinKind {
    /// Get the display color for this pin kind
    pub fn color(self) -> [u8; 3] {
        match self {
            Self::Port => [255, 255, 255],
            Self::Boolean => [140, 0, 0],
            Self::Integer => [79, 225, 174],
            Self::Float => [168, 255, 81],
            Self::String => [241, 0, 205],
            Self::Text => [221, 119, 164],
            Self::Vector => [247, 199, 45],
            Self::Rotator => [160, 175, 250],
            Self::Transform => [243, 111, 0],
            Self::Object => [56, 165, 241],
        }
    }

    /// Check whether a value of this kind can be cast to `other`.
    ///
    /// Identity casts always hold. `Integer`/`Float` and `String`/`Text`
    /// widen into each other; `Port` only ever matches `Port`.
    pub fn can_type_cast(self, other: PinKind) -> bool {
        if self == other {
            return true;
        }

        matches!(
            (self, other),
            (Self::Integer, Self::Float)
                | (Self::Float, Self::Integer)
                | (Self::String, Self::Text)
                | (Self::Text, Self::String)
        )
    }
}

/// A pin on a node.
///
/// Direction is positional: a pin lives in its node's input list or output
/// list, never both, so the pin itself only carries name and kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    /// Unique pin ID
    pub id: PinId,
    /// Display name
    pub name: String,
    /// Data classification
    pub kind: PinKind,
}

impl Pin {
    /// Create a new pin
    pub fn new(name: impl Into<String>, kind: PinKind) -> Self {
        Self {
            id: PinId::new(),
            name: name.into(),
            kind,
        }
    }
}
