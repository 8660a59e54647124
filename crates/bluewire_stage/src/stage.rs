// SPDX-License-Identifier: MIT OR Apache-2.0
//! Mounted scene objects and the live selection set.

use bluewire_graph::NodeId;
use indexmap::IndexMap;

/// A mounted scene object with its stage position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectWithPos {
    /// Graph node backing this object
    pub node: NodeId,
    /// Stage position
    pub position: [f32; 2],
}

/// The user's current multi-selection, in insertion order
#[derive(Debug, Default)]
pub struct Selection {
    items: Vec<ObjectWithPos>,
}

impl Selection {
    /// Number of selected objects
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the selected objects
    pub fn iter(&self) -> impl Iterator<Item = &ObjectWithPos> {
        self.items.iter()
    }

    /// Whether a node is in the selection
    pub fn contains(&self, node: NodeId) -> bool {
        self.items.iter().any(|o| o.node == node)
    }

    /// Insert an object; duplicates by node id are ignored
    pub fn insert(&mut self, obj: ObjectWithPos) {
        if !self.contains(obj.node) {
            self.items.push(obj);
        }
    }

    /// Remove an object by node id
    pub fn remove(&mut self, node: NodeId) -> Option<ObjectWithPos> {
        let index = self.items.iter().position(|o| o.node == node)?;
        Some(self.items.remove(index))
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// The active stage: which graph nodes are mounted in the view.
///
/// A node may exist in the graph model without being mounted here - such
/// nodes are invisible to stage scans.
#[derive(Debug, Default)]
pub struct Stage {
    mounted: IndexMap<NodeId, ObjectWithPos>,
    selection: Selection,
}

impl Stage {
    /// Create an empty stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a graph node as a scene object
    pub fn mount(&mut self, node: NodeId, position: [f32; 2]) {
        self.mounted.insert(node, ObjectWithPos { node, position });
    }

    /// Unmount a node; it also leaves the selection
    pub fn unmount(&mut self, node: NodeId) -> Option<ObjectWithPos> {
        self.selection.remove(node);
        self.mounted.swap_remove(&node)
    }

    /// Whether a node is currently mounted
    pub fn is_mounted(&self, node: NodeId) -> bool {
        self.mounted.contains_key(&node)
    }

    /// Traverse all mounted objects in mount order
    pub fn objects(&self) -> impl Iterator<Item = &ObjectWithPos> {
        self.mounted.values()
    }

    /// Number of mounted objects
    pub fn object_count(&self) -> usize {
        self.mounted.len()
    }

    /// The current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The current selection, mutable
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}
