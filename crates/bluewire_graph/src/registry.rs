// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node templates and the create-node palette registry.

use crate::node::{Node, NodeKind};
use crate::pin::{Pin, PinDirection};

/// A node type available from the create-node palette
#[derive(Debug, Clone)]
pub struct NodeTemplate {
    /// Unique type name shown in the palette tree
    pub type_name: String,
    /// Default title for instantiated nodes
    pub title: String,
    /// Kind stamped onto instantiated nodes
    pub kind: NodeKind,
    /// Default input pins
    pub inputs: Vec<Pin>,
    /// Default output pins
    pub outputs: Vec<Pin>,
}

impl NodeTemplate {
    /// Instantiate a fresh node from this template.
    ///
    /// Pins are re-keyed so two instances never share pin ids.
    pub fn instantiate(&self) -> Node {
        let mut node = Node::new(self.kind.clone(), self.title.clone());
        node.inputs = self
            .inputs
            .iter()
            .map(|p| Pin::new(p.name.clone(), p.kind))
            .collect();
        node.outputs = self
            .outputs
            .iter()
            .map(|p| Pin::new(p.name.clone(), p.kind))
            .collect();
        node
    }

    /// Whether this template can pair with `pin`.
    ///
    /// A template pairs with an input pin when any of its outputs can
    /// type-cast to it, and with an output pin when any of its inputs can.
    pub fn matches_pair(&self, pin: &Pin, direction: PinDirection) -> bool {
        match direction {
            PinDirection::Input => self.outputs.iter().any(|p| p.kind.can_type_cast(pin.kind)),
            PinDirection::Output => self.inputs.iter().any(|p| p.kind.can_type_cast(pin.kind)),
        }
    }
}

/// Registry of node templates, in palette display order
pub struct NodeRegistry {
    /// Registered templates by type name
    templates: indexmap::IndexMap<String, NodeTemplate>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            templates: indexmap::IndexMap::new(),
        }
    }

    /// Register a template
    pub fn register(&mut self, template: NodeTemplate) {
        self.templates.insert(template.type_name.clone(), template);
    }

    /// Get a template by type name
    pub fn get(&self, type_name: &str) -> Option<&NodeTemplate> {
        self.templates.get(type_name)
    }

    /// Get all registered templates
    pub fn templates(&self) -> impl Iterator<Item = &NodeTemplate> {
        self.templates.values()
    }

    /// Instantiate a node from a type name
    pub fn instantiate(&self, type_name: &str) -> Option<Node> {
        self.get(type_name).map(NodeTemplate::instantiate)
    }

    /// Templates offered by the create-node dialog.
    ///
    /// With no pair pin (plain right-click create) every template is
    /// offered; when creating from a dragged-off pin, only templates with a
    /// compatible opposite-side pin are listed.
    pub fn matching_pair<'a>(
        &'a self,
        pair: Option<(&'a Pin, PinDirection)>,
    ) -> impl Iterator<Item = &'a NodeTemplate> {
        self.templates.values().filter(move |t| match pair {
            None => true,
            Some((pin, direction)) => t.matches_pair(pin, direction),
        })
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::PinKind;

    fn registry() -> NodeRegistry {
        let mut registry = NodeRegistry::new();
        registry.register(NodeTemplate {
            type_name: "branch".to_string(),
            title: "Branch".to_string(),
            kind: NodeKind::Plain,
            inputs: vec![
                Pin::new("Exec", PinKind::Port),
                Pin::new("Condition", PinKind::Boolean),
            ],
            outputs: vec![
                Pin::new("True", PinKind::Port),
                Pin::new("False", PinKind::Port),
            ],
        });
        registry.register(NodeTemplate {
            type_name: "get_value".to_string(),
            title: "Get Value".to_string(),
            kind: NodeKind::GetValue {
                name: String::new(),
            },
            inputs: vec![],
            outputs: vec![Pin::new("Value", PinKind::Float)],
        });
        registry
    }

    #[test]
    fn test_no_pair_lists_everything() {
        let registry = registry();
        assert_eq!(registry.matching_pair(None).count(), 2);
    }

    #[test]
    fn test_pair_filters_by_cast() {
        let registry = registry();

        // dragging off an Integer input: only templates with a castable
        // output qualify (Float widens to Integer)
        let pair = Pin::new("In", PinKind::Integer);
        let matched: Vec<_> = registry
            .matching_pair(Some((&pair, PinDirection::Input)))
            .map(|t| t.type_name.as_str())
            .collect();
        assert_eq!(matched, vec!["get_value"]);

        // dragging off a Port output: only the branch node has a Port input
        let pair = Pin::new("Out", PinKind::Port);
        let matched: Vec<_> = registry
            .matching_pair(Some((&pair, PinDirection::Output)))
            .map(|t| t.type_name.as_str())
            .collect();
        assert_eq!(matched, vec!["branch"]);
    }

    #[test]
    fn test_instantiate_rekeys_pins() {
        let registry = registry();
        let a = registry.instantiate("branch").unwrap();
        let b = registry.instantiate("branch").unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(a.inputs[0].id, b.inputs[0].id);
        assert_eq!(a.inputs.len(), 2);
        assert_eq!(a.outputs.len(), 2);
    }
}
