// SPDX-License-Identifier: MIT OR Apache-2.0
//! Double-click selection controller.
//!
//! Layers the "select whole tree" and "open function page" gestures on top
//! of an externally-provided base behavior (plain click and marquee
//! selection), and drives the variable highlight index from the host's
//! selection-lifecycle callbacks.

use crate::event::{StageEvent, Subject};
use crate::highlight;
use crate::stage::{ObjectWithPos, Stage};
use bluewire_graph::{reachable, Direction, Graph, NodeId, NodeKind, VarScope};

/// Base pointer behavior this controller defers to first.
///
/// The editor shell supplies its click/marquee tool here; a claimed event
/// (`true`) stops the tree-selection gesture.
pub trait BaseSelectOp {
    /// Handle a double-click before tree selection runs. Return `true` to
    /// consume the event.
    fn on_double_click(
        &mut self,
        graph: &Graph,
        stage: &mut Stage,
        subject: &mut Subject,
        pos: [f32; 2],
    ) -> bool;
}

/// Base behavior that never claims events
#[derive(Debug, Default)]
pub struct NullBaseOp;

impl BaseSelectOp for NullBaseOp {
    fn on_double_click(
        &mut self,
        _graph: &Graph,
        _stage: &mut Stage,
        _subject: &mut Subject,
        _pos: [f32; 2],
    ) -> bool {
        false
    }
}

/// Selection operation over a stage and its graph
#[derive(Debug, Default)]
pub struct NodeSelectOp<B = NullBaseOp> {
    base: B,
}

impl NodeSelectOp<NullBaseOp> {
    /// Create a controller with no base behavior
    pub fn new() -> Self {
        Self { base: NullBaseOp }
    }
}

impl<B: BaseSelectOp> NodeSelectOp<B> {
    /// Create a controller layered over `base`
    pub fn with_base(base: B) -> Self {
        Self { base }
    }

    /// Double-click handler.
    ///
    /// Defers to the base behavior first. Then, with exactly one object
    /// selected: a function node publishes an [`StageEvent::OpenPage`]
    /// request; any other node grows the selection to its reachable tree -
    /// downstream when `successor_modifier` is held, upstream otherwise.
    /// Matched nodes not mounted on the stage are silently dropped, and an
    /// empty mapped list publishes nothing.
    pub fn on_double_click(
        &mut self,
        graph: &Graph,
        stage: &mut Stage,
        subject: &mut Subject,
        pos: [f32; 2],
        successor_modifier: bool,
    ) -> bool {
        if self.base.on_double_click(graph, stage, subject, pos) {
            return true;
        }

        if stage.selection().len() != 1 {
            return false;
        }
        let Some(selected) = stage.selection().iter().next().copied() else {
            return false;
        };
        let Some(node) = graph.node(selected.node) else {
            debug_assert!(false, "selected object has no backing graph node");
            return false;
        };

        if let NodeKind::Function { path } = &node.kind {
            subject.publish(&StageEvent::OpenPage {
                node: node.id,
                path: path.clone(),
            });
        } else {
            let direction = if successor_modifier {
                Direction::Successor
            } else {
                Direction::Predecessor
            };
            self.select_all_tree(graph, stage, subject, selected.node, direction);
        }

        false
    }

    /// Grow the selection to the whole tree reachable from `root`.
    ///
    /// The reachable set is computed over the graph model, then mapped back
    /// to live stage objects; the result goes out as a single
    /// insert-selection notification.
    fn select_all_tree(
        &self,
        graph: &Graph,
        stage: &Stage,
        subject: &mut Subject,
        root: NodeId,
        direction: Direction,
    ) {
        let tree = reachable(graph, root, direction);
        if tree.is_empty() {
            return;
        }

        let mapped: Vec<ObjectWithPos> = stage
            .objects()
            .filter(|obj| tree.contains(&obj.node))
            .copied()
            .collect();

        tracing::debug!(
            ?direction,
            reached = tree.len(),
            mounted = mapped.len(),
            "tree selection"
        );

        if mapped.is_empty() {
            return;
        }
        subject.publish(&StageEvent::InsertSelection(mapped));
    }

    /// Host callback: `node` entered the selection. Enables highlighting of
    /// opposite-role variable nodes sharing its name. Returns `true` when a
    /// highlight pass ran.
    pub fn after_insert_selected(&self, graph: &mut Graph, stage: &Stage, node: NodeId) -> bool {
        self.change_highlight(graph, stage, node, true)
    }

    /// Host callback: `node` left the selection. Disables the same set.
    pub fn after_delete_selected(&self, graph: &mut Graph, stage: &Stage, node: NodeId) -> bool {
        self.change_highlight(graph, stage, node, false)
    }

    /// Host callback: the selection was fully cleared. Resets every mounted
    /// variable node to the default background, name notwithstanding.
    pub fn after_clear_selection(&self, graph: &mut Graph, stage: &Stage) -> bool {
        highlight::clear_var_highlight(graph, stage);
        true
    }

    fn change_highlight(&self, graph: &mut Graph, stage: &Stage, node: NodeId, on: bool) -> bool {
        let Some(node) = graph.node(node) else {
            return false;
        };
        let Some((scope, role, name)) = node.kind.variable_binding() else {
            return false;
        };
        let name = name.to_string();

        match scope {
            VarScope::Reference => {
                highlight::change_reference_highlight(graph, stage, role, &name, on);
            }
            VarScope::Value => {
                highlight::change_value_highlight(graph, stage, role, &name, on);
            }
        }
        true
    }
}
