// SPDX-License-Identifier: MIT OR Apache-2.0
//! Name-keyed variable highlight index.
//!
//! Visual invariant: a reference/value node is drawn highlighted iff its
//! name matches the name of a currently-selected opposite-role node. These
//! passes are pure style writes - they never publish events, so selection
//! callbacks can call them freely without feedback.

use crate::stage::Stage;
use bluewire_graph::node::{PANEL_BG_DEFAULT, PANEL_BG_HIGHLIGHT};
use bluewire_graph::{Graph, NodeId, VarRole, VarScope};

/// Repaint reference get/set nodes matching `name`.
///
/// `trigger` is the role of the node that entered or left the selection;
/// the scan repaints the *opposite* role only, so a selected setter lights
/// up its getters and vice versa. An empty name is not a valid binding and
/// short-circuits to a no-op.
pub fn change_reference_highlight(
    graph: &mut Graph,
    stage: &Stage,
    trigger: VarRole,
    name: &str,
    on: bool,
) {
    change_var_highlight(graph, stage, VarScope::Reference, trigger, name, on);
}

/// Repaint value get/set nodes matching `name`. See
/// [`change_reference_highlight`].
pub fn change_value_highlight(
    graph: &mut Graph,
    stage: &Stage,
    trigger: VarRole,
    name: &str,
    on: bool,
) {
    change_var_highlight(graph, stage, VarScope::Value, trigger, name, on);
}

fn change_var_highlight(
    graph: &mut Graph,
    stage: &Stage,
    scope: VarScope,
    trigger: VarRole,
    name: &str,
    on: bool,
) {
    if name.is_empty() {
        return;
    }

    tracing::trace!(?scope, ?trigger, name, on, "variable highlight pass");

    let target_role = trigger.opposite();
    let matched: Vec<NodeId> = stage
        .objects()
        .filter_map(|obj| {
            let node = graph.node(obj.node)?;
            let (node_scope, node_role, node_name) = node.kind.variable_binding()?;
            (node_scope == scope && node_role == target_role && node_name == name)
                .then_some(obj.node)
        })
        .collect();

    let color = if on { PANEL_BG_HIGHLIGHT } else { PANEL_BG_DEFAULT };
    for id in matched {
        set_panel_bg(graph, id, color);
    }
}

/// Unconditionally repaint every mounted variable node back to the default
/// background, regardless of name. Used when the selection is fully
/// cleared.
pub fn clear_var_highlight(graph: &mut Graph, stage: &Stage) {
    let matched: Vec<NodeId> = stage
        .objects()
        .filter_map(|obj| {
            let node = graph.node(obj.node)?;
            node.kind.is_variable().then_some(obj.node)
        })
        .collect();

    for id in matched {
        set_panel_bg(graph, id, PANEL_BG_DEFAULT);
    }
}

/// Read-modify-write of the background color only; the rest of the style
/// record must come through untouched.
fn set_panel_bg(graph: &mut Graph, node_id: NodeId, color: [u8; 3]) {
    let Some(node) = graph.node_mut(node_id) else {
        return;
    };
    let mut style = node.style();
    style.panel_bg = color;
    node.set_style(style);
}
