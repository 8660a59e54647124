// SPDX-License-Identifier: MIT OR Apache-2.0
//! Stage layer for the Bluewire editor.
//!
//! The stage is the live view onto a blueprint graph: which nodes are
//! currently mounted as scene objects, what the user has selected, and the
//! notifications the selection machinery publishes to the rest of the
//! editor. On top of that sit:
//! - the name-keyed variable highlight index, keeping get/set node
//!   backgrounds in sync with the selection
//! - the double-click selection controller, which grows a single selected
//!   node into its whole upstream or downstream tree
//!
//! ## Concurrency
//!
//! Everything here is synchronous and single-threaded. Operations run to
//! completion inside one input callback; highlight passes only write node
//! styles and never publish events, so no feedback loop can form.

pub mod event;
pub mod highlight;
pub mod select_op;
pub mod stage;

pub use event::{StageEvent, Subject};
pub use select_op::{BaseSelectOp, NodeSelectOp, NullBaseOp};
pub use stage::{ObjectWithPos, Selection, Stage};
