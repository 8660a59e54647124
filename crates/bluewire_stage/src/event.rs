// SPDX-License-Identifier: MIT OR Apache-2.0
//! Typed selection notifications and their subject.

use crate::stage::ObjectWithPos;
use bluewire_graph::NodeId;
use std::path::PathBuf;

/// Notification published by the selection machinery
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    /// Replace-or-extend the host selection with these objects, as one
    /// atomic notification
    InsertSelection(Vec<ObjectWithPos>),
    /// The selection was fully cleared
    SelectionCleared,
    /// Request to open a new editor page for a function node's sub-graph
    OpenPage {
        /// The function node that was activated
        node: NodeId,
        /// Resource path of the sub-graph page
        path: PathBuf,
    },
}

type Handler = Box<dyn FnMut(&StageEvent)>;

/// Synchronous observer channel for [`StageEvent`]s.
///
/// Handlers run in subscription order, on the publishing thread, before
/// `publish` returns. Publishing from inside a handler is a programmer
/// error; the event loop is single-threaded and never reentrant.
#[derive(Default)]
pub struct Subject {
    handlers: Vec<Handler>,
    dispatching: bool,
}

impl Subject {
    /// Create a subject with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler; it runs after all earlier subscribers
    pub fn subscribe(&mut self, handler: impl FnMut(&StageEvent) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Publish an event to every subscriber, in order
    pub fn publish(&mut self, event: &StageEvent) {
        debug_assert!(!self.dispatching, "reentrant publish from a handler");
        tracing::debug!(?event, "stage event");

        self.dispatching = true;
        for handler in &mut self.handlers {
            handler(event);
        }
        self.dispatching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();

        let first = Rc::clone(&log);
        subject.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        subject.subscribe(move |_| second.borrow_mut().push("second"));

        subject.publish(&StageEvent::SelectionCleared);
        subject.publish(&StageEvent::SelectionCleared);

        assert_eq!(*log.borrow(), vec!["first", "second", "first", "second"]);
    }

    #[test]
    fn test_events_carry_payload() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        let sink = Rc::clone(&seen);
        subject.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        let node = NodeId::new();
        subject.publish(&StageEvent::OpenPage {
            node,
            path: PathBuf::from("graphs/damage.bw"),
        });

        assert_eq!(
            *seen.borrow(),
            vec![StageEvent::OpenPage {
                node,
                path: PathBuf::from("graphs/damage.bw"),
            }]
        );
    }
}
