//! Listener registry: which handlers run for an event type on a node.

use std::collections::HashMap;

use slotmap::new_key_type;

use crate::dom::node::NodeId;
use crate::event::dom_event::EventType;
use crate::widgets::collection::SelectId;
use crate::widgets::select::SelectAction;

new_key_type! {
    /// Handle for a host callback added with `Page::add_event_listener`.
    pub struct CallbackId;
}

/// What runs when a listener fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// A widget reaction, routed to the owning select.
    Select { select: SelectId, action: SelectAction },
    /// A host callback.
    External(CallbackId),
}

/// Handlers per `(node, event type)`, in registration order.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    map: HashMap<(NodeId, EventType), Vec<Handler>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the listeners of `event_type` on `node`.
    pub fn add(&mut self, node: NodeId, event_type: EventType, handler: Handler) {
        self.map.entry((node, event_type)).or_default().push(handler);
    }

    /// Snapshot of the handlers for `(node, event_type)`.
    ///
    /// A copy, so handlers may add or remove listeners while it is iterated.
    pub fn handlers(&self, node: NodeId, event_type: EventType) -> Vec<Handler> {
        self.map
            .get(&(node, event_type))
            .cloned()
            .unwrap_or_default()
    }

    /// Remove every handler owned by `select`. Returns how many were removed.
    pub fn remove_select(&mut self, select: SelectId) -> usize {
        self.remove_where(|handler| matches!(handler, Handler::Select { select: s, .. } if *s == select))
    }

    /// Remove a host callback wherever it was added.
    pub fn remove_callback(&mut self, callback: CallbackId) -> usize {
        self.remove_where(|handler| *handler == Handler::External(callback))
    }

    fn remove_where(&mut self, pred: impl Fn(&Handler) -> bool) -> usize {
        let mut removed = 0;
        self.map.retain(|_, handlers| {
            let before = handlers.len();
            handlers.retain(|h| !pred(h));
            removed += before - handlers.len();
            !handlers.is_empty()
        });
        removed
    }

    /// Total number of handlers.
    pub fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of handlers on `node` across all event types.
    pub fn count_on(&self, node: NodeId) -> usize {
        self.map
            .iter()
            .filter(|((n, _), _)| *n == node)
            .map(|(_, handlers)| handlers.len())
            .sum()
    }
}
