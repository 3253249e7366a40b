//! Event queue and bubble path computation.
//!
//! [`EventDispatcher`] holds events raised while another event is being
//! handled (a widget's change notification, for instance). The page drains it
//! after every handler so queued events still run to completion before the
//! outer dispatch continues.

use std::collections::VecDeque;

use super::dom_event::DomEvent;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;

// ---------------------------------------------------------------------------
// EventDispatcher
// ---------------------------------------------------------------------------

/// FIFO queue of pending document events.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    queue: VecDeque<DomEvent>,
}

impl EventDispatcher {
    /// Create a new, empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event for delivery.
    pub fn push(&mut self, event: DomEvent) {
        self.queue.push_back(event);
    }

    /// Take the oldest pending event.
    pub fn pop(&mut self) -> Option<DomEvent> {
        self.queue.pop_front()
    }

    /// Drain all pending events in order. The queue is empty afterwards.
    pub fn drain(&mut self) -> Vec<DomEvent> {
        self.queue.drain(..).collect()
    }

    /// Number of pending events.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Compute the bubble path from `start` up to the top of its tree (inclusive).
    ///
    /// Returns `[start, parent, grandparent, ..., root]`, or an empty vec if
    /// `start` does not exist.
    pub fn bubble_path(dom: &Dom, start: NodeId) -> Vec<NodeId> {
        if !dom.contains(start) {
            return Vec::new();
        }
        let mut path = vec![start];
        path.extend(dom.ancestors(start));
        path
    }
}

// ===========================================================================
// Tests
// ===========================================================================
