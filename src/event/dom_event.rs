//! Document events: click, keydown and change, with propagation flags.

use super::input::KeyEvent;
use crate::dom::node::NodeId;

/// Listener key for an event kind (what `addEventListener` takes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
    Change,
}

/// Event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Pointer activation of the target.
    Click,
    /// Key press delivered to the focused element.
    KeyDown(KeyEvent),
    /// A native control's value changed.
    Change,
}

impl EventKind {
    /// The listener key for this payload.
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Click => EventType::Click,
            EventKind::KeyDown(_) => EventType::KeyDown,
            EventKind::Change => EventType::Change,
        }
    }
}

/// Who raised an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The user, through host input or a platform picker.
    User,
    /// A widget, e.g. the change notification after a commit.
    Widget,
    /// Host code dispatching programmatically.
    Script,
}

/// A document event travelling along its bubble path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    /// The node the event was dispatched at.
    pub target: NodeId,
    /// The node whose listeners are currently running.
    pub current_target: NodeId,
    pub origin: Origin,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    /// Create an event aimed at `target`.
    pub fn new(kind: EventKind, target: NodeId, origin: Origin) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            origin,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// A user click on `target`.
    pub fn click(target: NodeId) -> Self {
        Self::new(EventKind::Click, target, Origin::User)
    }

    /// A user key press delivered to `target`.
    pub fn key_down(target: NodeId, key: KeyEvent) -> Self {
        Self::new(EventKind::KeyDown(key), target, Origin::User)
    }

    /// A change notification on a native control.
    pub fn change(target: NodeId, origin: Origin) -> Self {
        Self::new(EventKind::Change, target, origin)
    }

    /// Suppress the host's default action (e.g. scrolling on arrow keys).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop delivery to further nodes on the bubble path, including the
    /// document-level outside-click check.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
