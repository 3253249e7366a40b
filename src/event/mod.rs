//! Event system: host input, document events, event queue, outside clicks.

pub mod dom_event;
pub mod handler;
pub mod input;
pub mod outside;

pub use dom_event::{DomEvent, EventKind, EventType, Origin};
pub use handler::EventDispatcher;
pub use input::{InputEvent, Key, KeyEvent, Modifiers, UnsupportedInput};
pub use outside::{OutsideClickRegistry, Registration};
