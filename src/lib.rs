//! # select-enhance
//!
//! A headless, progressively enhanced select widget. A styled dropdown
//! (trigger, panel, options) is kept in sync with the native select control
//! it decorates, which remains the source of truth for the value.
//!
//! The crate carries the small document model the widget runs against, so
//! any host (a terminal front end, a renderer, a test) can drive it by
//! dispatching events.
//!
//! ## Core Systems
//!
//! - **[`dom`]**: Slotmap-backed node arena, native select helpers, markup output
//! - **[`selector`]**: Logos tokenizer, recursive descent parser and matcher for markers
//! - **[`event`]**: Key input (decoupled from crossterm), document events, outside clicks
//! - **[`document`]**: Tree plus focus, scroll state and the pending-event queue
//! - **[`widgets`]**: `Select` and `SelectCollection`
//! - **[`page`]**: Listener wiring, bubbling dispatch, disposal
//! - **[`config`]**: Markers, state classes, panel height
//! - **[`testing`]**: Headless `Pilot` and fixture builders

// Foundation
pub mod config;
pub mod dom;
pub mod scroll;
pub mod selector;

// Events
pub mod event;
pub mod listeners;

// Widgets
pub mod document;
pub mod widgets;

// Page
pub mod page;

// Testing
pub mod testing;

pub use config::SelectConfig;
pub use page::Page;
pub use widgets::{Select, SelectCollection, SelectId};
