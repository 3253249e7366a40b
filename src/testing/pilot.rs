//! Pilot: programmatic interaction with a headless [`Page`].
//!
//! The `Pilot` wraps a page and simulates what a user does to it: clicks,
//! key presses on the focused element, and picking a value straight from the
//! native control (as a platform picker would).

use crate::config::SelectConfig;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::dom_event::{DomEvent, Origin};
use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers};
use crate::page::Page;
use crate::selector::ParseError;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless page driver for testing.
///
/// # Examples
///
/// ```ignore
/// use select_enhance::testing::{fixtures, Pilot};
/// use select_enhance::event::Key;
///
/// let (mut dom, body) = fixtures::document();
/// let fx = fixtures::build_select(&mut dom, body, &["A", "B"], None);
/// let mut pilot = Pilot::new(dom)?;
/// pilot.click(fx.trigger);
/// pilot.press_key(Key::Down);
/// pilot.press_key(Key::Enter);
/// assert_eq!(pilot.text(fx.trigger), "B");
/// ```
pub struct Pilot {
    page: Page,
}

impl Pilot {
    /// Mount `dom` with the default configuration.
    pub fn new(dom: Dom) -> Result<Self, ParseError> {
        Self::with_config(dom, SelectConfig::default())
    }

    /// Mount `dom` with `config`.
    pub fn with_config(dom: Dom, config: SelectConfig) -> Result<Self, ParseError> {
        Ok(Self {
            page: Page::new(dom, config)?,
        })
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Click `target`.
    pub fn click(&mut self, target: NodeId) -> DomEvent {
        self.page.click(target)
    }

    /// Press a key on the focused element (the document root when nothing
    /// has focus).
    pub fn press_key(&mut self, key: Key) -> Option<DomEvent> {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Press a key with modifiers on the focused element.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> Option<DomEvent> {
        self.page
            .handle_input(InputEvent::Key(KeyEvent::new(key, modifiers)))
    }

    /// Press a key named as in the DOM (`"ArrowDown"`, `"Escape"`).
    /// Unknown names press nothing.
    pub fn press(&mut self, name: &str) -> Option<DomEvent> {
        self.press_key(Key::from_dom_name(name)?)
    }

    /// Deliver a keydown straight to `target`, ignoring focus.
    pub fn press_key_on(&mut self, target: NodeId, key: Key) -> DomEvent {
        self.page.key_down(target, KeyEvent::plain(key))
    }

    /// Change the native control's selection the way a platform picker
    /// does: set the position, then fire `change` from the user.
    ///
    /// Returns `None` (and touches nothing) if `index` is out of range.
    pub fn pick_native(&mut self, native: NodeId, index: usize) -> Option<DomEvent> {
        if index >= self.page.document.dom.native_options(native).len() {
            return None;
        }
        self.page.document.dom.set_selected_index(native, index);
        Some(self.page.dispatch(DomEvent::change(native, Origin::User)))
    }

    /// Focus `node`. Returns `false` if it cannot take focus.
    pub fn focus(&mut self, node: NodeId) -> bool {
        self.page.document.focus(node)
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying page immutably.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Borrow the underlying page mutably.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn dom(&self) -> &Dom {
        self.page.dom()
    }

    /// The focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.page.document.active_element()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.dom().has_class(node, class)
    }

    /// Text content of `node`.
    pub fn text(&self, node: NodeId) -> String {
        self.dom().text_content(node)
    }

    /// Markup of the subtree at `node`, for snapshots.
    pub fn markup(&self, node: NodeId) -> String {
        self.dom().to_markup(node)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
