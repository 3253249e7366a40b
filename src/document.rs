//! Document state: tree, pending events, focus and per-container scroll.
//!
//! [`Document`] is what widgets mutate. It owns the [`Dom`], the queue of
//! events raised while another event is being handled, the active (focused)
//! element and the scroll position of every scrolled container.

use std::collections::HashMap;

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::handler::EventDispatcher;
use crate::scroll::ScrollState;

/// A document plus the interaction state that lives beside it.
#[derive(Debug, Default)]
pub struct Document {
    /// The document tree.
    pub dom: Dom,
    /// Events queued for delivery by the page.
    pub dispatcher: EventDispatcher,
    active: Option<NodeId>,
    scroll: HashMap<NodeId, ScrollState>,
}

impl Document {
    /// Wrap an existing tree. Nothing is focused and nothing is scrolled.
    pub fn new(dom: Dom) -> Self {
        Self {
            dom,
            dispatcher: EventDispatcher::new(),
            active: None,
            scroll: HashMap::new(),
        }
    }

    // ── Focus ────────────────────────────────────────────────────────

    /// Whether `node` can take focus: it exists, is focusable and not disabled.
    pub fn is_focusable(&self, node: NodeId) -> bool {
        self.dom
            .get(node)
            .is_some_and(|data| data.focusable && !data.disabled)
    }

    /// Move focus to `node`. Returns `false` (focus unchanged) if it cannot
    /// take focus.
    pub fn focus(&mut self, node: NodeId) -> bool {
        if !self.is_focusable(node) {
            return false;
        }
        log::trace!("focus -> {node:?}");
        self.active = Some(node);
        true
    }

    /// The focused node. A focused node that has since been removed reads as
    /// no focus.
    pub fn active_element(&self) -> Option<NodeId> {
        self.active.filter(|&node| self.dom.contains(node))
    }

    /// Focusable nodes in tab order (document order from the root).
    pub fn tab_order(&self) -> Vec<NodeId> {
        let Some(root) = self.dom.root() else {
            return Vec::new();
        };
        self.dom
            .walk_depth_first(root)
            .into_iter()
            .filter(|&node| self.is_focusable(node))
            .collect()
    }

    /// Focus the next node in tab order, wrapping around.
    pub fn focus_next(&mut self) -> Option<NodeId> {
        let order = self.tab_order();
        if order.is_empty() {
            return None;
        }
        let next = match self.position_in(&order) {
            Some(idx) => (idx + 1) % order.len(),
            None => 0,
        };
        self.active = Some(order[next]);
        self.active
    }

    /// Focus the previous node in tab order, wrapping around.
    pub fn focus_previous(&mut self) -> Option<NodeId> {
        let order = self.tab_order();
        if order.is_empty() {
            return None;
        }
        let prev = match self.position_in(&order) {
            Some(0) | None => order.len() - 1,
            Some(idx) => idx - 1,
        };
        self.active = Some(order[prev]);
        self.active
    }

    fn position_in(&self, order: &[NodeId]) -> Option<usize> {
        let active = self.active_element()?;
        order.iter().position(|&node| node == active)
    }

    // ── Scroll ───────────────────────────────────────────────────────

    /// Scroll state of `container`, if it has ever been scrolled.
    pub fn scroll_state(&self, container: NodeId) -> Option<ScrollState> {
        self.scroll.get(&container).copied()
    }

    /// Bring row `row` of `container` into view, scrolling to the nearest
    /// edge. The row count and viewport height are refreshed on every call.
    pub fn scroll_into_view(
        &mut self,
        container: NodeId,
        row: usize,
        content_len: usize,
        viewport_len: usize,
    ) {
        if !self.dom.contains(container) {
            return;
        }
        let state = self
            .scroll
            .entry(container)
            .or_insert_with(|| ScrollState::new(content_len, viewport_len));
        state.set_content_len(content_len);
        state.set_viewport_len(viewport_len);
        state.scroll_into_view(row);
    }

    /// Drop the scroll state of every container inside `subtree`.
    pub fn forget_scroll(&mut self, subtree: NodeId) {
        let dom = &self.dom;
        self.scroll
            .retain(|&container, _| !dom.subtree_contains(subtree, container));
    }
}
