//! Select widget: a styled dropdown kept in sync with a native select control.
//!
//! A [`Select`] binds to one marked subtree: a native control (the source of
//! truth for the value), a trigger that opens and closes the panel, the panel
//! itself and its option elements. The widget only ever touches classes,
//! attributes and text inside that subtree, the native control's selected
//! position, document focus and the panel's scroll position.
//!
//! Operations take the [`Document`] they act on. Change notifications are
//! queued on its dispatcher and delivered by the page once the running
//! handler returns.

use crate::config::{Markers, SelectConfig, StateClasses};
use crate::document::Document;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::dom_event::{DomEvent, EventKind, EventType, Origin};
use crate::event::input::Key;

/// Accessibility attribute mirroring the open state on the trigger.
pub const ARIA_EXPANDED: &str = "aria-expanded";

// ---------------------------------------------------------------------------
// SelectAction
// ---------------------------------------------------------------------------

/// Widget reaction attached to a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Trigger click: open or close.
    Toggle,
    /// Option click: commit that option and close.
    Commit(usize),
    /// Keydown reaching the root.
    KeyDown,
    /// Change on the native control.
    SyncFromNative,
}

// ---------------------------------------------------------------------------
// Select
// ---------------------------------------------------------------------------

/// One enhanced select.
///
/// Without a native control or a trigger the instance is inert: it exposes
/// no listeners and every operation is a no-op.
#[derive(Debug, Clone)]
pub struct Select {
    root: NodeId,
    native: Option<NodeId>,
    trigger: Option<NodeId>,
    panel: Option<NodeId>,
    options: Vec<NodeId>,
    is_open: bool,
    current_index: usize,
    classes: StateClasses,
    visible_rows: usize,
}

impl Select {
    /// Locate the widget's parts under `root`.
    ///
    /// Reads the document only: no classes change and no events are raised.
    /// The initial index is the option already carrying the selected class,
    /// or 0.
    pub fn bind(dom: &Dom, root: NodeId, markers: &Markers, config: &SelectConfig) -> Self {
        let native = dom.query_selector(root, &markers.native);
        let trigger = dom.query_selector(root, &markers.trigger);
        let panel = dom.query_selector(root, &markers.panel);
        let options = dom.query_selector_all(root, &markers.option);

        let current_index = options
            .iter()
            .position(|&opt| dom.has_class(opt, &config.classes.selected))
            .unwrap_or(0);

        let select = Self {
            root,
            native,
            trigger,
            panel,
            options,
            is_open: false,
            current_index,
            classes: config.classes.clone(),
            visible_rows: config.visible_rows,
        };

        if select.is_inert() {
            log::warn!(
                "select {root:?} left inert: native control {}, trigger {}",
                if native.is_some() { "found" } else { "missing" },
                if trigger.is_some() { "found" } else { "missing" },
            );
        } else {
            log::debug!(
                "bound select {root:?}: {} options, current {}",
                select.options.len(),
                current_index
            );
        }
        select
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn native(&self) -> Option<NodeId> {
        self.native
    }

    pub fn trigger(&self) -> Option<NodeId> {
        self.trigger
    }

    pub fn panel(&self) -> Option<NodeId> {
        self.panel
    }

    /// Option elements in document order; an option's index is its position.
    pub fn options(&self) -> &[NodeId] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Index of the highlighted (or last committed) option.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the native control or the trigger is missing.
    pub fn is_inert(&self) -> bool {
        self.native.is_none() || self.trigger.is_none()
    }

    /// The native control's current value.
    pub fn value(&self, dom: &Dom) -> Option<String> {
        dom.native_value(self.native?)
    }

    fn parts(&self) -> Option<(NodeId, NodeId)> {
        Some((self.native?, self.trigger?))
    }

    /// Listeners the page attaches for this widget. Empty when inert.
    pub fn listeners(&self) -> Vec<(NodeId, EventType, SelectAction)> {
        let Some((native, trigger)) = self.parts() else {
            return Vec::new();
        };
        let mut listeners = Vec::with_capacity(self.options.len() + 3);
        listeners.push((trigger, EventType::Click, SelectAction::Toggle));
        listeners.extend(
            self.options
                .iter()
                .enumerate()
                .map(|(index, &opt)| (opt, EventType::Click, SelectAction::Commit(index))),
        );
        listeners.push((self.root, EventType::KeyDown, SelectAction::KeyDown));
        listeners.push((native, EventType::Change, SelectAction::SyncFromNative));
        listeners
    }

    /// Run a listener reaction for `event`.
    pub fn perform(&mut self, doc: &mut Document, action: SelectAction, event: &mut DomEvent) {
        match action {
            SelectAction::Toggle => self.toggle(doc),
            SelectAction::Commit(index) => {
                self.select_option(doc, index, true);
                self.close(doc);
            }
            SelectAction::KeyDown => self.handle_key(doc, event),
            SelectAction::SyncFromNative => self.sync_from_native(doc),
        }
    }

    // ── Open / close ─────────────────────────────────────────────────

    /// Open if closed, close if open.
    pub fn toggle(&mut self, doc: &mut Document) {
        if self.is_open {
            self.close(doc);
        } else {
            self.open(doc);
        }
    }

    /// Expand the panel and focus the current option.
    pub fn open(&mut self, doc: &mut Document) {
        let Some((_, trigger)) = self.parts() else {
            return;
        };
        self.is_open = true;
        self.set_expanded(&mut doc.dom, trigger, true);
        if let Some(&option) = self.options.get(self.current_index) {
            doc.focus(option);
        }
        log::trace!("select {:?} opened", self.root);
    }

    /// Collapse the panel. Safe to call when already closed.
    pub fn close(&mut self, doc: &mut Document) {
        let Some((_, trigger)) = self.parts() else {
            return;
        };
        self.is_open = false;
        self.set_expanded(&mut doc.dom, trigger, false);
        log::trace!("select {:?} closed", self.root);
    }

    fn set_expanded(&self, dom: &mut Dom, trigger: NodeId, expanded: bool) {
        let class = &self.classes.expanded;
        for node in std::iter::once(trigger).chain(self.panel) {
            if expanded {
                dom.add_class(node, class);
            } else {
                dom.remove_class(node, class);
            }
        }
        dom.set_attr(trigger, ARIA_EXPANDED, if expanded { "true" } else { "false" });
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Commit the option at `index`.
    ///
    /// Moves the selected and current classes to it, copies its trimmed text
    /// to the trigger, updates the native control if its position differs,
    /// and with `notify` queues a change event on the native control. The
    /// event is queued even when `index` was already selected. Out-of-range
    /// indices are ignored.
    pub fn select_option(&mut self, doc: &mut Document, index: usize, notify: bool) {
        let Some((native, trigger)) = self.parts() else {
            return;
        };
        let Some(&chosen) = self.options.get(index) else {
            return;
        };

        for &opt in &self.options {
            doc.dom.remove_class(opt, &self.classes.selected);
            doc.dom.remove_class(opt, &self.classes.current);
        }
        doc.dom.add_class(chosen, &self.classes.selected);
        doc.dom.add_class(chosen, &self.classes.current);

        let label = doc.dom.text_content(chosen).trim().to_owned();
        doc.dom.set_text_content(trigger, label);

        if doc.dom.selected_index(native) != Some(index) {
            doc.dom.set_selected_index(native, index);
        }
        self.current_index = index;
        log::debug!("select {:?} committed option {index} (notify: {notify})", self.root);

        if notify {
            doc.dispatcher.push(DomEvent::change(native, Origin::Widget));
        }
    }

    /// Adopt the native control's position if it differs from the current
    /// index. Never notifies, so a widget's own change event stops here.
    pub fn sync_from_native(&mut self, doc: &mut Document) {
        let Some((native, _)) = self.parts() else {
            return;
        };
        let Some(index) = doc.dom.selected_index(native) else {
            return;
        };
        if index != self.current_index {
            log::debug!("select {:?} syncing to native option {index}", self.root);
            self.select_option(doc, index, false);
        }
    }

    /// Highlight `index` without committing and scroll it into view.
    pub fn move_focus(&mut self, doc: &mut Document, index: usize) {
        if self.is_inert() {
            return;
        }
        let Some(&target) = self.options.get(index) else {
            return;
        };
        for &opt in &self.options {
            doc.dom.remove_class(opt, &self.classes.current);
        }
        doc.dom.add_class(target, &self.classes.current);
        self.current_index = index;
        if let Some(panel) = self.panel {
            doc.scroll_into_view(panel, index, self.options.len(), self.visible_rows);
        }
        log::trace!("select {:?} highlighted option {index}", self.root);
    }

    // ── Keyboard ─────────────────────────────────────────────────────

    /// React to a keydown that reached the root.
    ///
    /// Escape closes. Arrow keys open and move the highlight, wrapping at
    /// both ends. Enter commits the highlight and returns focus to the
    /// trigger, but only while open. Arrow keys and a handled Enter prevent
    /// the default action.
    pub fn handle_key(&mut self, doc: &mut Document, event: &mut DomEvent) {
        let EventKind::KeyDown(key) = event.kind else {
            return;
        };
        let Some((_, trigger)) = self.parts() else {
            return;
        };

        match key.code {
            Key::Escape => self.close(doc),
            Key::Down | Key::Up => {
                event.prevent_default();
                if !self.is_open {
                    self.open(doc);
                }
                let len = self.options.len();
                if len == 0 {
                    return;
                }
                let next = if key.code == Key::Down {
                    (self.current_index + 1) % len
                } else {
                    (self.current_index + len - 1) % len
                };
                self.move_focus(doc, next);
            }
            Key::Enter if self.is_open => {
                event.prevent_default();
                self.select_option(doc, self.current_index, true);
                self.close(doc);
                doc.focus(trigger);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;
    use crate::event::input::KeyEvent;

    struct Fixture {
        doc: Document,
        root: NodeId,
        native: NodeId,
        trigger: NodeId,
        panel: NodeId,
        options: Vec<NodeId>,
    }

    fn fixture(labels: &[&str], selected: Option<usize>) -> Fixture {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let root = dom.insert_child(body, NodeData::new("div").with_flag("data-js-select"));
        let native = dom.insert_child(
            root,
            NodeData::new("select").with_flag("data-js-select-original-controls"),
        );
        for (i, label) in labels.iter().enumerate() {
            let mut opt = NodeData::new("option").with_text(*label);
            if selected == Some(i) {
                opt = opt.with_flag("selected");
            }
            dom.insert_child(native, opt);
        }
        let trigger = dom.insert_child(
            root,
            NodeData::new("button")
                .with_flag("data-js-select-button")
                .focusable(true)
                .with_text(selected.map_or("", |i| labels[i])),
        );
        let panel = dom.insert_child(root, NodeData::new("ul").with_flag("data-js-select-dropdown"));
        let options = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let mut opt = NodeData::new("li")
                    .with_flag("data-js-select-option")
                    .focusable(true)
                    .with_text(format!("  {label}\n"));
                if selected == Some(i) {
                    opt = opt.with_class("is-selected");
                }
                dom.insert_child(panel, opt)
            })
            .collect();
        Fixture {
            doc: Document::new(dom),
            root,
            native,
            trigger,
            panel,
            options,
        }
    }

    fn bind(fx: &Fixture) -> Select {
        let config = SelectConfig::default().with_visible_rows(2);
        let markers = config.markers().unwrap();
        Select::bind(&fx.doc.dom, fx.root, &markers, &config)
    }

    fn key(code: Key) -> DomEvent {
        DomEvent::key_down(NodeId::default(), KeyEvent::plain(code))
    }

    fn selected_options(fx: &Fixture) -> Vec<usize> {
        fx.options
            .iter()
            .enumerate()
            .filter(|(_, opt)| fx.doc.dom.has_class(**opt, "is-selected"))
            .map(|(i, _)| i)
            .collect()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn bind_finds_parts_and_preselected_index() {
        let fx = fixture(&["A", "B", "C"], Some(1));
        let select = bind(&fx);
        assert!(!select.is_inert());
        assert_eq!(select.native(), Some(fx.native));
        assert_eq!(select.trigger(), Some(fx.trigger));
        assert_eq!(select.panel(), Some(fx.panel));
        assert_eq!(select.options(), fx.options.as_slice());
        assert_eq!(select.current_index(), 1);
        assert!(!select.is_open());
        assert!(fx.doc.dispatcher.is_empty());
        assert_eq!(fx.doc.dom.attr(fx.trigger, ARIA_EXPANDED), None);
    }

    #[test]
    fn bind_without_marked_option_starts_at_zero() {
        let fx = fixture(&["A", "B"], None);
        assert_eq!(bind(&fx).current_index(), 0);
    }

    #[test]
    fn missing_native_control_is_inert() {
        let mut fx = fixture(&["A", "B"], Some(0));
        fx.doc.dom.remove(fx.native);
        let mut select = bind(&fx);
        assert!(select.is_inert());
        assert!(select.listeners().is_empty());

        select.open(&mut fx.doc);
        select.select_option(&mut fx.doc, 1, true);
        assert!(!select.is_open());
        assert!(fx.doc.dispatcher.is_empty());
        assert_eq!(selected_options(&fx), vec![0]);
    }

    #[test]
    fn listeners_cover_trigger_options_root_and_native() {
        let fx = fixture(&["A", "B"], None);
        let listeners = bind(&fx).listeners();
        assert_eq!(
            listeners,
            vec![
                (fx.trigger, EventType::Click, SelectAction::Toggle),
                (fx.options[0], EventType::Click, SelectAction::Commit(0)),
                (fx.options[1], EventType::Click, SelectAction::Commit(1)),
                (fx.root, EventType::KeyDown, SelectAction::KeyDown),
                (fx.native, EventType::Change, SelectAction::SyncFromNative),
            ]
        );
    }

    // ── Open / close ─────────────────────────────────────────────────

    #[test]
    fn open_expands_and_focuses_current_option() {
        let mut fx = fixture(&["A", "B", "C"], Some(2));
        let mut select = bind(&fx);
        select.open(&mut fx.doc);
        assert!(select.is_open());
        assert!(fx.doc.dom.has_class(fx.trigger, "is-expanded"));
        assert!(fx.doc.dom.has_class(fx.panel, "is-expanded"));
        assert_eq!(fx.doc.dom.attr(fx.trigger, ARIA_EXPANDED), Some("true"));
        assert_eq!(fx.doc.active_element(), Some(fx.options[2]));
    }

    #[test]
    fn close_restores_and_is_idempotent() {
        let mut fx = fixture(&["A"], None);
        let mut select = bind(&fx);
        select.open(&mut fx.doc);
        select.close(&mut fx.doc);
        select.close(&mut fx.doc);
        assert!(!select.is_open());
        assert!(!fx.doc.dom.has_class(fx.trigger, "is-expanded"));
        assert!(!fx.doc.dom.has_class(fx.panel, "is-expanded"));
        assert_eq!(fx.doc.dom.attr(fx.trigger, ARIA_EXPANDED), Some("false"));
    }

    #[test]
    fn toggle_alternates() {
        let mut fx = fixture(&["A"], None);
        let mut select = bind(&fx);
        select.toggle(&mut fx.doc);
        assert!(select.is_open());
        select.toggle(&mut fx.doc);
        assert!(!select.is_open());
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn select_option_moves_classes_label_and_native() {
        let mut fx = fixture(&["Alpha", "Beta", "Gamma"], Some(0));
        let mut select = bind(&fx);
        select.select_option(&mut fx.doc, 2, false);

        assert_eq!(selected_options(&fx), vec![2]);
        assert!(fx.doc.dom.has_class(fx.options[2], "is-current"));
        assert!(!fx.doc.dom.has_class(fx.options[0], "is-current"));
        assert_eq!(fx.doc.dom.text_content(fx.trigger), "Gamma");
        assert_eq!(fx.doc.dom.selected_index(fx.native), Some(2));
        assert_eq!(select.current_index(), 2);
        assert_eq!(select.value(&fx.doc.dom).as_deref(), Some("Gamma"));
        assert!(fx.doc.dispatcher.is_empty());
    }

    #[test]
    fn select_option_notifies_every_time() {
        let mut fx = fixture(&["A", "B"], None);
        let mut select = bind(&fx);
        select.select_option(&mut fx.doc, 1, true);
        select.select_option(&mut fx.doc, 1, true);
        let queued = fx.doc.dispatcher.drain();
        assert_eq!(queued.len(), 2);
        for ev in queued {
            assert_eq!(ev.kind, EventKind::Change);
            assert_eq!(ev.target, fx.native);
            assert_eq!(ev.origin, Origin::Widget);
        }
    }

    #[test]
    fn select_option_out_of_range_is_noop() {
        let mut fx = fixture(&["A", "B"], Some(1));
        let mut select = bind(&fx);
        select.select_option(&mut fx.doc, 5, true);
        assert_eq!(select.current_index(), 1);
        assert_eq!(selected_options(&fx), vec![1]);
        assert!(fx.doc.dispatcher.is_empty());
    }

    #[test]
    fn sync_from_native_adopts_position_once() {
        let mut fx = fixture(&["A", "B", "C"], Some(0));
        let mut select = bind(&fx);
        fx.doc.dom.set_selected_index(fx.native, 2);

        select.sync_from_native(&mut fx.doc);
        assert_eq!(select.current_index(), 2);
        assert_eq!(fx.doc.dom.text_content(fx.trigger), "C");
        let after_first = fx.doc.dom.to_markup(fx.root);

        select.sync_from_native(&mut fx.doc);
        assert_eq!(fx.doc.dom.to_markup(fx.root), after_first);
        assert!(fx.doc.dispatcher.is_empty());
    }

    // ── Keyboard ─────────────────────────────────────────────────────

    #[test]
    fn arrow_down_opens_and_wraps() {
        let mut fx = fixture(&["A", "B", "C"], Some(2));
        let mut select = bind(&fx);
        let mut ev = key(Key::Down);
        select.handle_key(&mut fx.doc, &mut ev);
        assert!(ev.is_default_prevented());
        assert!(select.is_open());
        assert_eq!(select.current_index(), 0);
        assert!(fx.doc.dom.has_class(fx.options[0], "is-current"));
        // Highlight only: the committed option keeps its class.
        assert_eq!(selected_options(&fx), vec![2]);
    }

    #[test]
    fn arrow_up_wraps_to_last() {
        let mut fx = fixture(&["A", "B", "C"], Some(0));
        let mut select = bind(&fx);
        select.handle_key(&mut fx.doc, &mut key(Key::Up));
        assert_eq!(select.current_index(), 2);
    }

    #[test]
    fn arrow_keys_scroll_highlight_into_view() {
        let mut fx = fixture(&["A", "B", "C", "D"], Some(0));
        let mut select = bind(&fx);
        select.handle_key(&mut fx.doc, &mut key(Key::Down));
        select.handle_key(&mut fx.doc, &mut key(Key::Down));
        assert_eq!(select.current_index(), 2);
        assert_eq!(fx.doc.scroll_state(fx.panel).map(|s| s.offset), Some(1));

        select.handle_key(&mut fx.doc, &mut key(Key::Up));
        select.handle_key(&mut fx.doc, &mut key(Key::Up));
        assert_eq!(fx.doc.scroll_state(fx.panel).map(|s| s.offset), Some(0));
    }

    #[test]
    fn enter_only_acts_while_open() {
        let mut fx = fixture(&["A", "B"], Some(0));
        let mut select = bind(&fx);
        let mut ev = key(Key::Enter);
        select.handle_key(&mut fx.doc, &mut ev);
        assert!(!ev.is_default_prevented());
        assert!(fx.doc.dispatcher.is_empty());

        select.handle_key(&mut fx.doc, &mut key(Key::Down));
        let mut ev = key(Key::Enter);
        select.handle_key(&mut fx.doc, &mut ev);
        assert!(ev.is_default_prevented());
        assert!(!select.is_open());
        assert_eq!(selected_options(&fx), vec![1]);
        assert_eq!(fx.doc.active_element(), Some(fx.trigger));
        assert_eq!(fx.doc.dispatcher.pending_count(), 1);
    }

    #[test]
    fn escape_closes() {
        let mut fx = fixture(&["A"], None);
        let mut select = bind(&fx);
        select.open(&mut fx.doc);
        select.handle_key(&mut fx.doc, &mut key(Key::Escape));
        assert!(!select.is_open());
    }

    #[test]
    fn arrows_with_no_options_only_open() {
        let mut fx = fixture(&[], None);
        let mut select = bind(&fx);
        select.handle_key(&mut fx.doc, &mut key(Key::Down));
        assert!(select.is_open());
        assert_eq!(select.current_index(), 0);
    }

    #[test]
    fn perform_commit_selects_and_closes() {
        let mut fx = fixture(&["A", "B"], None);
        let mut select = bind(&fx);
        select.open(&mut fx.doc);
        let mut ev = DomEvent::click(fx.options[1]);
        select.perform(&mut fx.doc, SelectAction::Commit(1), &mut ev);
        assert!(!select.is_open());
        assert_eq!(select.current_index(), 1);
        assert_eq!(fx.doc.dispatcher.pending_count(), 1);
    }
}
