//! Page: the document, its selects and the event routing between them.
//!
//! [`Page`] mounts one listener set per active select, keeps the shared
//! outside-click registry, holds host callbacks and delivers events along
//! their bubble path. The `Pilot` in [`crate::testing`] drives it headlessly.

use slotmap::SlotMap;

use crate::config::SelectConfig;
use crate::document::Document;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::dom_event::{DomEvent, EventType};
use crate::event::handler::EventDispatcher;
use crate::event::input::{InputEvent, Key, KeyEvent};
use crate::event::outside::OutsideClickRegistry;
use crate::listeners::{CallbackId, Handler, ListenerRegistry};
use crate::selector::ParseError;
use crate::widgets::collection::{SelectCollection, SelectId};
use crate::widgets::select::Select;

/// Host listener. Receives the event (and may prevent its default or stop its
/// propagation) together with a read-only view of the tree.
pub type Callback = Box<dyn FnMut(&mut DomEvent, &Dom)>;

/// A document with its enhanced selects mounted.
pub struct Page {
    /// Tree, focus, scroll and pending events.
    pub document: Document,
    /// Configuration the selects were bound with.
    pub config: SelectConfig,
    selects: SelectCollection,
    listeners: ListenerRegistry,
    outside_click: OutsideClickRegistry<SelectId>,
    callbacks: SlotMap<CallbackId, Callback>,
}

impl Page {
    /// Bind every select in `dom` and mount the active ones.
    ///
    /// Fails only when a configured marker selector does not parse.
    pub fn new(dom: Dom, config: SelectConfig) -> Result<Self, ParseError> {
        let selects = SelectCollection::init(&dom, &config)?;
        let mut page = Self {
            document: Document::new(dom),
            config,
            selects,
            listeners: ListenerRegistry::new(),
            outside_click: OutsideClickRegistry::new(),
            callbacks: SlotMap::with_key(),
        };
        let ids = page.selects.ids().to_vec();
        for id in ids {
            page.mount(id);
        }
        Ok(page)
    }

    /// [`new`](Self::new) with the default markers and classes.
    pub fn from_dom(dom: Dom) -> Result<Self, ParseError> {
        Self::new(dom, SelectConfig::default())
    }

    fn mount(&mut self, id: SelectId) {
        let Some(select) = self.selects.get(id) else {
            return;
        };
        if select.is_inert() {
            return;
        }
        for (node, event_type, action) in select.listeners() {
            self.listeners
                .add(node, event_type, Handler::Select { select: id, action });
        }
        self.outside_click.register(id, select.root());
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn dom(&self) -> &Dom {
        &self.document.dom
    }

    pub fn selects(&self) -> &SelectCollection {
        &self.selects
    }

    pub fn select(&self, id: SelectId) -> Option<&Select> {
        self.selects.get(id)
    }

    /// The select bound to `root`.
    pub fn select_at(&self, root: NodeId) -> Option<&Select> {
        self.selects
            .find_by_root(root)
            .and_then(|id| self.selects.get(id))
    }

    /// Number of mounted listeners, widget and host alike.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of mounted listeners on `node`.
    pub fn listeners_on(&self, node: NodeId) -> usize {
        self.listeners.count_on(node)
    }

    /// Number of selects watching for outside clicks.
    pub fn outside_click_count(&self) -> usize {
        self.outside_click.len()
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Deliver `event` to its target and then each ancestor, running that
    /// node's listeners in registration order.
    ///
    /// Events a handler queues (change notifications) are delivered in full
    /// before the next handler runs. After a click finishes bubbling, every
    /// select whose root does not contain the target is closed, unless
    /// propagation was stopped. Returns the event with its final flags.
    pub fn dispatch(&mut self, mut event: DomEvent) -> DomEvent {
        let event_type = event.kind.event_type();
        let path = EventDispatcher::bubble_path(&self.document.dom, event.target);
        log::trace!("dispatch {event_type:?} at {:?} ({} nodes)", event.target, path.len());

        for node in path {
            event.current_target = node;
            for handler in self.listeners.handlers(node, event_type) {
                self.run(handler, &mut event);
                self.flush();
            }
            if event.is_propagation_stopped() {
                break;
            }
        }

        if event_type == EventType::Click && !event.is_propagation_stopped() {
            for id in self.outside_click.outside(&self.document.dom, event.target) {
                if let Some(select) = self.selects.get_mut(id) {
                    select.close(&mut self.document);
                }
            }
        }
        event
    }

    fn run(&mut self, handler: Handler, event: &mut DomEvent) {
        match handler {
            Handler::Select { select, action } => {
                if let Some(select) = self.selects.get_mut(select) {
                    select.perform(&mut self.document, action, event);
                }
            }
            Handler::External(id) => {
                if let Some(callback) = self.callbacks.get_mut(id) {
                    callback(event, &self.document.dom);
                }
            }
        }
    }

    /// Deliver every queued event.
    fn flush(&mut self) {
        while let Some(queued) = self.document.dispatcher.pop() {
            self.dispatch(queued);
        }
    }

    /// A user click on `target`.
    pub fn click(&mut self, target: NodeId) -> DomEvent {
        self.dispatch(DomEvent::click(target))
    }

    /// A user key press delivered to `target`.
    pub fn key_down(&mut self, target: NodeId, key: KeyEvent) -> DomEvent {
        self.dispatch(DomEvent::key_down(target, key))
    }

    /// Route host input.
    ///
    /// Key presses go to the focused element, or the document root when
    /// nothing has focus. Unless a listener prevented the default, Tab and
    /// BackTab move focus, and Enter or Space on a focused `button` clicks
    /// it. Other input has no widget meaning and is dropped. Returns the
    /// dispatched keydown, if any.
    pub fn handle_input(&mut self, input: InputEvent) -> Option<DomEvent> {
        match input {
            InputEvent::Key(key) => {
                let target = self
                    .document
                    .active_element()
                    .or_else(|| self.document.dom.root())?;
                let event = self.key_down(target, key);
                if !event.is_default_prevented() {
                    match key.code {
                        Key::Tab => {
                            self.document.focus_next();
                        }
                        Key::BackTab => {
                            self.document.focus_previous();
                        }
                        Key::Enter | Key::Char(' ') if self.is_button(target) => {
                            self.click(target);
                        }
                        _ => {}
                    }
                }
                Some(event)
            }
            other => {
                log::trace!("ignoring input {other:?}");
                None
            }
        }
    }

    fn is_button(&self, node: NodeId) -> bool {
        self.document
            .dom
            .get(node)
            .is_some_and(|data| data.tag.eq_ignore_ascii_case("button"))
    }

    /// Run `f` against one select, then deliver the events it queued.
    ///
    /// This is how host code calls widget operations directly, e.g.
    /// `page.update_select(id, |s, doc| s.select_option(doc, 2, true))`.
    pub fn update_select<R>(
        &mut self,
        id: SelectId,
        f: impl FnOnce(&mut Select, &mut Document) -> R,
    ) -> Option<R> {
        let select = self.selects.get_mut(id)?;
        let result = f(select, &mut self.document);
        self.flush();
        Some(result)
    }

    // ── Host listeners ───────────────────────────────────────────────

    /// Listen for `event_type` on `node` (including events bubbling from
    /// its descendants).
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        event_type: EventType,
        callback: impl FnMut(&mut DomEvent, &Dom) + 'static,
    ) -> CallbackId {
        let id = self.callbacks.insert(Box::new(callback));
        self.listeners.add(node, event_type, Handler::External(id));
        id
    }

    /// Remove a host listener. Returns `false` if it was already removed.
    pub fn remove_event_listener(&mut self, id: CallbackId) -> bool {
        self.listeners.remove_callback(id);
        self.callbacks.remove(id).is_some()
    }

    // ── Disposal ─────────────────────────────────────────────────────

    /// Unmount one select: its listeners, its outside-click registration and
    /// its panel's scroll state. The tree is left as it is.
    pub fn dispose_select(&mut self, id: SelectId) -> bool {
        let Some(select) = self.selects.remove(id) else {
            return false;
        };
        let listeners = self.listeners.remove_select(id);
        let registrations = self.outside_click.deregister_owner(id);
        if let Some(panel) = select.panel() {
            self.document.forget_scroll(panel);
        }
        log::debug!(
            "disposed select {:?}: {listeners} listeners, {registrations} outside-click registrations",
            select.root()
        );
        true
    }

    /// Unmount every select. Host listeners stay.
    pub fn dispose(&mut self) {
        let ids = self.selects.ids().to_vec();
        for id in ids {
            self.dispose_select(id);
        }
    }
}
