//! Shared outside-click detection.
//!
//! One document-level registry replaces a click listener per widget. Owners
//! register the root of their subtree; after a click finishes bubbling, the
//! page asks which owners' roots do not contain the click target.

use slotmap::{new_key_type, SlotMap};

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;

new_key_type! {
    /// Handle returned by [`OutsideClickRegistry::register`].
    pub struct Registration;
}

#[derive(Debug, Clone, Copy)]
struct Entry<O> {
    owner: O,
    root: NodeId,
}

/// Registry of subtrees interested in clicks landing outside them.
#[derive(Debug)]
pub struct OutsideClickRegistry<O: Copy + PartialEq> {
    entries: SlotMap<Registration, Entry<O>>,
}

impl<O: Copy + PartialEq> OutsideClickRegistry<O> {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Watch for clicks outside `root` on behalf of `owner`.
    pub fn register(&mut self, owner: O, root: NodeId) -> Registration {
        self.entries.insert(Entry { owner, root })
    }

    /// Stop watching. Returns `false` for an unknown or already removed handle.
    pub fn deregister(&mut self, registration: Registration) -> bool {
        self.entries.remove(registration).is_some()
    }

    /// Remove every registration held by `owner`. Returns how many were removed.
    pub fn deregister_owner(&mut self, owner: O) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.owner != owner);
        before - self.entries.len()
    }

    /// Owners whose registered root does not contain `target`.
    ///
    /// Empty when `target` is not in the document.
    pub fn outside(&self, dom: &Dom, target: NodeId) -> Vec<O> {
        if !dom.contains(target) {
            return Vec::new();
        }
        self.entries
            .values()
            .filter(|entry| !dom.subtree_contains(entry.root, target))
            .map(|entry| entry.owner)
            .collect()
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<O: Copy + PartialEq> Default for OutsideClickRegistry<O> {
    fn default() -> Self {
        Self::new()
    }
}
