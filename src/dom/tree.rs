//! Tree operations: insert, remove, walk, text content, class/attribute edits.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The document tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that node removal is O(subtree size) and lookup is O(1).
/// Child order is document order.
#[derive(Debug)]
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a parentless node.
    ///
    /// If no root has been set yet, this node becomes the document root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// A stale `parent` leaves the new node detached (parentless, not root).
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
            self.parent.insert(id, parent);
        }
        id
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no children
    /// or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the top of its tree, collecting ancestor ids.
    ///
    /// Does **not** include `id` itself; starts with the immediate parent.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `node` is `root` or lies anywhere inside `root`'s subtree.
    ///
    /// Mirrors the DOM's `Node.contains`. False when either node is missing.
    pub fn subtree_contains(&self, root: NodeId, node: NodeId) -> bool {
        if !self.contains(root) || !self.contains(node) {
            return false;
        }
        node == root || self.ancestors(node).contains(&root)
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The document root, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the document contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start` (inclusive).
    /// This is document order.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Descendants of `start` in document order, excluding `start` itself.
    pub fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut nodes = self.walk_depth_first(start);
        if !nodes.is_empty() {
            nodes.remove(0);
        }
        nodes
    }

    /// Concatenated text of `id` and all its descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        self.walk_depth_first(id)
            .into_iter()
            .filter_map(|node| self.get(node).and_then(|data| data.text.as_deref()))
            .collect()
    }

    /// Replace the content of `id` with a single run of text.
    ///
    /// Children are removed, as with the DOM's `textContent` setter.
    pub fn set_text_content(&mut self, id: NodeId, text: impl Into<String>) {
        if !self.contains(id) {
            return;
        }
        let kids = self.children(id).to_vec();
        for child in kids {
            self.remove(child);
        }
        if let Some(data) = self.get_mut(id) {
            data.text = Some(text.into());
        }
    }

    /// Whether `id` exists and carries `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id).is_some_and(|data| data.has_class(class))
    }

    /// Add `class` to `id`. No-op for missing nodes.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(data) = self.get_mut(id) {
            data.add_class(class);
        }
    }

    /// Remove `class` from `id`. No-op for missing nodes.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(data) = self.get_mut(id) {
            data.remove_class(class);
        }
    }

    /// Attribute value of `id`, if both exist.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|data| data.attr(name))
    }

    /// Set an attribute on `id`. No-op for missing nodes.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(data) = self.get_mut(id) {
            data.set_attr(name, value);
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("body").with_id("root"));
        let a = dom.insert_child(root, NodeData::new("div").with_id("a").with_class("left"));
        let b = dom.insert_child(root, NodeData::new("div").with_id("b").with_class("right"));
        let c = dom.insert_child(a, NodeData::new("button").with_id("c").with_text("Go"));
        let d = dom.insert_child(a, NodeData::new("span").with_id("d").with_text(" now"));
        (dom, root, a, b, c, d)
    }

    #[test]
    fn insert_sets_root() {
        let mut dom = Dom::new();
        let first = dom.insert(NodeData::new("html"));
        let _second = dom.insert(NodeData::new("template"));
        assert_eq!(dom.root(), Some(first));
    }

    #[test]
    fn insert_child_parent_relationship() {
        let (dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.parent(a), Some(root));
        assert_eq!(dom.parent(c), Some(a));
        assert_eq!(dom.parent(root), None);
    }

    #[test]
    fn insert_child_with_stale_parent_is_detached() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("body"));
        let gone = dom.insert_child(root, NodeData::new("div"));
        dom.remove(gone);
        let orphan = dom.insert_child(gone, NodeData::new("span"));
        assert!(dom.contains(orphan));
        assert_eq!(dom.parent(orphan), None);
        assert_eq!(dom.root(), Some(root));
    }

    #[test]
    fn children_list() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.children(root), &[a, b]);
        assert_eq!(dom.children(a), &[c, d]);
        assert!(dom.children(c).is_empty());
    }

    #[test]
    fn ancestors() {
        let (dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.ancestors(c), vec![a, root]);
        assert!(dom.ancestors(root).is_empty());
    }

    #[test]
    fn subtree_contains_is_inclusive() {
        let (dom, root, a, b, c, _d) = build_tree();
        assert!(dom.subtree_contains(a, a));
        assert!(dom.subtree_contains(a, c));
        assert!(dom.subtree_contains(root, c));
        assert!(!dom.subtree_contains(a, b));
        assert!(!dom.subtree_contains(c, a));
    }

    #[test]
    fn subtree_contains_missing_node() {
        let (mut dom, root, _a, b, ..) = build_tree();
        dom.remove(b);
        assert!(!dom.subtree_contains(root, b));
    }

    #[test]
    fn remove_subtree() {
        let (mut dom, root, a, b, c, d) = build_tree();
        let removed = dom.remove(a);
        assert_eq!(removed.map(|n| n.tag), Some("div".to_owned()));
        assert!(!dom.contains(c));
        assert!(!dom.contains(d));
        assert_eq!(dom.children(root), &[b]);
        assert_eq!(dom.len(), 2);
    }

    #[test]
    fn remove_root_clears_root() {
        let (mut dom, root, ..) = build_tree();
        dom.remove(root);
        assert!(dom.is_empty());
        assert_eq!(dom.root(), None);
        assert!(dom.remove(root).is_none());
    }

    #[test]
    fn walk_depth_first_is_document_order() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(dom.descendants(a), vec![c, d]);
    }

    #[test]
    fn text_content_concatenates_subtree() {
        let (dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.text_content(a), "Go now");
        assert_eq!(dom.text_content(c), "Go");
        assert_eq!(dom.text_content(root), "Go now");
    }

    #[test]
    fn set_text_content_replaces_children() {
        let (mut dom, _root, a, _b, c, d) = build_tree();
        dom.set_text_content(a, "Beta");
        assert!(dom.children(a).is_empty());
        assert!(!dom.contains(c));
        assert!(!dom.contains(d));
        assert_eq!(dom.text_content(a), "Beta");
    }

    #[test]
    fn class_and_attr_helpers_ignore_missing_nodes() {
        let (mut dom, _root, a, b, ..) = build_tree();
        dom.add_class(a, "is-expanded");
        assert!(dom.has_class(a, "is-expanded"));
        dom.remove_class(a, "is-expanded");
        assert!(!dom.has_class(a, "is-expanded"));

        dom.set_attr(a, "aria-expanded", "true");
        assert_eq!(dom.attr(a, "aria-expanded"), Some("true"));

        dom.remove(b);
        dom.add_class(b, "x");
        dom.set_attr(b, "y", "z");
        assert!(!dom.has_class(b, "x"));
        assert_eq!(dom.attr(b, "y"), None);
    }

    #[test]
    fn default_impl() {
        let dom = Dom::default();
        assert!(dom.is_empty());
        assert_eq!(dom.root(), None);
    }
}
