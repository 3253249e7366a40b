//! Fixture builders for marked select subtrees.

use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Dom;

/// Node ids of a subtree built by [`build_select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFixture {
    pub root: NodeId,
    pub native: NodeId,
    pub native_options: Vec<NodeId>,
    pub trigger: NodeId,
    pub panel: NodeId,
    pub options: Vec<NodeId>,
}

/// A fresh tree holding a single `<body>`.
pub fn document() -> (Dom, NodeId) {
    let mut dom = Dom::new();
    let body = dom.insert(NodeData::new("body"));
    (dom, body)
}

/// Append a complete marked select to `parent`.
///
/// ```text
/// div[data-js-select]
/// ├── select[data-js-select-original-controls]
/// │   └── option[value] × labels
/// ├── button[data-js-select-button]       label of `selected`
/// └── ul[data-js-select-dropdown]
///     └── li[data-js-select-option] × labels
/// ```
///
/// `selected` marks the native option and the custom option (with
/// `is-selected`) and labels the trigger. Native option values are the
/// lowercased labels. Trigger and custom options are focusable.
pub fn build_select(
    dom: &mut Dom,
    parent: NodeId,
    labels: &[&str],
    selected: Option<usize>,
) -> SelectFixture {
    let root = dom.insert_child(
        parent,
        NodeData::new("div").with_class("select").with_flag("data-js-select"),
    );

    let native = dom.insert_child(
        root,
        NodeData::new("select").with_flag("data-js-select-original-controls"),
    );
    let native_options = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut option = NodeData::new("option")
                .with_attr("value", label.to_lowercase())
                .with_text(*label);
            if selected == Some(i) {
                option = option.with_flag("selected");
            }
            dom.insert_child(native, option)
        })
        .collect();

    let label = selected
        .and_then(|i| labels.get(i))
        .copied()
        .unwrap_or_default();
    let trigger = dom.insert_child(
        root,
        NodeData::new("button")
            .with_flag("data-js-select-button")
            .with_text(label)
            .focusable(true),
    );

    let panel = dom.insert_child(root, NodeData::new("ul").with_flag("data-js-select-dropdown"));
    let options = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut option = NodeData::new("li")
                .with_flag("data-js-select-option")
                .with_text(*label)
                .focusable(true);
            if selected == Some(i) {
                option = option.with_class("is-selected");
            }
            dom.insert_child(panel, option)
        })
        .collect();

    SelectFixture {
        root,
        native,
        native_options,
        trigger,
        panel,
        options,
    }
}
