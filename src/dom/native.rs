//! Native select control model.
//!
//! A native control is a `select` node; its options are the descendant
//! `option` nodes in document order (through `optgroup`s). The selected
//! position is the first option carrying the `selected` attribute, falling back
//! to the first option, as a single-choice `<select>` does. Selecting past the
//! last option clears the selection (`selectedIndex == -1`); the control keeps
//! that state, marked by [`NO_SELECTION_ATTR`], until an option is selected.

use super::node::NodeId;
use super::tree::Dom;

/// Attribute marking the selected native option.
pub const SELECTED_ATTR: &str = "selected";

/// Attribute on the control recording that nothing is selected.
pub const NO_SELECTION_ATTR: &str = "data-no-selection";

impl Dom {
    /// The `option` descendants of a native control, in document order.
    pub fn native_options(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants(select)
            .into_iter()
            .filter(|&node| self.get(node).is_some_and(|data| data.tag.eq_ignore_ascii_case("option")))
            .collect()
    }

    /// The native control's selected position.
    ///
    /// `None` when it has no options or its selection was cleared.
    pub fn selected_index(&self, select: NodeId) -> Option<usize> {
        let options = self.native_options(select);
        if options.is_empty() {
            return None;
        }
        let marked = options
            .iter()
            .position(|&opt| self.get(opt).is_some_and(|data| data.has_attr(SELECTED_ATTR)));
        match marked {
            Some(index) => Some(index),
            None if self.get(select).is_some_and(|data| data.has_attr(NO_SELECTION_ATTR)) => None,
            None => Some(0),
        }
    }

    /// Move the native selection to `index`.
    ///
    /// An out-of-range `index` clears the selection instead and returns
    /// `false`.
    pub fn set_selected_index(&mut self, select: NodeId, index: usize) -> bool {
        let options = self.native_options(select);
        let in_range = index < options.len();
        if let Some(data) = self.get_mut(select) {
            if in_range {
                data.remove_attr(NO_SELECTION_ATTR);
            } else {
                data.set_attr(NO_SELECTION_ATTR, "");
            }
        }
        for (i, &opt) in options.iter().enumerate() {
            if let Some(data) = self.get_mut(opt) {
                if i == index {
                    data.set_attr(SELECTED_ATTR, "");
                } else {
                    data.remove_attr(SELECTED_ATTR);
                }
            }
        }
        in_range
    }

    /// The selected option's value: its `value` attribute, else its trimmed text.
    pub fn native_value(&self, select: NodeId) -> Option<String> {
        let index = self.selected_index(select)?;
        let option = *self.native_options(select).get(index)?;
        match self.attr(option, "value") {
            Some(value) => Some(value.to_owned()),
            None => Some(self.text_content(option).trim().to_owned()),
        }
    }
}
