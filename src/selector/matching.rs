//! Selector matching against document nodes.

use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Dom;
use crate::selector::model::{
    Combinator, CompoundSelector, Selector, SelectorComponent, SelectorList, SelectorPart,
};

impl SelectorList {
    /// Whether any selector in the group matches `node`.
    pub fn matches(&self, dom: &Dom, node: NodeId) -> bool {
        self.selectors.iter().any(|sel| sel.matches(dom, node))
    }
}

impl Selector {
    /// Whether this selector matches `node`.
    ///
    /// Walks the parts from right to left, matching compound selectors and
    /// navigating the tree via combinators. Ancestors outside any query scope
    /// still take part, as with the DOM's `querySelectorAll`.
    pub fn matches(&self, dom: &Dom, node: NodeId) -> bool {
        let parts = &self.parts;
        let Some(SelectorPart::Compound(last)) = parts.last() else {
            return false;
        };
        if !dom.get(node).is_some_and(|data| matches_compound(last, data)) {
            return false;
        }

        let mut current = node;
        let mut idx = parts.len() - 1;

        while idx > 0 {
            let (SelectorPart::Combinator(combinator), Some(SelectorPart::Compound(compound))) =
                (&parts[idx - 1], idx.checked_sub(2).and_then(|i| parts.get(i)))
            else {
                return false;
            };
            idx -= 2;

            let next = match combinator {
                Combinator::Child => dom
                    .parent(current)
                    .filter(|&p| dom.get(p).is_some_and(|data| matches_compound(compound, data))),
                Combinator::Descendant => dom
                    .ancestors(current)
                    .into_iter()
                    .find(|&a| dom.get(a).is_some_and(|data| matches_compound(compound, data))),
            };
            match next {
                Some(found) => current = found,
                None => return false,
            }
        }

        true
    }
}

/// Check whether a compound selector matches a single node's data.
fn matches_compound(compound: &CompoundSelector, node: &NodeData) -> bool {
    compound.components.iter().all(|component| match component {
        SelectorComponent::Type(name) => node.tag.eq_ignore_ascii_case(name),
        SelectorComponent::Class(name) => node.has_class(name),
        SelectorComponent::Id(name) => node.id.as_deref() == Some(name.as_str()),
        SelectorComponent::Universal => true,
        SelectorComponent::Attribute { name, value } => match value {
            Some(expected) => node.attr(name) == Some(expected.as_str()),
            None => node.has_attr(name),
        },
    })
}
