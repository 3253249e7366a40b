//! Document queries: selector-based lookups in document order, by id, by class.

use super::node::NodeId;
use super::tree::Dom;
use crate::selector::{parse_selector_list, ParseError, SelectorList};

impl Dom {
    /// First descendant of `scope` (excluding `scope`) matching `selector`,
    /// in document order.
    pub fn query_selector(&self, scope: NodeId, selector: &SelectorList) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&node| selector.matches(self, node))
    }

    /// All descendants of `scope` (excluding `scope`) matching `selector`,
    /// in document order.
    pub fn query_selector_all(&self, scope: NodeId, selector: &SelectorList) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&node| selector.matches(self, node))
            .collect()
    }

    /// All nodes under the document root (inclusive) matching `selector`.
    /// Empty when the document has no root.
    pub fn query_document(&self, selector: &SelectorList) -> Vec<NodeId> {
        match self.root() {
            Some(root) => self
                .walk_depth_first(root)
                .into_iter()
                .filter(|&node| selector.matches(self, node))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Parse `selector` and run [`query_selector_all`](Self::query_selector_all).
    pub fn select_all(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, ParseError> {
        let list = parse_selector_list(selector)?;
        Ok(self.query_selector_all(scope, &list))
    }

    /// Find the first node in document order whose `id` matches.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        let root = self.root()?;
        self.walk_depth_first(root)
            .into_iter()
            .find(|&node| self.get(node).and_then(|data| data.id.as_deref()) == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::node::{NodeData, NodeId};
    use crate::dom::tree::Dom;
    use crate::selector::{parse_selector_list, ParseError};

    /// ```text
    /// body
    /// ├── div#first[data-js-select]
    /// │   ├── li.opt   (a)
    /// │   └── li.opt   (b)
    /// └── div#second[data-js-select]
    ///     └── li.opt   (c)
    /// ```
    fn build_dom() -> (Dom, NodeId, NodeId, NodeId, [NodeId; 3]) {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let first = dom.insert_child(body, NodeData::new("div").with_id("first").with_flag("data-js-select"));
        let a = dom.insert_child(first, NodeData::new("li").with_class("opt"));
        let b = dom.insert_child(first, NodeData::new("li").with_class("opt"));
        let second = dom.insert_child(body, NodeData::new("div").with_id("second").with_flag("data-js-select"));
        let c = dom.insert_child(second, NodeData::new("li").with_class("opt"));
        (dom, body, first, second, [a, b, c])
    }

    #[test]
    fn query_selector_all_is_scoped_and_ordered() {
        let (dom, body, first, _second, [a, b, c]) = build_dom();
        let opt = parse_selector_list(".opt").unwrap();
        assert_eq!(dom.query_selector_all(first, &opt), vec![a, b]);
        assert_eq!(dom.query_selector_all(body, &opt), vec![a, b, c]);
    }

    #[test]
    fn query_selector_excludes_scope() {
        let (dom, _body, first, ..) = build_dom();
        let marker = parse_selector_list("[data-js-select]").unwrap();
        assert_eq!(dom.query_selector(first, &marker), None);
    }

    #[test]
    fn query_selector_first_match() {
        let (dom, body, _first, _second, [a, ..]) = build_dom();
        let opt = parse_selector_list("li").unwrap();
        assert_eq!(dom.query_selector(body, &opt), Some(a));
    }

    #[test]
    fn query_document_includes_root() {
        let (dom, body, first, second, _) = build_dom();
        let marker = parse_selector_list("[data-js-select]").unwrap();
        assert_eq!(dom.query_document(&marker), vec![first, second]);
        let any_body = parse_selector_list("body").unwrap();
        assert_eq!(dom.query_document(&any_body), vec![body]);
    }

    #[test]
    fn query_document_empty_dom() {
        let dom = Dom::new();
        let any = parse_selector_list("*").unwrap();
        assert!(dom.query_document(&any).is_empty());
    }

    #[test]
    fn select_all_parses() {
        let (dom, _body, _first, second, [.., c]) = build_dom();
        assert_eq!(dom.select_all(second, "li.opt").unwrap(), vec![c]);
        assert_eq!(dom.select_all(second, ""), Err(ParseError::Empty));
    }

    #[test]
    fn query_by_id_finds_first_match() {
        let (dom, _body, first, second, _) = build_dom();
        assert_eq!(dom.query_by_id("second"), Some(second));
        assert_eq!(dom.query_by_id("first"), Some(first));
        assert_eq!(dom.query_by_id("missing"), None);
    }
}
