//! SelectCollection: one [`Select`] per marked subtree in the document.

use slotmap::{new_key_type, SlotMap};

use crate::config::{Markers, SelectConfig};
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::selector::ParseError;

use super::select::Select;

new_key_type! {
    /// Handle of a select owned by a [`SelectCollection`].
    pub struct SelectId;
}

/// Independent selects in document order.
#[derive(Debug, Default)]
pub struct SelectCollection {
    selects: SlotMap<SelectId, Select>,
    order: Vec<SelectId>,
}

impl SelectCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a select to every node matching the root marker.
    ///
    /// Fails only if a configured marker does not parse. Subtrees missing
    /// parts become inert instances and do not affect the others.
    pub fn init(dom: &Dom, config: &SelectConfig) -> Result<Self, ParseError> {
        let markers = config.markers()?;
        Ok(Self::with_markers(dom, &markers, config))
    }

    /// Like [`init`](Self::init) with already compiled markers.
    pub fn with_markers(dom: &Dom, markers: &Markers, config: &SelectConfig) -> Self {
        let mut collection = Self::new();
        for root in dom.query_document(&markers.root) {
            collection.insert(Select::bind(dom, root, markers, config));
        }
        log::debug!(
            "select collection: {} found, {} active",
            collection.len(),
            collection.active_count()
        );
        collection
    }

    /// Add an instance at the end of the order.
    pub fn insert(&mut self, select: Select) -> SelectId {
        let id = self.selects.insert(select);
        self.order.push(id);
        id
    }

    /// Remove an instance, returning it.
    pub fn remove(&mut self, id: SelectId) -> Option<Select> {
        let select = self.selects.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(select)
    }

    pub fn get(&self, id: SelectId) -> Option<&Select> {
        self.selects.get(id)
    }

    pub fn get_mut(&mut self, id: SelectId) -> Option<&mut Select> {
        self.selects.get_mut(id)
    }

    /// Ids in document order.
    pub fn ids(&self) -> &[SelectId] {
        &self.order
    }

    /// Instances in document order.
    pub fn iter(&self) -> impl Iterator<Item = (SelectId, &Select)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.selects.get(id).map(|select| (id, select)))
    }

    /// The instance bound to `root`.
    pub fn find_by_root(&self, root: NodeId) -> Option<SelectId> {
        self.iter()
            .find(|(_, select)| select.root() == root)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.selects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selects.is_empty()
    }

    /// Instances that are not inert.
    pub fn active_count(&self) -> usize {
        self.selects.values().filter(|select| !select.is_inert()).count()
    }
}
