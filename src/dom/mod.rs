//! Document arena: slotmap-backed node tree with selector queries and a
//! native select control model.

pub mod markup;
pub mod native;
pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::Dom;
