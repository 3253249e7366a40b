//! Widgets bound to document subtrees: Select, SelectCollection.

pub mod collection;
pub mod select;

pub use collection::{SelectCollection, SelectId};
pub use select::{Select, SelectAction};
