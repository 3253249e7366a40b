//! Structural selectors: logos tokenizer, recursive descent parser, matcher.
//!
//! Supports the subset needed to find widget markers: type, `*`, `.class`,
//! `#id`, `[attr]`, `[attr=value]`, descendant and child combinators, and
//! comma-separated groups.

pub mod matching;
pub mod model;
pub mod parser;
pub mod tokenizer;

pub use model::{Combinator, CompoundSelector, Selector, SelectorComponent, SelectorList, SelectorPart};
pub use parser::{parse_selector_list, ParseError};
