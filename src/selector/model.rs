//! Selector AST: SelectorComponent, CompoundSelector, Selector, SelectorList.

/// A single simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorComponent {
    /// Type selector: matches the tag name (e.g. `select`).
    Type(String),
    /// Universal selector: `*`.
    Universal,
    /// Class selector: `.classname`.
    Class(String),
    /// ID selector: `#id`.
    Id(String),
    /// Attribute selector: `[name]` (presence) or `[name="value"]` (exact).
    Attribute { name: String, value: Option<String> },
}

/// A combinator between compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
}

/// A sequence of simple selectors without combinators, e.g.
/// `li.is-selected[data-js-select-option]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub components: Vec<SelectorComponent>,
}

impl CompoundSelector {
    /// Create an empty compound selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component.
    pub fn push(&mut self, component: SelectorComponent) {
        self.components.push(component);
    }
}

/// One element in a selector chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorPart {
    Compound(CompoundSelector),
    Combinator(Combinator),
}

/// A complex selector: compound selectors joined by combinators.
///
/// `[data-js-select] > button` is parts
/// `[Compound([data-js-select]), Combinator(Child), Compound(button)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Alternating compound selectors and combinators.
    /// Always starts and ends with a `SelectorPart::Compound`.
    pub parts: Vec<SelectorPart>,
}

/// A comma-separated selector group. A node matches if any member matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: Vec<Selector>,
}

impl SelectorList {
    /// Build a list matching a single attribute by presence, e.g.
    /// `SelectorList::attribute("data-js-select")` for `[data-js-select]`.
    pub fn attribute(name: impl Into<String>) -> Self {
        let mut compound = CompoundSelector::new();
        compound.push(SelectorComponent::Attribute {
            name: name.into(),
            value: None,
        });
        Self {
            selectors: vec![Selector {
                parts: vec![SelectorPart::Compound(compound)],
            }],
        }
    }
}
