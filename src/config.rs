//! Widget configuration: structural markers, state classes, panel height.
//!
//! [`SelectConfig`] holds marker selectors as strings so it stays cheap to
//! build and clone; [`SelectConfig::markers`] compiles them once into
//! [`Markers`].

use crate::selector::{parse_selector_list, ParseError, SelectorList};

// ---------------------------------------------------------------------------
// MarkerConfig / Markers
// ---------------------------------------------------------------------------

/// Selector strings locating the parts of a select subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerConfig {
    /// Container of one widget, searched document-wide.
    pub root: String,
    /// The native select control, first match inside the root.
    pub native: String,
    /// The clickable trigger, first match inside the root.
    pub trigger: String,
    /// The dropdown panel, first match inside the root.
    pub panel: String,
    /// Option elements, all matches inside the root.
    pub option: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            root: "[data-js-select]".into(),
            native: "[data-js-select-original-controls]".into(),
            trigger: "[data-js-select-button]".into(),
            panel: "[data-js-select-dropdown]".into(),
            option: "[data-js-select-option]".into(),
        }
    }
}

/// Compiled marker selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub root: SelectorList,
    pub native: SelectorList,
    pub trigger: SelectorList,
    pub panel: SelectorList,
    pub option: SelectorList,
}

impl MarkerConfig {
    /// Parse every marker.
    pub fn compile(&self) -> Result<Markers, ParseError> {
        Ok(Markers {
            root: parse_selector_list(&self.root)?,
            native: parse_selector_list(&self.native)?,
            trigger: parse_selector_list(&self.trigger)?,
            panel: parse_selector_list(&self.panel)?,
            option: parse_selector_list(&self.option)?,
        })
    }
}

// ---------------------------------------------------------------------------
// StateClasses
// ---------------------------------------------------------------------------

/// Class names reflecting widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateClasses {
    /// On trigger and panel while open.
    pub expanded: String,
    /// On the committed option.
    pub selected: String,
    /// On the highlighted option.
    pub current: String,
}

impl Default for StateClasses {
    fn default() -> Self {
        Self {
            expanded: "is-expanded".into(),
            selected: "is-selected".into(),
            current: "is-current".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// SelectConfig
// ---------------------------------------------------------------------------

/// Configuration shared by every select on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    pub markers: MarkerConfig,
    pub classes: StateClasses,
    /// Option rows visible in the panel at once; drives scroll-into-view.
    pub visible_rows: usize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            markers: MarkerConfig::default(),
            classes: StateClasses::default(),
            visible_rows: 6,
        }
    }
}

impl SelectConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root marker (builder).
    pub fn with_root_marker(mut self, selector: impl Into<String>) -> Self {
        self.markers.root = selector.into();
        self
    }

    /// Replace all markers (builder).
    pub fn with_markers(mut self, markers: MarkerConfig) -> Self {
        self.markers = markers;
        self
    }

    /// Replace the state class names (builder).
    pub fn with_classes(mut self, classes: StateClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Set the panel height in rows (builder). Zero disables scrolling.
    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows;
        self
    }

    /// Compile the marker selectors.
    pub fn markers(&self) -> Result<Markers, ParseError> {
        self.markers.compile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SelectConfig::new();
        assert_eq!(config.markers.root, "[data-js-select]");
        assert_eq!(config.markers.option, "[data-js-select-option]");
        assert_eq!(config.classes.expanded, "is-expanded");
        assert_eq!(config.classes.selected, "is-selected");
        assert_eq!(config.classes.current, "is-current");
        assert_eq!(config.visible_rows, 6);
    }

    #[test]
    fn builder() {
        let config = SelectConfig::new()
            .with_root_marker(".dropdown")
            .with_classes(StateClasses {
                expanded: "open".into(),
                selected: "picked".into(),
                current: "hover".into(),
            })
            .with_visible_rows(3);
        assert_eq!(config.markers.root, ".dropdown");
        assert_eq!(config.classes.current, "hover");
        assert_eq!(config.visible_rows, 3);
    }

    #[test]
    fn default_markers_compile() {
        let markers = SelectConfig::new().markers().unwrap();
        assert_eq!(markers.root, SelectorList::attribute("data-js-select"));
        assert_eq!(markers.trigger, SelectorList::attribute("data-js-select-button"));
    }

    #[test]
    fn invalid_marker_is_an_error() {
        let config = SelectConfig::new().with_root_marker("[data-js-select");
        assert!(config.markers().is_err());

        let config = SelectConfig::new().with_markers(MarkerConfig {
            option: String::new(),
            ..MarkerConfig::default()
        });
        assert_eq!(config.markers(), Err(ParseError::Empty));
    }
}
