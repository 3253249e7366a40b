//! Indented HTML-like serialization of a subtree, for debugging and snapshots.

use std::fmt::Write;

use super::node::{NodeData, NodeId};
use super::tree::Dom;

impl Dom {
    /// Serialize `id` and its subtree, two spaces per nesting level.
    ///
    /// Attributes appear after `id` and `class`, sorted by name; empty-valued
    /// attributes are written bare. Leaf elements stay on one line.
    pub fn to_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(id, 0, &mut out);
        out
    }

    fn write_markup(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(data) = self.get(id) else {
            return;
        };
        let indent = "  ".repeat(depth);
        let open = open_tag(data);
        let text = data.text.as_deref().map(escape_text).unwrap_or_default();
        let kids = self.children(id);

        if !out.is_empty() {
            out.push('\n');
        }
        if kids.is_empty() {
            let _ = write!(out, "{indent}{open}{text}</{}>", data.tag);
            return;
        }

        let _ = write!(out, "{indent}{open}");
        if !text.is_empty() {
            let _ = write!(out, "\n{indent}  {text}");
        }
        for &child in kids {
            self.write_markup(child, depth + 1, out);
        }
        let _ = write!(out, "\n{indent}</{}>", data.tag);
    }
}

fn open_tag(data: &NodeData) -> String {
    let mut tag = format!("<{}", data.tag);
    if let Some(id) = &data.id {
        let _ = write!(tag, " id=\"{}\"", escape_attr(id));
    }
    if !data.classes.is_empty() {
        let _ = write!(tag, " class=\"{}\"", escape_attr(&data.classes.join(" ")));
    }
    for (name, value) in &data.attributes {
        if value.is_empty() {
            let _ = write!(tag, " {name}");
        } else {
            let _ = write!(tag, " {name}=\"{}\"", escape_attr(value));
        }
    }
    tag.push('>');
    tag
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
