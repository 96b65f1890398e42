//! The rendered element tree.
//!
//! Components compile their props into an [`Element`]: one container tag with
//! the filtered attributes, the computed declaration text and the child
//! nodes. The tree is plain data, rebuilt on every render; [`Element::to_html`]
//! serializes it with the computed CSS inlined as the `style` attribute.

use indexmap::IndexMap;

/// Attribute map in insertion order.
pub type Attributes = IndexMap<String, String>;

// =============================================================================
// Node
// =============================================================================

/// A child of an element: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// =============================================================================
// Element
// =============================================================================

/// A container element with computed styling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Tag name (the containers all render `div`).
    pub tag: String,
    /// Forwarded attributes, in insertion order.
    pub attributes: Attributes,
    /// Computed CSS declaration text, emitted as the `style` attribute.
    pub style: String,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Append declaration text to the element's style. Later declarations
    /// win when the same property appears twice, which is exactly how the
    /// override layers (component CSS, caller CSS, stack positioning) land.
    pub fn append_style(&mut self, css: &str) {
        if css.is_empty() {
            return;
        }
        if !self.style.is_empty() {
            self.style.push('\n');
        }
        self.style.push_str(css);
    }

    /// Append a child node.
    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Serialize the tree to HTML with inline styles.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.style.is_empty() {
            out.push_str(" style=\"");
            out.push_str(&escape_attr(&self.style));
            out.push('"');
        }
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

// =============================================================================
// Escaping
// =============================================================================

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// =============================================================================
// Tests
// =============================================================================
