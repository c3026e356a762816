//! Output tree produced by building views.
//!
//! A [`Node`] is what the renderer consumes. Nothing in this module knows
//! about views; the tree is plain data with insertion-ordered attributes and
//! children.

use crate::Stem;

/// A single `key="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
pub struct Attribute {
    pub key: Stem,
    pub value: Stem,
}

impl Attribute {
    pub fn new(key: impl Into<Stem>, value: impl Into<Stem>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Built content - either an element or a text leaf.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
#[repr(u8)]
pub enum Node {
    /// An element node
    Element(Element),
    /// A text node, always a leaf
    Text(Stem),
}

impl Node {
    pub fn text(text: impl Into<Stem>) -> Self {
        Node::Text(text.into())
    }

    /// Returns true if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Get as text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// Get text content of this node and all descendants.
    pub fn text_content(&self) -> Stem {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(e) => e.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with ordered attributes and children.
///
/// Attributes are a list rather than a map: setting the same key twice keeps
/// both entries, in the order they were set.
#[derive(Debug, Clone, Default, PartialEq, Eq, facet::Facet)]
pub struct Element {
    pub tag: Stem,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(tag: impl Into<Stem>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// First value set for `key`, if any.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    /// Append an attribute after every existing one.
    pub fn push_attr(&mut self, key: impl Into<Stem>, value: impl Into<Stem>) {
        self.attrs.push(Attribute::new(key, value));
    }

    /// Add a child node.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Add a text child.
    pub fn push_text(&mut self, text: impl Into<Stem>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Add an element child.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Builder-style [`Element::push_child`].
    pub fn with_child(mut self, child: Node) -> Self {
        self.push_child(child);
        self
    }

    /// Get text content of this element and all descendants.
    pub fn text_content(&self) -> Stem {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.into()
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}
