//! The attributed tree a decompiled font is represented as.
//!
//! Elements own their children. There are no parent pointers; code that needs
//! to know an element's parent is handed the parent's name while walking down.
use indexmap::IndexMap;

/// Attribute names to values, in document order. Equality ignores order.
pub type Attributes = IndexMap<String, String>;

/// A node in the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Node {
        Node::Element(e)
    }
}

/// A named node with attributes and children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper to add an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder-style helper to append a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }

    /// Child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// The XML declaration at the top of a document.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

/// A whole document: one top-level element plus any surrounding text and
/// comments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tree {
    pub declaration: Option<Declaration>,
    pub nodes: Vec<Node>,
}

impl Tree {
    pub fn new(root: Element) -> Self {
        Tree {
            declaration: None,
            nodes: vec![Node::Element(root)],
        }
    }

    /// The first top-level element.
    pub fn root(&self) -> Option<&Element> {
        self.nodes.iter().find_map(Node::as_element)
    }
}

/// Anything that has an ordered list of child nodes.
pub trait Container {
    fn children(&self) -> &[Node];
}

impl Container for Tree {
    fn children(&self) -> &[Node] {
        &self.nodes
    }
}

impl Container for Element {
    fn children(&self) -> &[Node] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order_irrelevant() {
        let a = Element::new("mtx")
            .with_attribute("name", "A")
            .with_attribute("width", "500");
        let b = Element::new("mtx")
            .with_attribute("width", "500")
            .with_attribute("name", "A");
        assert_eq!(a, b);
        assert_eq!(a.attributes.keys().next().map(|k| k.as_str()), Some("name"));
    }

    #[test]
    fn test_elements_skips_other_nodes() {
        let e = Element::new("hmtx")
            .with_child(Node::Text("\n  ".to_string()))
            .with_child(Node::Comment(" glyph A ".to_string()))
            .with_child(Element::new("mtx"));
        let names: Vec<&str> = e.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["mtx"]);
    }

    #[test]
    fn test_root_skips_leading_comment() {
        let tree = Tree {
            declaration: None,
            nodes: vec![
                Node::Comment("generated".to_string()),
                Node::Element(Element::new("ttFont")),
            ],
        };
        assert_eq!(tree.root().map(|e| e.name.as_str()), Some("ttFont"));
    }
}
