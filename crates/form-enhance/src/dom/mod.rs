//! Typed, arena-allocated DOM.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`]. The tree is
//! built once from HTML (see [`parse`]) and afterwards only attributes and
//! form-control values change; nodes are never inserted or removed.

mod parse;
mod query;
mod serialize;

pub use query::Matcher;

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node holds.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }
}

/// An element with its attributes in source order.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    /// Live value of a form control; starts from the markup and follows user edits.
    value: String,
}

impl Element {
    pub(crate) fn new(tag: &str, attrs: Vec<(String, String)>) -> Self {
        let mut el = Self {
            tag: tag.to_ascii_lowercase(),
            attrs,
            value: String::new(),
        };
        el.value = match el.attr("value") {
            Some(v) => v.to_string(),
            None => el.default_value().to_string(),
        };
        el
    }

    /// Value a control reports when the markup gives none: checkboxes and
    /// radios submit `on`.
    pub fn default_value(&self) -> &'static str {
        if self.tag == "input" && matches!(self.input_type().as_str(), "checkbox" | "radio") {
            "on"
        } else {
            ""
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let mut list: Vec<&str> = self.classes().collect();
        list.push(class);
        let joined = list.join(" ");
        self.set_attr("class", &joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let joined = self
            .classes()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", &joined);
    }

    /// Add the class when `force` is true, remove it otherwise.
    pub fn toggle_class(&mut self, class: &str, force: bool) {
        if force {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// The `type` of an input, lower-cased, defaulting to `text`.
    pub fn input_type(&self) -> String {
        self.attr("type")
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "text".to_string())
    }

    pub fn set_input_type(&mut self, input_type: &str) {
        self.set_attr("type", input_type);
    }
}

/// A parsed HTML document.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Document,
            }],
            root: NodeId(0),
        }
    }

    /// Parse an HTML document. Malformed markup is recovered the way browsers do.
    pub fn parse(html: &str) -> Self {
        parse::parse_document(html)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(Error::UnknownNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.nodes.get(id.0).map(|n| &n.kind) {
            Some(NodeKind::Element(el)) => Some(el),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(id.0).map(|n| &mut n.kind) {
            Some(NodeKind::Element(el)) => Some(el),
            _ => None,
        }
    }

    /// Like [`element`](Self::element) but reports why the lookup failed.
    pub fn try_element(&self, id: NodeId) -> Result<&Element> {
        self.node(id)?;
        self.element(id).ok_or(Error::NotAnElement(id))
    }

    pub fn try_element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        self.node(id)?;
        self.element_mut(id).ok_or(Error::NotAnElement(id))
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current.0) else {
                continue;
            };
            match &node.kind {
                NodeKind::Text(text) => out.push_str(text),
                _ => stack.extend(node.children.iter().rev().copied()),
            }
        }
        out
    }

    /// First element whose `id` attribute equals `id`.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.find_first(self.root, &Matcher::AttrValue("id".into(), id.into()))
    }

    pub fn require_id(&self, id: &str) -> Result<NodeId> {
        self.by_id(id).ok_or_else(|| Error::MissingId(id.to_string()))
    }

    /// Short human label for a node: `tag#id`, `tag[name=..]` or just the tag.
    pub fn describe(&self, id: NodeId) -> String {
        match self.nodes.get(id.0).map(|n| &n.kind) {
            Some(NodeKind::Element(el)) => {
                if let Some(dom_id) = el.attr("id") {
                    format!("{}#{dom_id}", el.tag())
                } else if let Some(name) = el.attr("name") {
                    format!("{}[name={name}]", el.tag())
                } else {
                    el.tag().to_string()
                }
            }
            Some(NodeKind::Text(_)) => "#text".to_string(),
            Some(NodeKind::Document) => "#document".to_string(),
            None => format!("unknown {id}"),
        }
    }

    pub(crate) fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(attrs: &[(&str, &str)]) -> Element {
        Element::new(
            "INPUT",
            attrs
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_element_value_starts_from_attribute() {
        let el = element(&[("value", "alice")]);
        assert_eq!(el.tag(), "input");
        assert_eq!(el.value(), "alice");
    }

    #[test]
    fn test_input_type_defaults_to_text() {
        assert_eq!(element(&[]).input_type(), "text");
        assert_eq!(element(&[("type", "")]).input_type(), "text");
        assert_eq!(element(&[("type", "PASSWORD")]).input_type(), "password");
    }

    #[test]
    fn test_class_helpers() {
        let mut el = element(&[("class", "form-control  mb-3")]);
        assert!(el.has_class("mb-3"));
        assert!(!el.has_class("mb"));

        el.add_class("was-validated");
        el.add_class("was-validated");
        assert_eq!(el.attr("class"), Some("form-control mb-3 was-validated"));

        el.remove_class("mb-3");
        assert_eq!(el.attr("class"), Some("form-control was-validated"));

        el.toggle_class("bi-eye", true);
        el.toggle_class("was-validated", false);
        assert_eq!(el.attr("class"), Some("form-control bi-eye"));
    }

    #[test]
    fn test_set_attr_replaces_or_appends() {
        let mut el = element(&[("type", "password")]);
        el.set_attr("type", "text");
        el.set_attr("aria-label", "Hide password");
        assert_eq!(el.attr("type"), Some("text"));
        assert_eq!(el.attrs().len(), 2);
    }

    #[test]
    fn test_initial_value_defaults() {
        assert_eq!(element(&[]).value(), "");
        assert_eq!(element(&[("value", "ada")]).value(), "ada");
        assert_eq!(element(&[("type", "checkbox")]).value(), "on");
        assert_eq!(element(&[("type", "RADIO")]).value(), "on");
        assert_eq!(element(&[("type", "checkbox"), ("value", "")]).value(), "");
        assert_eq!(Element::new("select", vec![("type".into(), "checkbox".into())]).value(), "");
    }

    #[test]
    fn test_unknown_node_lookup() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(matches!(
            doc.node(NodeId(7)),
            Err(Error::UnknownNode(NodeId(7)))
        ));
        assert!(matches!(
            doc.try_element(doc.root()),
            Err(Error::NotAnElement(_))
        ));
    }

    #[test]
    fn test_by_id_and_describe() {
        let doc = Document::parse(
            r#"<form id="login"><input name="username"><p>hi <b>there</b></p></form>"#,
        );
        let form = doc.by_id("login").unwrap();
        assert_eq!(doc.describe(form), "form#login");
        let input = doc.find_first(form, &Matcher::Tag("input".into())).unwrap();
        assert_eq!(doc.describe(input), "input[name=username]");
        assert_eq!(doc.text_content(form), "hi there");
        assert!(matches!(doc.require_id("nope"), Err(Error::MissingId(_))));
    }
}
