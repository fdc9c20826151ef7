//! Predicate-based tree search.

use super::{Document, NodeId};

/// A predicate over elements. Text and document nodes never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Tag name, compared case-insensitively.
    Tag(String),
    /// Class present in the `class` attribute.
    Class(String),
    /// Attribute present, whatever its value.
    Attr(String),
    /// Attribute present with exactly this value.
    AttrValue(String, String),
    /// Every inner matcher holds.
    All(Vec<Matcher>),
}

impl Document {
    pub fn matches(&self, id: NodeId, matcher: &Matcher) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        match matcher {
            Matcher::Tag(tag) => el.tag().eq_ignore_ascii_case(tag),
            Matcher::Class(class) => el.has_class(class),
            Matcher::Attr(name) => el.has_attr(name),
            Matcher::AttrValue(name, value) => el.attr(name) == Some(value.as_str()),
            Matcher::All(all) => all.iter().all(|m| self.matches(id, m)),
        }
    }

    /// Matching descendants of `root` in document order. `root` itself is excluded.
    pub fn find_all(&self, root: NodeId, matcher: &Matcher) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = match self.node(root) {
            Ok(node) => node.children().iter().rev().copied().collect(),
            Err(_) => return found,
        };
        while let Some(id) = stack.pop() {
            if self.matches(id, matcher) {
                found.push(id);
            }
            if let Ok(node) = self.node(id) {
                stack.extend(node.children().iter().rev());
            }
        }
        found
    }

    /// First matching descendant of `root` in document order.
    pub fn find_first(&self, root: NodeId, matcher: &Matcher) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self
            .node(root)
            .ok()?
            .children()
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(id) = stack.pop() {
            if self.matches(id, matcher) {
                return Some(id);
            }
            if let Ok(node) = self.node(id) {
                stack.extend(node.children().iter().rev());
            }
        }
        None
    }

    /// Nearest inclusive ancestor of `id` that matches.
    pub fn closest(&self, id: NodeId, matcher: &Matcher) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if self.matches(current, matcher) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }
}
