//! Markup serialization for reporting enhanced pages.

use super::{Document, Element, NodeId, NodeKind};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Document {
    /// Serialize `id` and its subtree back to HTML.
    ///
    /// Form-control values typed after load are written into the `value`
    /// attribute of `input` elements so the output reflects what the user sees.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![Emit::Node(id)];
        while let Some(next) = stack.pop() {
            let id = match next {
                Emit::Node(id) => id,
                Emit::Close(tag) => {
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                    continue;
                }
            };
            let Ok(node) = self.node(id) else {
                continue;
            };
            match &node.kind {
                NodeKind::Document => {
                    stack.extend(node.children.iter().rev().map(|c| Emit::Node(*c)));
                }
                NodeKind::Text(text) => out.push_str(&escape(text, false)),
                NodeKind::Element(el) => {
                    write_open_tag(&mut out, el);
                    if VOID_ELEMENTS.contains(&el.tag()) {
                        continue;
                    }
                    stack.push(Emit::Close(el.tag()));
                    stack.extend(node.children.iter().rev().map(|c| Emit::Node(*c)));
                }
            }
        }
        out
    }
}

/// Serializer work item: a node still to write, or a tag still to close.
enum Emit<'a> {
    Node(NodeId),
    Close(&'a str),
}

fn write_open_tag(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.tag());
    let markup_value = el.attr("value").unwrap_or(el.default_value());
    let live_value = el.tag() == "input" && markup_value != el.value();
    for (name, value) in el.attrs() {
        if live_value && name == "value" {
            continue;
        }
        write_attr(out, name, value);
    }
    if live_value && !el.value().is_empty() {
        write_attr(out, "value", el.value());
    }
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        out.push_str(&escape(value, true));
        out.push('"');
    }
}

fn escape(raw: &str, in_attr: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !in_attr => out.push_str("&lt;"),
            '>' if !in_attr => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_html_round_trips_simple_markup() {
        let doc = Document::parse(
            r#"<div class="mb-3"><label for="u">User &amp; name</label><input id="u" required></div>"#,
        );
        let div = doc
            .find_first(doc.root(), &crate::dom::Matcher::Tag("div".into()))
            .unwrap();
        assert_eq!(
            doc.outer_html(div),
            r#"<div class="mb-3"><label for="u">User &amp; name</label><input id="u" required></div>"#
        );
    }

    #[test]
    fn test_outer_html_reflects_typed_value() {
        let mut doc = Document::parse(r#"<input id="u" value="old" name="user">"#);
        let input = doc.by_id("u").unwrap();
        doc.element_mut(input).unwrap().set_value("new \"one\"");
        assert_eq!(
            doc.outer_html(input),
            r#"<input id="u" name="user" value="new &quot;one&quot;">"#
        );
    }

    #[test]
    fn test_outer_html_keeps_default_checkbox_value_implicit() {
        let doc = Document::parse(r#"<input id="terms" type="checkbox" required>"#);
        let input = doc.by_id("terms").unwrap();
        assert_eq!(
            doc.outer_html(input),
            r#"<input id="terms" required type="checkbox">"#
        );
    }
}
