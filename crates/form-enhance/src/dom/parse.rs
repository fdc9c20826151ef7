//! HTML → [`Document`] import via `scraper` (html5ever).

use super::{Document, Element, Matcher, NodeId, NodeKind};
use scraper::{ElementRef, Html};

/// A source node waiting to be copied under an already imported parent.
enum Pending<'a> {
    Element(NodeId, ElementRef<'a>),
    Text(NodeId, &'a str),
}

pub(super) fn parse_document(html: &str) -> Document {
    let parsed = Html::parse_document(html);
    let mut doc = Document::new();
    let mut controls = Vec::new();

    // Explicit stack: nesting depth is bounded only by the input.
    let mut stack = vec![Pending::Element(doc.root(), parsed.root_element())];
    while let Some(next) = stack.pop() {
        match next {
            Pending::Text(parent, text) => {
                doc.push(parent, NodeKind::Text(text.to_string()));
            }
            Pending::Element(parent, source) => {
                let id = import_element(&mut doc, parent, source);
                if matches!(source.value().name(), "textarea" | "select") {
                    controls.push(id);
                }
                let children: Vec<Pending<'_>> = source
                    .children()
                    .filter_map(|child| match child.value() {
                        scraper::Node::Element(_) => {
                            ElementRef::wrap(child).map(|el| Pending::Element(id, el))
                        }
                        scraper::Node::Text(text) => Some(Pending::Text(id, &**text)),
                        _ => None,
                    })
                    .collect();
                stack.extend(children.into_iter().rev());
            }
        }
    }

    for id in controls {
        seed_control_value(&mut doc, id);
    }
    doc
}

fn import_element(doc: &mut Document, parent: NodeId, source: ElementRef<'_>) -> NodeId {
    let el = source.value();
    // html5ever hands attributes over in hash order; sort for stable output.
    let mut attrs: Vec<(String, String)> = el
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    attrs.sort_by(|a, b| a.0.cmp(&b.0));
    doc.push(parent, NodeKind::Element(Element::new(el.name(), attrs)))
}

/// `textarea` and `select` carry their initial value in their children.
fn seed_control_value(doc: &mut Document, id: NodeId) {
    let tag = match doc.element(id) {
        Some(el) => el.tag().to_string(),
        None => return,
    };
    let value = match tag.as_str() {
        "textarea" => doc.text_content(id),
        "select" => {
            let options = doc.find_all(id, &Matcher::Tag("option".into()));
            let chosen = options
                .iter()
                .copied()
                .find(|o| doc.element(*o).is_some_and(|el| el.has_attr("selected")))
                .or_else(|| options.first().copied());
            match chosen {
                Some(option) => match doc.element(option).and_then(|el| el.attr("value")) {
                    Some(v) => v.to_string(),
                    None => doc.text_content(option).trim().to_string(),
                },
                None => String::new(),
            }
        }
        _ => return,
    };
    if let Some(el) = doc.element_mut(id) {
        el.set_value(&value);
    }
}
