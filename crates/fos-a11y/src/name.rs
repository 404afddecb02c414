//! Accessible name and description computation
//!
//! A reduced text-alternative algorithm: `aria-labelledby`, then
//! `aria-label`, then content for roles that take their name from it,
//! then `title`.

use fos_dom::{Document, NodeId};

use crate::aria::AriaAttributes;

/// Accessible name of an element (empty when it has none)
pub fn accessible_name(doc: &Document, node: NodeId) -> String {
    let tree = doc.tree();
    let Some(element) = tree.element(node) else {
        return String::new();
    };
    let aria = AriaAttributes::from_element(element);

    let labelled = referenced_text(doc, aria.labelled_by());
    if !labelled.is_empty() {
        return labelled;
    }

    if let Some(label) = aria.label().map(str::trim).filter(|l| !l.is_empty()) {
        return label.to_string();
    }

    if aria.role.is_some_and(|r| r.name_from_content()) {
        let content = normalize(&tree.text_content(node));
        if !content.is_empty() {
            return content;
        }
    }

    element.get_attr("title").map(normalize).unwrap_or_default()
}

/// Accessible description of an element (`aria-describedby`)
pub fn accessible_description(doc: &Document, node: NodeId) -> String {
    let Some(element) = doc.tree().element(node) else {
        return String::new();
    };
    referenced_text(doc, AriaAttributes::from_element(element).described_by())
}

/// Space-joined text of the elements behind an ID reference list.
/// Unresolvable IDs are skipped.
fn referenced_text(doc: &Document, ids: &[String]) -> String {
    ids.iter()
        .filter_map(|id| doc.get_element_by_id(id))
        .map(|target| normalize(&doc.tree().text_content(target)))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
