//! Accessible label resolution
//!
//! Precedence:
//! 1. non-empty `aria-label`, verbatim
//! 2. `aria-labelledby` resolving to elements in the document, their trimmed text
//! 3. the element's text, where labelled descendants contribute their own label
//!
//! Step 3 walks the subtree with an explicit work stack, so nesting depth is
//! bounded by the heap rather than the call stack. `aria-labelledby` targets
//! contribute plain text and are never resolved again, and the walk only
//! covers strict descendants of an acyclic tree, so every node is read once.

use fos_dom::{DomTree, NodeData, NodeId};

use crate::aria::{ARIA_LABEL, ARIA_LABELLEDBY};

/// Compute the accessible label of a node. The tree is never modified.
pub fn get_a11y_label(tree: &DomTree, element: NodeId) -> String {
    let Some(node) = tree.get(element) else {
        return String::new();
    };
    if let Some(text) = node.as_text() {
        return text.trim().to_string();
    }
    if !node.is_element() {
        return String::new();
    }
    if let Some(label) = direct_label(tree, element) {
        return label;
    }

    let mut text = String::new();
    collect_text(tree, element, &mut text);
    text.trim().to_string()
}

/// Steps 1 and 2
fn direct_label(tree: &DomTree, element: NodeId) -> Option<String> {
    if let Some(label) = tree.get_attribute(element, ARIA_LABEL).filter(|l| !l.is_empty()) {
        return Some(label.to_string());
    }
    labelled_by_text(tree, element)
}

enum Work {
    Visit(NodeId),
    /// Trim the text appended since `start`
    Close { start: usize },
}

/// Append the text of `parent`'s subtree, substituting labels of labelled
/// descendants. A labelled descendant without a usable label contributes its
/// own trimmed content.
fn collect_text(tree: &DomTree, parent: NodeId, out: &mut String) {
    let mut stack = Vec::new();
    push_children(tree, parent, &mut stack);

    while let Some(work) = stack.pop() {
        let id = match work {
            Work::Visit(id) => id,
            Work::Close { start } => {
                let trimmed = out[start..].trim().to_string();
                out.truncate(start);
                out.push_str(&trimmed);
                continue;
            }
        };
        let Some(node) = tree.get(id) else { continue };
        match &node.data {
            NodeData::Text(t) => out.push_str(&t.content),
            NodeData::Element(_) if carries_label(tree, id) => match direct_label(tree, id) {
                Some(label) => out.push_str(&label),
                None => {
                    stack.push(Work::Close { start: out.len() });
                    push_children(tree, id, &mut stack);
                }
            },
            NodeData::Element(_) => push_children(tree, id, &mut stack),
            _ => {}
        }
    }
}

/// Push children so the first child is popped first
fn push_children(tree: &DomTree, parent: NodeId, stack: &mut Vec<Work>) {
    let start = stack.len();
    stack.extend(tree.children(parent).map(|(child, _)| Work::Visit(child)));
    stack[start..].reverse();
}

fn carries_label(tree: &DomTree, element: NodeId) -> bool {
    tree.has_attribute(element, ARIA_LABEL) || tree.has_attribute(element, ARIA_LABELLEDBY)
}

/// Text of the elements referenced by `aria-labelledby`, or `None` when the
/// attribute is missing or references nothing in the document.
pub(crate) fn labelled_by_text(tree: &DomTree, element: NodeId) -> Option<String> {
    let refs = tree.get_attribute(element, ARIA_LABELLEDBY)?;
    let texts: Vec<String> = refs
        .split_ascii_whitespace()
        .filter_map(|id| tree.get_element_by_id(id))
        .map(|target| tree.text_content(target).trim().to_string())
        .collect();

    if texts.is_empty() {
        tracing::trace!("aria-labelledby {:?} on {:?} does not resolve", refs, element);
        return None;
    }
    Some(
        texts
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    )
}
