//! Modal dialog semantics

use fos_dom::{DomTree, NodeId};

use crate::aria::{self, ARIA_LABEL, ARIA_LABELLEDBY, ARIA_MODAL, DIALOG_ROLE, ROLE};
use crate::label::labelled_by_text;
use crate::{A11yResult, expect_element};

/// Trimmed text of the first h1-h6 in `container` with non-empty text
pub fn find_headline(tree: &DomTree, container: NodeId) -> Option<String> {
    tree.descendants(container)
        .filter(|&(id, _)| tree.tag_name(id).is_some_and(aria::is_heading))
        .map(|(id, _)| tree.text_content(id).trim().to_string())
        .find(|text| !text.is_empty())
}

/// Replace `aria-labelledby` with an `aria-label` holding the referenced
/// text. Leaves the element untouched when the reference does not resolve.
pub fn normalize_labelled_by(tree: &mut DomTree, element: NodeId) -> A11yResult<()> {
    expect_element(tree, element)?;
    let Some(label) = labelled_by_text(tree, element) else {
        return Ok(());
    };

    tree.set_attribute(element, ARIA_LABEL, &label)?;
    tree.remove_attribute(element, ARIA_LABELLEDBY)?;
    tracing::debug!("Inlined aria-labelledby on {:?} as {:?}", element, label);
    Ok(())
}

/// Apply dialog role, `aria-modal` and a direct label to a modal container.
/// Labels prefer an explicit `aria-label`, then the first headline, then an
/// `aria-labelledby` reference.
pub fn set_modal_a11y_attributes(tree: &mut DomTree, element: NodeId) -> A11yResult<()> {
    expect_element(tree, element)?;

    if !tree.has_attribute(element, ROLE) {
        tree.set_attribute(element, ROLE, DIALOG_ROLE)?;
    }
    tree.set_attribute(element, ARIA_MODAL, "true")?;

    let labelled =
        tree.has_attribute(element, ARIA_LABEL) || tree.has_attribute(element, ARIA_LABELLEDBY);
    if !labelled {
        if let Some(headline) = find_headline(tree, element) {
            tracing::debug!("Labelling modal {:?} from headline {:?}", element, headline);
            tree.set_attribute(element, ARIA_LABEL, &headline)?;
            return Ok(());
        }
    }

    if tree.has_attribute(element, ARIA_LABELLEDBY) {
        normalize_labelled_by(tree, element)?;
    }
    Ok(())
}
