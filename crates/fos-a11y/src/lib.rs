//! fOS Accessibility
//!
//! Accessibility helpers for fOS DOM trees.
//!
//! Features:
//! - Reduced-motion preference detection
//! - Stable element identifiers
//! - Accessible label resolution (aria-label, aria-labelledby, content)
//! - Keyboard-activatable buttons from arbitrary elements
//! - Modal dialog semantics

pub mod aria;
mod button;
mod config;
mod focus;
mod ids;
mod label;
mod modal;
mod preferences;

pub use button::{
    ButtonConfig, ENTER_KEY_CODE, SPACE_KEY_CODE, create_a11y_button, is_activation_key,
};
pub use config::{A11yConfig, prefers_reduced_motion};
pub use focus::TabIndex;
pub use ids::{SequentialIds, UniqueIdSource, add_id_to_element, add_id_to_element_with};
pub use label::get_a11y_label;
pub use modal::{find_headline, normalize_labelled_by, set_modal_a11y_attributes};
pub use preferences::{ColorScheme, ContrastPreference, MediaPreferences};

use fos_dom::{DomError, DomTree, NodeId};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("Invalid ARIA role: {0:?}")]
    InvalidRole(String),

    #[error("Id source produced no unused identifier after {0} attempts")]
    IdSourceExhausted(usize),
}

pub type A11yResult<T> = Result<T, A11yError>;

/// Fail unless `node` is an element of `tree`
pub(crate) fn expect_element(tree: &DomTree, node: NodeId) -> A11yResult<()> {
    match tree.get(node) {
        Some(n) if n.is_element() => Ok(()),
        Some(_) => Err(DomError::NotAnElement(node).into()),
        None => Err(DomError::NotFound(node).into()),
    }
}
