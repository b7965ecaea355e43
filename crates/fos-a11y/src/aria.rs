//! ARIA attribute names
//!
//! Attribute and tag names the helpers read and write.

pub const ID: &str = "id";
pub const ROLE: &str = "role";
pub const TABINDEX: &str = "tabindex";
pub const ARIA_LABEL: &str = "aria-label";
pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
pub const ARIA_MODAL: &str = "aria-modal";

/// Role applied to modals without one
pub const DIALOG_ROLE: &str = "dialog";

/// Default role for promoted buttons
pub const BUTTON_ROLE: &str = "button";

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Check if a tag name is a heading (h1-h6)
pub fn is_heading(tag: &str) -> bool {
    HEADING_TAGS.iter().any(|h| h.eq_ignore_ascii_case(tag))
}
