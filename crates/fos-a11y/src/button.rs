//! Keyboard-activatable buttons
//!
//! Promotes arbitrary elements to buttons: role, focusability and
//! Enter/Space activation.

use fos_dom::{DomTree, Event, EventType, NodeId};
use serde::{Deserialize, Serialize};

use crate::aria::{BUTTON_ROLE, ROLE, TABINDEX};
use crate::{A11yError, A11yResult, TabIndex, expect_element};

/// Legacy `keyCode` of Enter
pub const ENTER_KEY_CODE: u32 = 13;
/// Legacy `keyCode` of Space
pub const SPACE_KEY_CODE: u32 = 32;

/// Options for [`create_a11y_button`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Role applied when the element has none
    pub role: String,
}

impl ButtonConfig {
    pub fn with_role(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::with_role(BUTTON_ROLE)
    }
}

/// Enter or Space, by key name or legacy key code
pub fn is_activation_key(event: &Event) -> bool {
    matches!(event.key.as_deref(), Some("Enter" | " " | "Spacebar"))
        || event.key_code == ENTER_KEY_CODE
        || event.key_code == SPACE_KEY_CODE
}

/// Make `element` behave like a button. Native `<button>` elements are left
/// alone; existing roles are never overridden.
pub fn create_a11y_button(
    tree: &mut DomTree,
    element: NodeId,
    config: &ButtonConfig,
) -> A11yResult<()> {
    expect_element(tree, element)?;
    if tree.is_html_element(element) && tree.tag_name(element) == Some("button") {
        tracing::trace!("{:?} is a native button", element);
        return Ok(());
    }
    if config.role.trim().is_empty() {
        return Err(A11yError::InvalidRole(config.role.clone()));
    }

    if !tree.has_attribute(element, ROLE) {
        tree.set_attribute(element, ROLE, &config.role)?;
    }
    tree.set_attribute(element, TABINDEX, &TabIndex::DOCUMENT_ORDER.to_string())?;

    tree.add_event_listener(element, EventType::KeyDown, move |tree, event| {
        if !is_activation_key(event) {
            return;
        }
        // Space would otherwise scroll the page
        event.prevent_default();
        activate(tree, element);
    });

    tracing::debug!("Promoted {:?} to an accessible button", element);
    Ok(())
}

fn activate(tree: &mut DomTree, element: NodeId) {
    if tree.supports_native_click(element) {
        tree.click(element);
    } else {
        tracing::trace!("{:?} has no native click, dispatching synthetic event", element);
        tree.dispatch_event(element, Event::new(EventType::Click).with_bubbles(true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        let key = |k: Option<&str>, code| Event::keyboard(EventType::KeyDown, k, code);

        assert!(is_activation_key(&key(Some("Enter"), 0)));
        assert!(is_activation_key(&key(Some(" "), 0)));
        assert!(is_activation_key(&key(Some("Spacebar"), 0)));
        assert!(is_activation_key(&key(None, ENTER_KEY_CODE)));
        assert!(is_activation_key(&key(None, SPACE_KEY_CODE)));
        assert!(!is_activation_key(&key(Some("Escape"), 27)));
        assert!(!is_activation_key(&key(Some("a"), 0)));
    }

    #[test]
    fn test_empty_role_rejected() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");

        let err = create_a11y_button(&mut tree, div, &ButtonConfig::with_role("  ")).unwrap_err();
        assert!(matches!(err, A11yError::InvalidRole(_)));
        assert_eq!(tree.listener_count(div), 0);
    }

    #[test]
    fn test_native_button_untouched() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");

        create_a11y_button(&mut tree, button, &ButtonConfig::default()).unwrap();
        assert_eq!(tree.get_attribute(button, "role"), None);
        assert_eq!(tree.get_attribute(button, "tabindex"), None);
        assert_eq!(tree.listener_count(button), 0);
    }

    #[test]
    fn test_native_button_ignores_empty_role() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");

        create_a11y_button(&mut tree, button, &ButtonConfig::with_role("")).unwrap();
        assert_eq!(tree.get_attribute(button, "role"), None);
        assert_eq!(tree.listener_count(button), 0);
    }

    #[test]
    fn test_config_deserializes_with_default_role() {
        let config: ButtonConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ButtonConfig::default());

        let config: ButtonConfig = serde_json::from_str(r#"{"role": "menuitem"}"#).unwrap();
        assert_eq!(config.role, "menuitem");
    }
}
