//! Focus order
//!
//! `tabindex` values.

use std::fmt;

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabIndex(pub i32);

impl TabIndex {
    /// Focusable in document order, as applied to promoted buttons
    pub const DOCUMENT_ORDER: TabIndex = TabIndex(0);
}

impl fmt::Display for TabIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
