//! Element identifiers
//!
//! Gives elements a stable `id` so other elements can reference them.

use std::sync::atomic::{AtomicU64, Ordering};

use fos_dom::{DomTree, NodeId};

use crate::aria::ID;
use crate::{A11yConfig, A11yError, A11yResult, expect_element};

/// Candidates tried before giving up on a source that only yields taken ids
const MAX_ATTEMPTS: usize = 64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Source of fresh identifier strings
pub trait UniqueIdSource {
    fn next_id(&mut self) -> String;
}

impl<F> UniqueIdSource for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Ids of the form `{prefix}-{n}`, numbered by a process-wide counter
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn from_config(config: &A11yConfig) -> Self {
        Self::new(config.id_prefix.clone())
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::from_config(A11yConfig::global())
    }
}

impl UniqueIdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

/// Ensure the element has a non-empty id, generating one if needed
pub fn add_id_to_element(tree: &mut DomTree, element: NodeId) -> A11yResult<()> {
    add_id_to_element_with(tree, element, &mut SequentialIds::default())
}

/// Like [`add_id_to_element`], drawing new ids from `source`. Candidates that
/// are empty or already used in the document are skipped.
pub fn add_id_to_element_with<S>(
    tree: &mut DomTree,
    element: NodeId,
    source: &mut S,
) -> A11yResult<()>
where
    S: UniqueIdSource + ?Sized,
{
    expect_element(tree, element)?;
    if tree.get_attribute(element, ID).is_some_and(|id| !id.is_empty()) {
        return Ok(());
    }

    for _ in 0..MAX_ATTEMPTS {
        let candidate = source.next_id();
        if candidate.is_empty() || tree.get_element_by_id(&candidate).is_some() {
            tracing::trace!("Skipping unusable id candidate {:?}", candidate);
            continue;
        }
        tracing::debug!("Assigning id {:?} to {:?}", candidate, element);
        tree.set_attribute(element, ID, &candidate)?;
        return Ok(());
    }

    Err(A11yError::IdSourceExhausted(MAX_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_distinct() {
        let mut source = SequentialIds::new("x");
        let a = source.next_id();
        let b = source.next_id();
        assert_ne!(a, b);
        assert!(a.starts_with("x-"));
    }

    #[test]
    fn test_skips_taken_candidates() {
        let mut tree = DomTree::new();
        let taken = tree.create_element("div");
        let fresh = tree.create_element("div");
        tree.append_child(tree.root(), taken).unwrap();
        tree.append_child(tree.root(), fresh).unwrap();
        tree.set_attribute(taken, "id", "dup").unwrap();

        let mut candidates = vec!["ok".to_string(), String::new(), "dup".to_string()];
        let mut source = move || candidates.pop().unwrap_or_default();

        add_id_to_element_with(&mut tree, fresh, &mut source).unwrap();
        assert_eq!(tree.get_attribute(fresh, "id"), Some("ok"));
    }

    #[test]
    fn test_exhausted_source() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let mut source = String::new;

        let err = add_id_to_element_with(&mut tree, div, &mut source).unwrap_err();
        assert!(matches!(err, A11yError::IdSourceExhausted(MAX_ATTEMPTS)));
        assert_eq!(tree.get_attribute(div, "id"), None);
    }
}
