//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Handle does not belong to this tree
    #[error("Node not found: {0:?}")]
    NotFound(NodeId),

    /// Inserting a node into itself or one of its descendants
    #[error("Hierarchy request error: {child:?} cannot be appended to {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// Parent cannot hold children (text, comment, doctype)
    #[error("Node {0:?} cannot have children")]
    InvalidNodeType(NodeId),

    /// Attribute access on a non-element node
    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),
}
