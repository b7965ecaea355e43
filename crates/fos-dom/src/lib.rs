//! fOS DOM - Document Object Model
//!
//! Memory-efficient, arena-based DOM tree with attribute access, text
//! content, tree queries and event dispatch.

mod document;
mod error;
mod events;
mod interner;
mod node;
mod tree;

pub use document::Document;
pub use error::{DomError, DomResult};
pub use events::{Event, EventInterface, EventListener, EventType};
pub use interner::{InternedString, QualName, StringInterner, ns};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use tree::{Ancestors, Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Null handle, used for absent links
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this handle points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index of this node
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
