//! DOM Tree (arena-based allocation)
//!
//! Nodes live in a single `Vec` and link to each other through `NodeId`
//! indices. Removing a node only detaches it: handles stay valid for the
//! lifetime of the tree.

use crate::events::ListenerMap;
use crate::{DomError, DomResult, InternedString, Node, NodeData, NodeId, QualName, StringInterner};

/// Arena-based DOM tree for memory efficiency
#[derive(Debug)]
pub struct DomTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) interner: StringInterner,
    pub(crate) listeners: ListenerMap,
}

impl DomTree {
    /// Create a new tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
            listeners: ListenerMap::default(),
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut StringInterner {
        &mut self.interner
    }

    /// Resolve an interned string
    #[inline]
    pub fn resolve(&self, id: InternedString) -> &str {
        self.interner.get(id)
    }

    /// Add a detached node to the arena
    pub fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached HTML element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let local = self.interner.intern(&tag.to_ascii_lowercase());
        self.push_node(Node::element(QualName::new(InternedString::HTML_NS, local)))
    }

    /// Create a detached element in the given namespace
    pub fn create_element_ns(&mut self, namespace: &str, tag: &str) -> NodeId {
        let ns = self.interner.intern(namespace);
        let local = self.interner.intern(tag);
        self.push_node(Node::element(QualName::new(ns, local)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push_node(Node::text(text.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push_node(Node::comment(text.to_string()))
    }

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.get(parent).ok_or(DomError::NotFound(parent))?;
        if !parent_node.can_have_children() {
            return Err(DomError::InvalidNodeType(parent));
        }
        let child_node = self.get(child).ok_or(DomError::NotFound(child))?;
        if matches!(child_node.data, NodeData::Document)
            || child == parent
            || self.ancestors(parent).any(|a| a == child)
        {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        Ok(())
    }

    /// Detach a node from its parent; its subtree stays intact
    pub fn remove(&mut self, id: NodeId) {
        if self.get(id).is_some() {
            self.detach(id);
        }
    }

    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Iterate over direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self.get(parent).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Iterate over all descendants in document order (pre-order), excluding `root`
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let next = self.get(root).map_or(NodeId::NONE, |n| n.first_child);
        Descendants { tree: self, root, next }
    }

    /// Iterate from the parent of `id` up to the topmost ancestor
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.parent);
        Ancestors { tree: self, next }
    }

    fn next_in_preorder(&self, current: NodeId, root: NodeId) -> NodeId {
        let Some(node) = self.get(current) else {
            return NodeId::NONE;
        };
        if node.first_child.is_valid() {
            return node.first_child;
        }
        let mut cursor = current;
        while cursor != root {
            let Some(node) = self.get(cursor) else { break };
            if node.next_sibling.is_valid() {
                return node.next_sibling;
            }
            cursor = node.parent;
        }
        NodeId::NONE
    }

    /// Whether the node is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        id == NodeId::ROOT || self.ancestors(id).any(|a| a == NodeId::ROOT)
    }

    /// Local tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.interner.get(elem.name.local))
    }

    /// Namespace URI of an element
    pub fn namespace(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.interner.get(elem.name.ns))
    }

    /// Check if the node is an element in the HTML namespace
    pub fn is_html_element(&self, id: NodeId) -> bool {
        self.get(id)
            .and_then(Node::as_element)
            .is_some_and(|e| e.name.ns == InternedString::HTML_NS)
    }

    /// Get an attribute value
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        let name = self.interner.lookup(name)?;
        elem.get_attr(name)
    }

    /// Check if an attribute is present (even when empty)
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.expect_element(id)?;
        let attr_name = QualName::local(self.interner.intern(name));
        let cached_id = (name == "id").then(|| self.interner.intern(value));

        if let Some(elem) = self.nodes[id.index()].as_element_mut() {
            elem.set_attr(attr_name, value.to_string());
            if cached_id.is_some() {
                elem.id = cached_id;
            }
        }
        Ok(())
    }

    /// Remove an attribute from an element, returning the old value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        self.expect_element(id)?;
        let Some(attr_name) = self.interner.lookup(name) else {
            return Ok(None);
        };

        let Some(elem) = self.nodes[id.index()].as_element_mut() else {
            return Ok(None);
        };
        let old = elem.remove_attr(attr_name);
        if name == "id" {
            elem.id = None;
        }
        Ok(old)
    }

    fn expect_element(&self, id: NodeId) -> DomResult<()> {
        match self.get(id) {
            Some(node) if node.is_element() => Ok(()),
            Some(_) => Err(DomError::NotAnElement(id)),
            None => Err(DomError::NotFound(id)),
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.get(id) else {
            return String::new();
        };
        match &node.data {
            NodeData::Text(t) => t.content.clone(),
            NodeData::Comment(c) => c.clone(),
            NodeData::Element(_) | NodeData::Document => self
                .descendants(id)
                .filter_map(|(_, n)| n.as_text())
                .collect(),
            _ => String::new(),
        }
    }

    /// Replace all children with a single text node
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        let node = self.get_mut(id).ok_or(DomError::NotFound(id))?;
        match &mut node.data {
            NodeData::Text(t) => {
                t.content = text.to_string();
                return Ok(());
            }
            NodeData::Comment(c) => {
                *c = text.to_string();
                return Ok(());
            }
            NodeData::Element(_) | NodeData::Document => {}
            _ => return Err(DomError::InvalidNodeType(id)),
        }

        let children: Vec<NodeId> = self.children(id).map(|(child, _)| child).collect();
        for child in children {
            self.detach(child);
        }
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(id, text_node)?;
        }
        Ok(())
    }

    /// First connected element with the given id, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        let target = self.interner.lookup(id)?;
        self.descendants(NodeId::ROOT)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.id == Some(target)))
            .map(|(node_id, _)| node_id)
    }

    /// Descendant elements with the given tag name, in document order
    pub fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|(_, node)| {
                node.as_element().is_some_and(|e| {
                    tag == "*" || self.interner.get(e.name.local).eq_ignore_ascii_case(tag)
                })
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        self.nodes.capacity() * std::mem::size_of::<Node>() + self.interner.memory_usage()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = self.tree.next_in_preorder(id, self.root);
        Some((id, node))
    }
}

/// Iterator over ancestors, nearest first
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.parent;
        Some(id)
    }
}
