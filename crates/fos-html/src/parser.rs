//! HTML5 Parser implementation
//!
//! Uses html5ever's build-in RcDom and converts to our DOM format.
//! This is simpler and more reliable than implementing TreeSink directly.

use fos_dom::{Document, DomTree, Node, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        Self::convert_node(&dom.document, document.tree_mut(), NodeId::ROOT);
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Convert an RcDom node (and its subtree) into `tree` under `parent`
    fn convert_node(handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        let id = match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    Self::convert_node(child, tree, parent);
                }
                return;
            }
            RcNodeData::Doctype { name, public_id, system_id } => {
                let name = tree.interner_mut().intern(name);
                tree.push_node(Node::doctype(name, public_id.to_string(), system_id.to_string()))
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                tree.create_text(&text)
            }
            RcNodeData::Comment { contents } => tree.create_comment(contents),
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element_ns(&name.ns, &name.local);
                for attr in attrs.borrow().iter() {
                    // Fresh element: setting attributes cannot fail
                    let _ = tree.set_attribute(id, &attr.name.local, &attr.value);
                }
                id
            }
            // Only produced for XML; nothing to keep
            RcNodeData::ProcessingInstruction { .. } => return,
        };

        if let Err(err) = tree.append_child(parent, id) {
            tracing::debug!("Skipping misplaced node: {}", err);
            return;
        }

        for child in handle.children.borrow().iter() {
            Self::convert_node(child, tree, id);
        }
    }
}
