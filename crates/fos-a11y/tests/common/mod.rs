//! Shared fixtures for fos-a11y integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use fos_dom::{Document, DomTree, EventInterface, EventType, NodeId};

/// Route `tracing` output to the test harness; `RUST_LOG=fos_a11y=debug` shows it
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse an HTML fixture
pub fn fixture(html: &str) -> Document {
    init_tracing();
    fos_html::parse(html).expect("fixture should parse")
}

/// Look up a fixture element by id
pub fn by_id(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("fixture has no element #{id}"))
}

/// Record every click reaching `node`, with the interface that produced it
pub fn record_clicks(tree: &mut DomTree, node: NodeId) -> Rc<RefCell<Vec<EventInterface>>> {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&clicks);
    tree.add_event_listener(node, EventType::Click, move |_, event| {
        log.borrow_mut().push(event.interface);
    });
    clicks
}
