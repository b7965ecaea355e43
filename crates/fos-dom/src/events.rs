//! DOM Events
//!
//! Listener registration, bubbling dispatch and native element activation.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{DomTree, NodeId};

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
}

/// Which event interface constructed the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventInterface {
    /// Plain `Event`, as created by script
    Event,
    /// `MouseEvent`, as fired by native activation
    MouseEvent,
    /// `KeyboardEvent`
    KeyboardEvent,
}

/// DOM event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub interface: EventInterface,
    pub target: NodeId,
    pub current_target: NodeId,
    pub bubbles: bool,
    pub cancelable: bool,
    /// Key name (`KeyboardEvent.key`)
    pub key: Option<String>,
    /// Legacy key code (`KeyboardEvent.keyCode`), 0 when unknown
    pub key_code: u32,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    /// Create a plain event. Like the `Event` constructor, it neither bubbles
    /// nor is cancelable unless configured.
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            interface: EventInterface::Event,
            target: NodeId::NONE,
            current_target: NodeId::NONE,
            bubbles: false,
            cancelable: false,
            key: None,
            key_code: 0,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn with_bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Create a keyboard event. Either representation may be empty: pass
    /// `None` for events that only carry a legacy code, `0` for no code.
    pub fn keyboard(event_type: EventType, key: Option<&str>, key_code: u32) -> Self {
        Self {
            interface: EventInterface::KeyboardEvent,
            key: key.map(str::to_string),
            key_code,
            ..Self::new(event_type).with_bubbles(true).with_cancelable(true)
        }
    }

    /// Create the click event fired by native activation
    pub fn mouse_click() -> Self {
        Self {
            interface: EventInterface::MouseEvent,
            ..Self::new(EventType::Click).with_bubbles(true).with_cancelable(true)
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation after the current node
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Event listener callback. Receives the tree so it can mutate it or
/// dispatch further events.
pub type EventListener = Rc<dyn Fn(&mut DomTree, &mut Event)>;

/// Listeners by target node
#[derive(Default)]
pub(crate) struct ListenerMap {
    by_node: HashMap<NodeId, Vec<(EventType, EventListener)>>,
}

impl ListenerMap {
    fn matching(&self, node: NodeId, event_type: EventType) -> Vec<EventListener> {
        self.by_node
            .get(&node)
            .map(|list| {
                list.iter()
                    .filter(|(ty, _)| *ty == event_type)
                    .map(|(_, listener)| Rc::clone(listener))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl fmt::Debug for ListenerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.by_node.iter().map(|(node, list)| (node, list.len())))
            .finish()
    }
}

const FORM_CONTROLS: &[&str] = &[
    "button", "input", "select", "textarea", "optgroup", "option", "fieldset",
];

impl DomTree {
    /// Register a listener on a node. Listeners live as long as the tree.
    pub fn add_event_listener<F>(&mut self, node: NodeId, event_type: EventType, listener: F)
    where
        F: Fn(&mut DomTree, &mut Event) + 'static,
    {
        self.listeners
            .by_node
            .entry(node)
            .or_default()
            .push((event_type, Rc::new(listener)));
    }

    /// Number of listeners registered on a node
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.by_node.get(&node).map_or(0, Vec::len)
    }

    /// Dispatch an event at `target`, bubbling through ancestors when the
    /// event bubbles. Returns `false` if a listener prevented the default.
    pub fn dispatch_event(&mut self, target: NodeId, mut event: Event) -> bool {
        if self.get(target).is_none() {
            tracing::debug!("Dropping {:?} for unknown node {:?}", event.event_type, target);
            return true;
        }

        event.target = target;
        let mut path = vec![target];
        if event.bubbles {
            path.extend(self.ancestors(target));
        }

        for node in path {
            event.current_target = node;
            for listener in self.listeners.matching(node, event.event_type) {
                listener(self, &mut event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }

        tracing::trace!(
            "Dispatched {:?} at {:?} (default prevented: {})",
            event.event_type,
            target,
            event.is_default_prevented()
        );
        !event.is_default_prevented()
    }

    /// Whether the element exposes native `click()` activation. Only HTML
    /// elements do; SVG and MathML elements must be activated by dispatching
    /// an event.
    pub fn supports_native_click(&self, node: NodeId) -> bool {
        self.is_html_element(node)
    }

    /// Native activation: fires a bubbling `MouseEvent` click unless the
    /// element is a disabled form control.
    pub fn click(&mut self, node: NodeId) {
        if self.is_disabled_control(node) {
            tracing::trace!("Ignoring click on disabled control {:?}", node);
            return;
        }
        self.dispatch_event(node, Event::mouse_click());
    }

    fn is_disabled_control(&self, node: NodeId) -> bool {
        self.is_html_element(node)
            && self.tag_name(node).is_some_and(|tag| FORM_CONTROLS.contains(&tag))
            && self.has_attribute(node, "disabled")
    }
}
