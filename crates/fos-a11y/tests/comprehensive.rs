//! Comprehensive tests for fos-a11y
//!
//! Behaviour of the public helpers on parsed documents.

mod common;

use common::{by_id, fixture, record_clicks};
use fos_a11y::{
    ButtonConfig, SPACE_KEY_CODE, add_id_to_element, create_a11y_button, get_a11y_label,
    prefers_reduced_motion, set_modal_a11y_attributes,
};
use fos_dom::{Event, EventInterface, EventType};

// ============================================================================
// IDENTIFIERS
// ============================================================================

#[test]
fn test_add_id_is_idempotent() {
    let mut doc = fixture("<div id='host'><span id='target-parent'><b>x</b></span></div>");
    let b = doc.tree().get_elements_by_tag_name(doc.body(), "b")[0];

    add_id_to_element(doc.tree_mut(), b).unwrap();
    let first = doc.tree().get_attribute(b, "id").unwrap().to_string();
    assert!(!first.is_empty());

    add_id_to_element(doc.tree_mut(), b).unwrap();
    assert_eq!(doc.tree().get_attribute(b, "id"), Some(first.as_str()));
    assert_eq!(doc.get_element_by_id(&first), Some(b));
}

#[test]
fn test_add_id_keeps_existing() {
    let mut doc = fixture("<div id='keep'></div>");
    let div = by_id(&doc, "keep");

    add_id_to_element(doc.tree_mut(), div).unwrap();
    assert_eq!(doc.tree().get_attribute(div, "id"), Some("keep"));
}

#[test]
fn test_add_id_replaces_empty_id() {
    let mut doc = fixture("<p id=''>text</p>");
    let p = doc.tree().get_elements_by_tag_name(doc.body(), "p")[0];

    add_id_to_element(doc.tree_mut(), p).unwrap();
    let id = doc.tree().get_attribute(p, "id").unwrap();
    assert!(id.starts_with("fos-a11y-"), "unexpected id {id:?}");
}

#[test]
fn test_generated_ids_are_unique() {
    let mut doc = fixture("<i></i><i></i><i></i>");
    let items = doc.tree().get_elements_by_tag_name(doc.body(), "i");
    for &item in &items {
        add_id_to_element(doc.tree_mut(), item).unwrap();
    }

    let mut ids: Vec<&str> = items
        .iter()
        .map(|&i| doc.tree().get_attribute(i, "id").unwrap())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

// ============================================================================
// LABELS
// ============================================================================

#[test]
fn test_aria_label_wins() {
    let doc = fixture(
        r#"<span id="ref">Referenced</span>
           <div id="el" aria-label="Explicit" aria-labelledby="ref">Body <b aria-label="x">y</b></div>"#,
    );
    assert_eq!(get_a11y_label(doc.tree(), by_id(&doc, "el")), "Explicit");
}

#[test]
fn test_labelledby_text_is_trimmed() {
    let doc = fixture(r#"<span id="x">  Hello  </span><div id="el" aria-labelledby="x">Other</div>"#);
    assert_eq!(get_a11y_label(doc.tree(), by_id(&doc, "el")), "Hello");
}

#[test]
fn test_descendant_label_substituted() {
    let doc = fixture(r#"<div id="el">Hello <span aria-label='World'>ignored</span></div>"#);
    assert_eq!(get_a11y_label(doc.tree(), by_id(&doc, "el")), "Hello World");
}

#[test]
fn test_descendant_labelledby_substituted() {
    let doc = fixture(
        r#"<em id="count"> 3 </em>
           <div id="el">Inbox <span aria-labelledby="count">(three)</span> unread</div>"#,
    );
    assert_eq!(get_a11y_label(doc.tree(), by_id(&doc, "el")), "Inbox 3 unread");
}

#[test]
fn test_unresolved_labelledby_falls_through() {
    let doc = fixture(r#"<div id="el" aria-labelledby="missing">  Fallback text </div>"#);
    assert_eq!(get_a11y_label(doc.tree(), by_id(&doc, "el")), "Fallback text");
}

#[test]
fn test_label_does_not_mutate_tree() {
    let doc = fixture(r#"<div id="el">Hello <span id="s" aria-label='World'>ignored</span></div>"#);
    let span = by_id(&doc, "s");
    let before = doc.tree().len();

    get_a11y_label(doc.tree(), by_id(&doc, "el"));
    assert_eq!(doc.tree().len(), before);
    assert_eq!(doc.tree().text_content(span), "ignored");
}

// ============================================================================
// BUTTONS
// ============================================================================

#[test]
fn test_button_on_div() {
    let mut doc = fixture(r#"<div id="el">Go</div>"#);
    let el = by_id(&doc, "el");

    create_a11y_button(doc.tree_mut(), el, &ButtonConfig::default()).unwrap();
    assert_eq!(doc.tree().get_attribute(el, "role"), Some("button"));
    assert_eq!(doc.tree().get_attribute(el, "tabindex"), Some("0"));
}

#[test]
fn test_button_keeps_existing_role() {
    let mut doc = fixture(r#"<div id="el" role="link" tabindex="-1">Go</div>"#);
    let el = by_id(&doc, "el");

    create_a11y_button(doc.tree_mut(), el, &ButtonConfig::default()).unwrap();
    assert_eq!(doc.tree().get_attribute(el, "role"), Some("link"));
    assert_eq!(doc.tree().get_attribute(el, "tabindex"), Some("0"));
}

#[test]
fn test_button_custom_role() {
    let mut doc = fixture(r#"<li id="el">Item</li>"#);
    let el = by_id(&doc, "el");

    create_a11y_button(doc.tree_mut(), el, &ButtonConfig::with_role("menuitem")).unwrap();
    assert_eq!(doc.tree().get_attribute(el, "role"), Some("menuitem"));
}

#[test]
fn test_enter_and_space_activate_once_each() {
    let mut doc = fixture(r#"<div id="el">Go</div>"#);
    let el = by_id(&doc, "el");
    let tree = doc.tree_mut();
    create_a11y_button(tree, el, &ButtonConfig::default()).unwrap();
    let clicks = record_clicks(tree, el);

    let enter = tree.dispatch_event(el, Event::keyboard(EventType::KeyDown, Some("Enter"), 0));
    assert_eq!(clicks.borrow().len(), 1);
    assert!(!enter, "Enter default should be prevented");

    let space = tree.dispatch_event(el, Event::keyboard(EventType::KeyDown, None, SPACE_KEY_CODE));
    assert_eq!(clicks.borrow().len(), 2);
    assert!(!space, "Space must not scroll the page");

    let other = tree.dispatch_event(el, Event::keyboard(EventType::KeyDown, Some("Tab"), 9));
    assert_eq!(clicks.borrow().len(), 2);
    assert!(other);
}

#[test]
fn test_html_element_uses_native_click() {
    let mut doc = fixture(r#"<section id="outer"><div id="el">Go</div></section>"#);
    let el = by_id(&doc, "el");
    let outer = by_id(&doc, "outer");
    let tree = doc.tree_mut();
    create_a11y_button(tree, el, &ButtonConfig::default()).unwrap();
    let seen = record_clicks(tree, outer);

    tree.dispatch_event(el, Event::keyboard(EventType::KeyDown, Some(" "), SPACE_KEY_CODE));
    assert_eq!(*seen.borrow(), vec![EventInterface::MouseEvent]);
}

#[test]
fn test_svg_element_gets_synthetic_bubbling_click() {
    let mut doc = fixture(r#"<div id="outer"><svg><g id="el"><circle r="4"></circle></g></svg></div>"#);
    let el = by_id(&doc, "el");
    let outer = by_id(&doc, "outer");
    let tree = doc.tree_mut();
    assert!(!tree.supports_native_click(el));

    create_a11y_button(tree, el, &ButtonConfig::default()).unwrap();
    let seen = record_clicks(tree, outer);

    let enter = Event::keyboard(EventType::KeyDown, Some("Enter"), 13);
    let not_prevented = tree.dispatch_event(el, enter);
    assert!(!not_prevented);
    assert_eq!(*seen.borrow(), vec![EventInterface::Event]);
}

// ============================================================================
// MODALS
// ============================================================================

#[test]
fn test_modal_labelled_from_headline() {
    let mut doc = fixture(r#"<div id="m"><h2>Settings</h2><p>Body</p></div>"#);
    let m = by_id(&doc, "m");

    set_modal_a11y_attributes(doc.tree_mut(), m).unwrap();
    let tree = doc.tree();
    assert_eq!(tree.get_attribute(m, "role"), Some("dialog"));
    assert_eq!(tree.get_attribute(m, "aria-modal"), Some("true"));
    assert_eq!(tree.get_attribute(m, "aria-label"), Some("Settings"));
    assert!(!tree.has_attribute(m, "aria-labelledby"));
}

#[test]
fn test_modal_labelledby_normalized() {
    let mut doc = fixture(r#"<span id="t">  Confirm delete </span><div id="m" aria-labelledby="t"><p>Sure?</p></div>"#);
    let m = by_id(&doc, "m");

    set_modal_a11y_attributes(doc.tree_mut(), m).unwrap();
    let tree = doc.tree();
    assert_eq!(tree.get_attribute(m, "aria-label"), Some("Confirm delete"));
    assert!(!tree.has_attribute(m, "aria-labelledby"));
    assert_eq!(tree.get_attribute(m, "aria-modal"), Some("true"));
}

#[test]
fn test_modal_explicit_label_beats_headline() {
    let mut doc = fixture(r#"<div id="m" aria-label="Preferences"><h1>Settings</h1></div>"#);
    let m = by_id(&doc, "m");

    set_modal_a11y_attributes(doc.tree_mut(), m).unwrap();
    assert_eq!(doc.tree().get_attribute(m, "aria-label"), Some("Preferences"));
}

#[test]
fn test_modal_labelledby_beats_headline() {
    let mut doc = fixture(r#"<b id="t">Title</b><div id="m" aria-labelledby="t"><h1>Heading</h1></div>"#);
    let m = by_id(&doc, "m");

    set_modal_a11y_attributes(doc.tree_mut(), m).unwrap();
    let tree = doc.tree();
    assert_eq!(tree.get_attribute(m, "aria-label"), Some("Title"));
    assert!(!tree.has_attribute(m, "aria-labelledby"));
}

// ============================================================================
// PREFERENCES
// ============================================================================

#[test]
fn test_reduced_motion_flag_is_stable() {
    assert_eq!(prefers_reduced_motion(), prefers_reduced_motion());
}
