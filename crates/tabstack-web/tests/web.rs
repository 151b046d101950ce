//! Browser integration tests.
//!
//! Run with: wasm-pack test --headless --chrome crates/tabstack-web

#![cfg(target_arch = "wasm32")]

use pretty_assertions::assert_eq;
use tabstack_host::{Browser, Dom, FlexDirection, PointerEvents};
use tabstack_web::{WebHost, initialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().expect("window")
}

fn document() -> Document {
    window().document().expect("document")
}

fn host() -> WebHost {
    WebHost::new(window(), document())
}

/// Append a `section` with the given class and markup to the body.
fn mount(class: &str, html: &str) -> Element {
    let document = document();
    let section = document.create_element("section").unwrap();
    section.set_class_name(class);
    section.set_inner_html(html);
    document.body().unwrap().append_child(&section).unwrap();
    section
}

fn child_tags(element: &Element) -> Vec<String> {
    let children = element.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .map(|child| child.tag_name())
        .collect()
}

#[wasm_bindgen_test]
fn test_initialize_with_default_options() {
    let section = mount("stack-default", "<h2>One</h2><p>1</p><h2>Two</h2><p>2</p>");

    initialize(".stack-default", JsValue::UNDEFINED).unwrap();

    assert_eq!(child_tags(&section), ["UL", "DIV", "DIV", "UL"]);
    assert_eq!(section.query_selector_all("a").unwrap().length(), 4);
}

#[wasm_bindgen_test]
fn test_initialize_rejects_invalid_options() {
    mount("stack-invalid", "<h2>One</h2><p>1</p>");
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"maxHeightRate".into(), &2.0.into()).unwrap();

    assert!(initialize(".stack-invalid", options.into()).is_err());
    assert!(initialize(".stack-invalid", JsValue::from_str("nope")).is_err());
}

#[wasm_bindgen_test]
fn test_initialize_without_matches() {
    assert!(initialize(".stack-nowhere", JsValue::NULL).is_ok());
}

#[wasm_bindgen_test]
fn test_top_bar_precedes_leading_text() {
    let section = mount("stack-leading", "Intro<h2>One</h2><p>1</p>");

    initialize(".stack-leading", JsValue::UNDEFINED).unwrap();

    let first = section.first_child().unwrap();
    assert_eq!(first.node_name(), "UL");
}

#[wasm_bindgen_test]
fn test_click_switches_page() {
    let section = mount(
        "stack-click",
        "<h2>One</h2><p>1</p><h2>Two</h2><p>2</p><h2>Three</h2><p>3</p>",
    );
    initialize(".stack-click", JsValue::UNDEFINED).unwrap();

    let anchors = section.query_selector_all("a").unwrap();
    let second: HtmlElement = anchors.item(1).unwrap().dyn_into().unwrap();
    second.click();

    let pages = section.children();
    let current: Vec<bool> = (1..=3)
        .map(|i| pages.item(i).unwrap().has_attribute("data-nc-current"))
        .collect();
    assert_eq!(current, [false, true, false]);
    assert!(window().location().hash().unwrap().ends_with("-2"));
}

#[wasm_bindgen_test]
fn test_computed_style() {
    let element = mount("style-check", "");
    element
        .set_attribute(
            "style",
            "display: flex; flex-direction: column; pointer-events: none; \
             margin-top: 12.7px; margin-bottom: 3px",
        )
        .unwrap();

    let style = host().computed_style(&element);

    assert_eq!(style.flex_direction, FlexDirection::Column);
    assert_eq!(style.pointer_events, PointerEvents::None);
    assert!((style.margin_top - 12.0).abs() < f64::EPSILON);
    assert!((style.margin_bottom - 3.0).abs() < f64::EPSILON);
}

#[wasm_bindgen_test]
fn test_href_is_resolved_against_document() {
    let section = mount("href-check", r##"<a href="#tst:9-1">x</a>"##);
    let anchor = section.first_element_child().unwrap();
    let page = window().location().href().unwrap();
    let base = page.split('#').next().unwrap_or_default().to_owned();

    let href = host().href(&anchor);

    assert_eq!(href, format!("{base}#tst:9-1"));
}

#[wasm_bindgen_test]
fn test_min_height_set_and_cleared() {
    let element = mount("min-height-check", "");
    let style = element.dyn_ref::<HtmlElement>().unwrap().style();
    let mut host = host();

    host.set_min_height(&element, Some(120.0));
    assert_eq!(style.get_property_value("min-height").unwrap(), "120px");

    host.set_min_height(&element, None);
    assert_eq!(style.get_property_value("min-height").unwrap(), "");
}

#[wasm_bindgen_test]
fn test_push_state_changes_hash() {
    let mut host = host();

    host.push_state("#tabstack-pushed");

    assert_eq!(host.location_hash(), "#tabstack-pushed");
}
