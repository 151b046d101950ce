//! [`Dom`] and [`Browser`] over `web-sys`.
//!
//! DOM calls that can throw are logged and skipped; the page stays usable.

use std::time::Duration;

use js_sys::Function;
use tabstack_host::{Browser, ComputedStyle, Dom, FlexDirection, PointerEvents, Rect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    Window,
};

fn log_failure<T>(result: Result<T, JsValue>, operation: &'static str) -> Option<T> {
    result
        .map_err(|error| tracing::warn!(?error, operation, "DOM call failed"))
        .ok()
}

/// A live browser page.
#[derive(Debug)]
pub struct WebHost {
    window: Window,
    document: Document,
    wake: Option<Function>,
    deferred_wakes: Vec<Duration>,
}

impl WebHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            wake: None,
            deferred_wakes: Vec::new(),
        }
    }

    /// Install the timer callback and issue wake-ups requested before it
    /// existed.
    pub(crate) fn install_wake(&mut self, callback: Function) {
        self.wake = Some(callback);
        for delay in std::mem::take(&mut self.deferred_wakes) {
            self.request_wake(delay);
        }
    }
}

impl Dom for WebHost {
    type Node = Element;

    fn children(&self, parent: &Element) -> Vec<Element> {
        let children = parent.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .collect()
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name()
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text_content(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn create_element(&mut self, tag: &str) -> Element {
        self.document
            .create_element(tag)
            .expect("tag names passed by the core are valid")
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        log_failure(parent.append_child(child), "appendChild");
    }

    fn prepend_child(&mut self, parent: &Element, child: &Element) {
        let first = parent.first_child();
        log_failure(parent.insert_before(child, first.as_ref()), "insertBefore");
    }

    fn detach(&mut self, node: &Element) {
        node.remove();
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        log_failure(node.set_attribute(name, value), "setAttribute");
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        log_failure(node.remove_attribute(name), "removeAttribute");
    }

    fn set_class(&mut self, node: &Element, class: &str, on: bool) {
        log_failure(node.class_list().toggle_with_force(class, on), "classList.toggle");
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn href(&self, anchor: &Element) -> String {
        match anchor.dyn_ref::<HtmlAnchorElement>() {
            Some(anchor) => anchor.href(),
            None => anchor.get_attribute("href").unwrap_or_default(),
        }
    }

    fn computed_style(&self, node: &Element) -> ComputedStyle {
        let Some(Some(declaration)) =
            log_failure(self.window.get_computed_style(node), "getComputedStyle")
        else {
            return ComputedStyle::default();
        };
        let property = |name: &str| declaration.get_property_value(name).unwrap_or_default();

        ComputedStyle {
            flex_direction: FlexDirection::from_css(&property("flex-direction")),
            pointer_events: PointerEvents::from_css(&property("pointer-events")),
            margin_top: ComputedStyle::parse_px(&property("margin-top")),
            margin_bottom: ComputedStyle::parse_px(&property("margin-bottom")),
        }
    }

    fn bounding_rect(&self, node: &Element) -> Rect {
        let rect = node.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            bottom: rect.bottom(),
        }
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |element| f64::from(element.offset_height()))
    }

    fn set_min_height(&mut self, node: &Element, height: Option<f64>) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let value = height.map(|h| format!("{h}px")).unwrap_or_default();
        log_failure(element.style().set_property("min-height", &value), "style.minHeight");
    }

    fn scroll_into_view(&mut self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl Browser for WebHost {
    fn location_hash(&self) -> String {
        log_failure(self.window.location().hash(), "location.hash").unwrap_or_default()
    }

    fn push_state(&mut self, url: &str) {
        let Some(history) = log_failure(self.window.history(), "history") else {
            return;
        };
        log_failure(
            history.push_state_with_url(&js_sys::Object::new(), "", Some(url)),
            "history.pushState",
        );
    }

    fn viewport_height(&self) -> f64 {
        log_failure(self.window.inner_height(), "innerHeight")
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn now(&self) -> Duration {
        let millis = self
            .window
            .performance()
            .map_or_else(js_sys::Date::now, |performance| performance.now());
        Duration::from_secs_f64(millis.max(0.0) / 1000.0)
    }

    fn request_wake(&mut self, delay: Duration) {
        let Some(callback) = &self.wake else {
            self.deferred_wakes.push(delay);
            return;
        };
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        log_failure(
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback, millis),
            "setTimeout",
        );
    }
}
