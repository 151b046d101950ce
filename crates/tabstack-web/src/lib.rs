//! WebAssembly binding for tabstack.
//!
//! ```javascript
//! import init, { initialize } from './tabstack_web.js';
//!
//! await init();
//! initialize('.stack', { hashPrefix: 'doc:', maxHeightRate: 0.6 });
//! ```
//!
//! The stack is shared by every listener through an `Rc<RefCell<_>>`. Listeners
//! live as long as the page, so their closures are leaked.

mod error;
mod host;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use js_sys::Function;
use tabstack::Stack;
use tabstack_config::StackConfig;
use tabstack_host::Browser;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, Window};

pub use error::WebError;
pub use host::WebHost;

/// Quiet period before a burst of `resize` events is handled.
const RESIZE_DEBOUNCE_MS: i32 = 100;

type SharedStack = Rc<RefCell<Stack<WebHost>>>;

/// Install the panic hook. Runs when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Turn every element matching `selector` into a stack.
///
/// `options` may be `undefined`, `null` or an object with any of the
/// configuration keys in camelCase or snake_case.
#[wasm_bindgen]
pub fn initialize(selector: &str, options: JsValue) -> Result<(), JsValue> {
    let config = parse_options(options)?;
    let window = web_sys::window().ok_or(WebError::Missing("window"))?;
    let document = window.document().ok_or(WebError::Missing("document"))?;

    let matches = document
        .query_selector_all(selector)
        .map_err(|e| WebError::js("querySelectorAll", &e))?;
    let containers: Vec<Element> = (0..matches.length())
        .filter_map(|i| matches.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    if containers.is_empty() {
        tracing::debug!(selector, "No containers matched");
        return Ok(());
    }

    let host = WebHost::new(window.clone(), document);
    let stack: SharedStack = Rc::new(RefCell::new(Stack::initialize(host, &containers, config)));

    install_wake(&stack);
    attach_click_listeners(&stack)?;
    attach_window_listeners(&window, &stack)?;
    Ok(())
}

fn parse_options(options: JsValue) -> Result<StackConfig, WebError> {
    if options.is_undefined() || options.is_null() {
        return Ok(StackConfig::default());
    }
    let config: StackConfig = serde_wasm_bindgen::from_value(options)?;
    config.validate()?;
    Ok(config)
}

fn as_function(closure: &Closure<dyn FnMut()>) -> Function {
    closure.as_ref().unchecked_ref::<Function>().clone()
}

/// Give the host a timer callback that drains due tasks.
///
/// Timers may fire marginally before the clock reaches the deadline, so
/// anything still pending afterwards gets a fresh wake-up.
fn install_wake(stack: &SharedStack) {
    let weak: Weak<RefCell<Stack<WebHost>>> = Rc::downgrade(stack);
    let closure = Closure::<dyn FnMut()>::new(move || {
        let Some(stack) = weak.upgrade() else { return };
        let Ok(mut stack) = stack.try_borrow_mut() else {
            return;
        };
        stack.run_due();
        if let Some(deadline) = stack.next_deadline() {
            let remaining = deadline.saturating_sub(stack.host().now());
            stack
                .host_mut()
                .request_wake(remaining.max(Duration::from_millis(1)));
        }
    });
    let callback = as_function(&closure);
    closure.forget();
    stack.borrow_mut().host_mut().install_wake(callback);
}

fn attach_click_listeners(stack: &SharedStack) -> Result<(), WebError> {
    let anchors: Vec<_> = stack
        .borrow()
        .anchors()
        .map(|(anchor, node)| (anchor, node.clone()))
        .collect();

    for (anchor, node) in anchors {
        let stack = Rc::clone(stack);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            if let Ok(mut stack) = stack.try_borrow_mut() {
                stack.on_click(anchor);
            }
        });
        node.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| WebError::js("addEventListener(click)", &e))?;
        closure.forget();
    }
    Ok(())
}

fn attach_window_listeners(window: &Window, stack: &SharedStack) -> Result<(), WebError> {
    let on_hash = {
        let stack = Rc::clone(stack);
        Closure::<dyn FnMut()>::new(move || {
            if let Ok(mut stack) = stack.try_borrow_mut() {
                stack.on_hash_change();
            }
        })
    };
    window
        .add_event_listener_with_callback("hashchange", on_hash.as_ref().unchecked_ref())
        .map_err(|e| WebError::js("addEventListener(hashchange)", &e))?;
    on_hash.forget();

    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let settled = {
        let stack = Rc::clone(stack);
        let pending = Rc::clone(&pending);
        Closure::<dyn FnMut()>::new(move || {
            pending.set(None);
            if let Ok(mut stack) = stack.try_borrow_mut() {
                stack.on_resize();
            }
        })
    };
    let settled_fn = as_function(&settled);
    settled.forget();

    let on_resize = {
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(handle) = pending.take() {
                window.clear_timeout_with_handle(handle);
            }
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &settled_fn,
                RESIZE_DEBOUNCE_MS,
            ) {
                Ok(handle) => pending.set(Some(handle)),
                Err(error) => tracing::warn!(?error, "Failed to debounce resize"),
            }
        })
    };
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| WebError::js("addEventListener(resize)", &e))?;
    on_resize.forget();

    Ok(())
}
