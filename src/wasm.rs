//! WASM bindings for the nav toggle
//!
//! Implements the host traits over real DOM elements and exports an
//! installer to JS. Call `install_nav_toggle()` once the header markup is in
//! the document; it binds the first `.nav__toggle` to the first `[data-nav]`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::config::ToggleConfig;
use crate::controller::ToggleController;
use crate::element::{ActivationHandler, ElementLookup, Panel, Trigger};
use crate::error::{ToggleError, ToggleResult};
use crate::selector::Selector;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn host_error(value: JsValue) -> ToggleError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ToggleError::Host(message)
}

impl Trigger for Element {
    fn set_attribute(&self, name: &str, value: &str) -> ToggleResult<()> {
        Element::set_attribute(self, name, value).map_err(host_error)
    }

    fn on_activate(&self, handler: ActivationHandler) -> ToggleResult<()> {
        let mut handler = handler;
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
        self.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(host_error)?;
        // Bound for the page lifetime
        closure.forget();
        Ok(())
    }
}

impl Panel for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str) -> ToggleResult<bool> {
        self.class_list().toggle(class).map_err(host_error)
    }
}

impl ElementLookup for Document {
    type Element = Element;

    fn find(&self, selector: &Selector) -> ToggleResult<Option<Element>> {
        self.query_selector(&selector.to_string()).map_err(host_error)
    }
}

fn install(config: &ToggleConfig) -> Result<bool, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    match ToggleController::locate(&document, config) {
        Ok(controller) => Ok(controller.is_bound()),
        Err(e) => {
            let message = e.to_string();
            web_sys::console::error_1(&JsValue::from_str(&message));
            Err(JsValue::from_str(&message))
        }
    }
}

/// Bind the toggle with the default selectors.
///
/// Returns `true` if both elements were found and the handler registered,
/// `false` if the toggle stays inert.
#[wasm_bindgen(js_name = "installNavToggle")]
pub fn install_nav_toggle() -> Result<bool, JsValue> {
    install(&ToggleConfig::default())
}

/// Bind the toggle using a JSON config, e.g.
/// `{"trigger_selector": "#menu-button", "open_class": "menu--open"}`
#[wasm_bindgen(js_name = "installNavToggleWith")]
pub fn install_nav_toggle_with(config_json: &str) -> Result<bool, JsValue> {
    let config = ToggleConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    install(&config)
}
