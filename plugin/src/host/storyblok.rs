//! Bindings to the Storyblok editor's global plugin API.
//!
//! The editor injects `window.Storyblok` into the plugin iframe. Calls here
//! only work in the browser; native builds compile the bindings but never
//! invoke them.
//!
//! DESIGN
//! ======
//! The JS side gets a single listener per event name, registered on first
//! subscription. That listener decodes the payload and fans out through an
//! `EventRegistry`, so Rust callbacks run in subscription order.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::events::EventRegistry;
use super::{FieldChange, FieldPluginHost, HostCallback, HostEvent, HostRuntime};

const GLOBAL_NAME: &str = "Storyblok";
const READY_EVENT: &str = "plugin:load";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Storyblok, js_name = init)]
    fn storyblok_init(options: &JsValue);

    #[wasm_bindgen(js_namespace = ["Storyblok", "api"], js_name = get)]
    fn storyblok_api_get(event: &str, callback: &Function);

    /// Plugin handle yielded by `plugin:load`.
    pub type JsFieldPlugin;

    #[wasm_bindgen(method, getter)]
    fn story(this: &JsFieldPlugin) -> JsValue;

    #[wasm_bindgen(method, getter)]
    fn field(this: &JsFieldPlugin) -> JsValue;

    #[wasm_bindgen(method, js_name = set)]
    fn set_field(this: &JsFieldPlugin, value: &str);

    #[wasm_bindgen(method, js_name = on)]
    fn subscribe(this: &JsFieldPlugin, event: &str, callback: &Function);

    #[wasm_bindgen(method, js_name = emit)]
    fn emit_event(this: &JsFieldPlugin, event: &str, value: &str);
}

/// The `window.Storyblok` global.
#[derive(Clone, Copy, Debug)]
pub struct StoryblokRuntime;

impl StoryblokRuntime {
    /// Returns `None` when the editor global is missing from the page.
    pub fn detect() -> Option<Self> {
        Reflect::has(&js_sys::global(), &JsValue::from_str(GLOBAL_NAME))
            .unwrap_or(false)
            .then_some(Self)
    }
}

impl HostRuntime for StoryblokRuntime {
    type Handle = StoryblokHandle;

    fn init(&self, access_token: &str) {
        let options = Object::new();
        let _ = Reflect::set(&options, &JsValue::from_str("accessToken"), &JsValue::from_str(access_token));
        storyblok_init(&options);
    }

    fn on_ready(&self, callback: Box<dyn FnOnce(StoryblokHandle)>) {
        let ready = Closure::once_into_js(move |plugin: JsValue| {
            callback(StoryblokHandle::new(plugin.unchecked_into()));
        });
        storyblok_api_get(READY_EVENT, ready.unchecked_ref());
    }
}

/// Ready plugin handle.
pub struct StoryblokHandle {
    plugin: JsFieldPlugin,
    registry: Rc<RefCell<EventRegistry>>,
}

impl StoryblokHandle {
    fn new(plugin: JsFieldPlugin) -> Self {
        Self { plugin, registry: Rc::new(RefCell::new(EventRegistry::new())) }
    }

    /// Register the JS listener that feeds `event` into the registry. The
    /// listener lives as long as the page.
    fn bridge_event(&self, event: HostEvent) {
        let registry = Rc::clone(&self.registry);
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            let change = FieldChange { field: field_from_payload(&payload) };
            registry.borrow_mut().dispatch(event, &change);
        });
        self.plugin.subscribe(event.as_str(), listener.as_ref().unchecked_ref());
        listener.forget();
    }
}

fn field_from_payload(payload: &JsValue) -> String {
    Reflect::get(payload, &JsValue::from_str("field"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

impl FieldPluginHost for StoryblokHandle {
    fn story_name(&self) -> Option<String> {
        Reflect::get(&self.plugin.story(), &JsValue::from_str("name"))
            .ok()
            .and_then(|v| v.as_string())
    }

    fn field(&self) -> String {
        self.plugin.field().as_string().unwrap_or_default()
    }

    fn set(&self, value: &str) {
        self.plugin.set_field(value);
    }

    fn emit(&self, event: HostEvent, value: &str) {
        self.plugin.emit_event(event.as_str(), value);
    }

    fn on(&self, event: HostEvent, callback: HostCallback) {
        let first = self.registry.borrow_mut().subscribe(event, callback);
        if first {
            self.bridge_event(event);
        }
    }
}
