//! Responder Web - WASM bindings and JavaScript API for Responder.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import { register, ResponderRegistry } from 'responder';
//!
//! const teardown = register(
//!   { '(min-width: 100px)': 'wide', '(max-width: 50px)': 'narrow' },
//!   (matching) => console.log(matching), // called immediately, then on every change
//! );
//! teardown(); // true
//! teardown(); // false, warns
//!
//! // Deprecated identifier-based API
//! const registry = new ResponderRegistry();
//! const id = registry.register({ '(print)': 'print' }, (matching) => {});
//! registry.destroy(id);
//! ```

extern crate alloc;

mod console;
pub mod convert;
pub mod provider;

pub use console::ConsoleSink;
pub use provider::{WebProvider, WebQueryList};

use alloc::boxed::Box;
use alloc::rc::Rc;
use convert::{error_to_js, js_to_callback, js_to_instance_id, js_to_query_map, values_to_js_array};
use core::cell::RefCell;
use console::debug_log;
use responder_core::{
    DeprecationPolicy, InstanceRegistry, QueryMap, Responder, ResponderConfig, Result, Subscription,
};
use wasm_bindgen::prelude::*;

/// Validates the JavaScript arguments and registers them through `responder`.
///
/// Arguments are checked in order (values, callback, provider override)
/// before any provider is consulted.
fn subscribe_js(
    responder: &Responder,
    values: &JsValue,
    callback: &JsValue,
    provider_override: &JsValue,
) -> Result<Subscription<WebQueryList, JsValue>> {
    let values: QueryMap<JsValue> = js_to_query_map(values)?;
    let callback = js_to_callback(callback)?;
    let override_fn = provider::provider_override(provider_override)?;
    let provider = WebProvider::resolve(override_fn)?;

    debug_log!(
        "responder: registering {} queries (native provider: {})",
        values.len(),
        provider.is_native()
    );

    responder.subscribe(&provider, values, move |matching: &[JsValue]| {
        callback
            .call1(&JsValue::NULL, &values_to_js_array(matching))
            .ok();
    })
}

/// JavaScript callers may pass `{}`; the callback then fires once with `[]`.
fn console_responder(config: ResponderConfig) -> Responder {
    Responder::with_config(config.with_allow_empty(true)).with_sink(ConsoleSink)
}

/// Registers a `{ [query]: value }` mapping.
///
/// `callback` receives the array of values whose queries currently match,
/// once before this returns and again after every change. Returns a
/// teardown function that yields `true` the first time and `false` after.
///
/// An empty mapping is accepted: `callback` receives `[]` once and is never
/// called again. `values` must still be an object.
#[wasm_bindgen]
pub fn register(
    values: JsValue,
    callback: JsValue,
    provider_override: JsValue,
) -> core::result::Result<js_sys::Function, JsValue> {
    let responder = console_responder(ResponderConfig::default());
    let subscription =
        subscribe_js(&responder, &values, &callback, &provider_override).map_err(error_to_js)?;

    let teardown = Closure::wrap(Box::new(move || {
        debug_log!("responder: teardown");
        subscription.destroy()
    }) as Box<dyn FnMut() -> bool>);
    let js_fn: js_sys::Function = teardown.as_ref().unchecked_ref::<js_sys::Function>().clone();
    teardown.forget();
    Ok(js_fn)
}

/// Identifier-based registration, kept for existing callers.
///
/// Prefer [`register`], which returns a teardown function.
#[wasm_bindgen]
pub struct ResponderRegistry {
    inner: Rc<RefCell<InstanceRegistry<WebQueryList, JsValue>>>,
}

impl Default for ResponderRegistry {
    fn default() -> Self {
        Self::new(None)
    }
}

#[wasm_bindgen]
impl ResponderRegistry {
    /// Creates an empty registry.
    ///
    /// The deprecation warning is shown on the first registration only,
    /// unless `warnEveryCall` is true.
    #[wasm_bindgen(constructor)]
    pub fn new(warn_every_call: Option<bool>) -> ResponderRegistry {
        let deprecation = if warn_every_call.unwrap_or(false) {
            DeprecationPolicy::EveryCall
        } else {
            DeprecationPolicy::Once
        };
        let responder = console_responder(ResponderConfig::new().with_deprecation(deprecation));
        Self {
            inner: Rc::new(RefCell::new(InstanceRegistry::new(responder))),
        }
    }

    /// Registers a mapping and returns its numeric identifier.
    pub fn register(
        &self,
        values: JsValue,
        callback: JsValue,
        provider_override: JsValue,
    ) -> core::result::Result<f64, JsValue> {
        // The initial callback runs without the registry borrowed, so it may
        // call back into this registry.
        let responder = self.inner.borrow().responder().clone();
        let subscription =
            subscribe_js(&responder, &values, &callback, &provider_override).map_err(error_to_js)?;
        let id = self.inner.borrow_mut().insert(subscription);
        debug_log!("responder: registered instance {}", id);
        Ok(id as f64)
    }

    /// Tears down the instance registered under `id`.
    ///
    /// Returns false, with a console warning, if it was already destroyed.
    pub fn destroy(&self, id: Option<f64>) -> bool {
        self.inner.borrow_mut().destroy_opt(js_to_instance_id(id))
    }

    /// Tears down every registered instance and returns how many there were.
    #[wasm_bindgen(js_name = destroyAll)]
    pub fn destroy_all(&self) -> usize {
        self.inner.borrow_mut().destroy_all()
    }

    /// Returns true if `id` is registered.
    pub fn has(&self, id: f64) -> bool {
        js_to_instance_id(Some(id))
            .map(|id| self.inner.borrow().contains(id))
            .unwrap_or(false)
    }

    /// Number of registered instances.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.borrow().len()
    }
}
