//! Media-query-list providers backed by JavaScript.
//!
//! Two sources are supported: the browser's `window.matchMedia`, and a
//! caller-supplied override function returning objects shaped like a
//! `MediaQueryList` (`matches`, `addListener`, `removeListener`). The native
//! provider wins whenever it exists.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use js_sys::{Function, Reflect};
use responder_core::{Argument, Error, Listener, MediaQueryList, MediaQueryProvider, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Validates an optional provider override.
///
/// `undefined` and `null` mean "no override"; anything else must be callable.
pub fn provider_override(value: &JsValue) -> Result<Option<Function>> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    value
        .dyn_ref::<Function>()
        .cloned()
        .map(Some)
        .ok_or_else(|| Error::invalid_argument(Argument::ProviderOverride))
}

/// Returns the global window if it exposes `matchMedia`.
fn native_window() -> Option<web_sys::Window> {
    let window = web_sys::window()?;
    Reflect::has(&window, &JsValue::from_str("matchMedia"))
        .unwrap_or(false)
        .then_some(window)
}

/// The provider chosen for one registration.
pub enum WebProvider {
    /// `window.matchMedia`.
    Native(web_sys::Window),
    /// A caller-supplied `(query) => MediaQueryList-like` function.
    Override(Function),
}

impl WebProvider {
    /// Picks the native provider if present, else the override.
    pub fn resolve(override_fn: Option<Function>) -> Result<Self> {
        if let Some(window) = native_window() {
            return Ok(WebProvider::Native(window));
        }
        override_fn
            .map(WebProvider::Override)
            .ok_or(Error::ProviderUnavailable)
    }

    /// Returns true for the native provider.
    pub fn is_native(&self) -> bool {
        matches!(self, WebProvider::Native(_))
    }
}

impl MediaQueryProvider for WebProvider {
    type List = WebQueryList;

    fn match_media(&self, query: &str) -> Result<WebQueryList> {
        let target = match self {
            WebProvider::Native(window) => match window.match_media(query) {
                Ok(Some(list)) => ListTarget::Native(list),
                Ok(None) => return Err(Error::query_rejected(query, "matchMedia returned null")),
                Err(e) => return Err(Error::query_rejected(query, describe(&e))),
            },
            WebProvider::Override(f) => match f.call1(&JsValue::NULL, &JsValue::from_str(query)) {
                Ok(list) if list.is_object() => ListTarget::Override(list),
                Ok(_) => return Err(Error::query_rejected(query, "override did not return an object")),
                Err(e) => return Err(Error::query_rejected(query, describe(&e))),
            },
        };
        Ok(WebQueryList {
            target,
            bound: RefCell::new(Vec::new()),
        })
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| String::from("provider threw"))
}

enum ListTarget {
    Native(web_sys::MediaQueryList),
    Override(JsValue),
}

/// A JavaScript media-query list.
///
/// Each core [`Listener`] is bridged through one JS closure, owned here
/// while attached and leaked on removal so stale calls stay harmless.
pub struct WebQueryList {
    target: ListTarget,
    bound: RefCell<Vec<(Listener, Closure<dyn FnMut()>)>>,
}

impl WebQueryList {
    fn call_method(&self, name: &str, closure: &Closure<dyn FnMut()>) {
        match &self.target {
            ListTarget::Native(list) => {
                let f: &Function = closure.as_ref().unchecked_ref();
                if name == "addListener" {
                    list.add_listener_with_opt_callback(Some(f)).ok();
                } else {
                    list.remove_listener_with_opt_callback(Some(f)).ok();
                }
            }
            ListTarget::Override(obj) => {
                if let Some(method) = Reflect::get(obj, &JsValue::from_str(name))
                    .ok()
                    .and_then(|m| m.dyn_into::<Function>().ok())
                {
                    method.call1(obj, closure.as_ref()).ok();
                }
            }
        }
    }
}

impl MediaQueryList for WebQueryList {
    fn matches(&self) -> bool {
        match &self.target {
            ListTarget::Native(list) => list.matches(),
            ListTarget::Override(obj) => {
                let value = Reflect::get(obj, &JsValue::from_str("matches")).unwrap_or(JsValue::FALSE);
                match value.dyn_ref::<Function>() {
                    Some(f) => f.call0(obj).ok().and_then(|v| v.as_bool()).unwrap_or(false),
                    None => value.is_truthy(),
                }
            }
        }
    }

    fn add_listener(&self, listener: &Listener) {
        let handler = listener.clone();
        let closure = Closure::wrap(Box::new(move || handler.call()) as Box<dyn FnMut()>);
        self.call_method("addListener", &closure);
        self.bound.borrow_mut().push((listener.clone(), closure));
    }

    fn remove_listener(&self, listener: &Listener) {
        let position = self
            .bound
            .borrow()
            .iter()
            .position(|(l, _)| l.same_as(listener));
        if let Some(index) = position {
            let (_, closure) = self.bound.borrow_mut().remove(index);
            self.call_method("removeListener", &closure);
            // Lists may keep and fire a handler after removal; the listener
            // is a no-op by then, but the JS function must stay callable.
            closure.forget();
        }
    }
}
