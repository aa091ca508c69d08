//! Argument validation and conversion between JavaScript and Rust.

use alloc::string::ToString;
use js_sys::{Array, Function, Object};
use responder_core::{Argument, Error, QueryMap, Result};
use wasm_bindgen::prelude::*;

/// Converts a `{ [query]: value }` object into a query map.
///
/// The argument must be a non-null object; entries keep the object's own
/// enumeration order.
pub fn js_to_query_map(values: &JsValue) -> Result<QueryMap<JsValue>> {
    if !values.is_object() {
        return Err(Error::invalid_argument(Argument::Values));
    }
    let object: &Object = values.unchecked_ref();
    Object::entries(object)
        .iter()
        .map(|entry| {
            let pair: Array = entry.unchecked_into();
            let query = pair
                .get(0)
                .as_string()
                .ok_or_else(|| Error::invalid_argument(Argument::Values))?;
            Ok((query, pair.get(1)))
        })
        .collect()
}

/// Validates the change callback.
pub fn js_to_callback(callback: &JsValue) -> Result<Function> {
    callback
        .dyn_ref::<Function>()
        .cloned()
        .ok_or_else(|| Error::invalid_argument(Argument::Callback))
}

/// Converts matching values into the array handed to the callback.
pub fn values_to_js_array(values: &[JsValue]) -> Array {
    values.iter().collect()
}

/// Converts an error into a thrown JavaScript `Error`.
pub fn error_to_js(err: Error) -> JsValue {
    JsError::new(&err.to_string()).into()
}

/// Reads an optional legacy identifier.
///
/// Anything other than a non-negative integer is treated as absent.
pub fn js_to_instance_id(id: Option<f64>) -> Option<u64> {
    id.filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
        .map(|v| v as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn object(pairs: &[(&str, &str)]) -> JsValue {
        let obj = Object::new();
        for (k, v) in pairs {
            js_sys::Reflect::set(&obj, &JsValue::from_str(k), &JsValue::from_str(v)).unwrap();
        }
        obj.into()
    }

    #[wasm_bindgen_test]
    fn test_query_map_keeps_order() {
        let values = object(&[("(min-width: 100px)", "A"), ("(max-width: 50px)", "B")]);
        let map = js_to_query_map(&values).unwrap();

        let queries: Vec<_> = map.queries().collect();
        assert_eq!(queries, alloc::vec!["(min-width: 100px)", "(max-width: 50px)"]);
        assert_eq!(map.get("(max-width: 50px)").and_then(|v| v.as_string()), Some("B".into()));
    }

    #[wasm_bindgen_test]
    fn test_invalid_values() {
        for bad in [JsValue::NULL, JsValue::UNDEFINED, JsValue::from_str("(print)"), JsValue::from_f64(1.0)] {
            assert_eq!(
                js_to_query_map(&bad).err(),
                Some(Error::invalid_argument(Argument::Values))
            );
        }
    }

    #[wasm_bindgen_test]
    fn test_invalid_callback() {
        assert!(js_to_callback(&JsValue::from_str("not a function")).is_err());
        assert!(js_to_callback(&Object::new().into()).is_err());
        assert!(js_to_callback(&Function::new_no_args("").into()).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_instance_id() {
        assert_eq!(js_to_instance_id(Some(3.0)), Some(3));
        assert_eq!(js_to_instance_id(Some(-1.0)), None);
        assert_eq!(js_to_instance_id(Some(1.5)), None);
        assert_eq!(js_to_instance_id(None), None);
    }

    #[wasm_bindgen_test]
    fn test_values_to_js_array() {
        let arr = values_to_js_array(&[JsValue::from_str("A"), JsValue::from_f64(2.0)]);
        assert_eq!(arr.length(), 2);
        assert_eq!(arr.get(0).as_string(), Some("A".into()));
    }
}
