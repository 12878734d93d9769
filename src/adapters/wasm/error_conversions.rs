use crate::domain::dispatch::DispatchError;
use wasm_bindgen::JsValue;

/// Conversion from a rejected promise or thrown JS value.
impl From<JsValue> for DispatchError {
    fn from(err: JsValue) -> Self {
        let message = err
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| "Unknown JavaScript error".to_string());
        DispatchError::platform(message)
    }
}

/// Conversion from DispatchError to JsValue for WASM boundary
impl From<DispatchError> for JsValue {
    fn from(error: DispatchError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_service_worker);

    #[wasm_bindgen_test]
    fn test_string_rejection() {
        let error = DispatchError::from(JsValue::from_str("blocked"));
        assert_eq!(error, DispatchError::platform("blocked"));
    }

    #[wasm_bindgen_test]
    fn test_error_object_rejection() {
        let js_error: JsValue = js_sys::Error::new("permission denied").into();
        let error = DispatchError::from(js_error);
        assert_eq!(error, DispatchError::platform("permission denied"));
    }

    #[wasm_bindgen_test]
    fn test_unknown_rejection() {
        let error = DispatchError::from(JsValue::NULL);
        assert_eq!(error, DispatchError::platform("Unknown JavaScript error"));
    }

    #[wasm_bindgen_test]
    fn test_into_js_value() {
        let value: JsValue = DispatchError::MissingPayload.into();
        assert_eq!(value.as_string().unwrap(), "Push event carried no payload");
    }
}
