use crate::domain::dispatch::DispatchError;
use wasm_bindgen::JsCast;
use web_sys::ServiceWorkerGlobalScope;

pub fn service_worker_scope() -> Result<ServiceWorkerGlobalScope, DispatchError> {
    js_sys::global()
        .dyn_into::<ServiceWorkerGlobalScope>()
        .map_err(|_| DispatchError::scope_unavailable("ServiceWorkerGlobalScope not found"))
}
