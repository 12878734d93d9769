//! Composition root: binds the dispatcher to the service worker events.
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{ExtendableEvent, NotificationEvent, PushEvent};

use crate::adapters::wasm::{RegistrationNotifier, WindowOpener};
use crate::domain::dispatch::{self, PendingOperation};
use crate::global::service_worker_scope;
use crate::platform::Platform;

/// Registers the `push` and `notificationclick` listeners on the worker scope.
///
/// Must run during the worker's initial script evaluation, otherwise the
/// browser ignores the listeners. When the module is loaded asynchronously use
/// a JS shim that forwards to [`on_push`] and [`on_notification_click`].
#[wasm_bindgen]
pub fn install_service_worker() -> Result<(), JsValue> {
    let scope = service_worker_scope()?;

    let push_listener = Closure::wrap(Box::new(move |event: PushEvent| {
        if let Err(e) = on_push(event) {
            report_listener_error("push", e);
        }
    }) as Box<dyn FnMut(PushEvent)>);
    scope.add_event_listener_with_callback("push", push_listener.as_ref().unchecked_ref())?;
    // Listeners live as long as the worker.
    push_listener.forget();

    let click_listener = Closure::wrap(Box::new(move |event: NotificationEvent| {
        if let Err(e) = on_notification_click(event) {
            report_listener_error("notificationclick", e);
        }
    }) as Box<dyn FnMut(NotificationEvent)>);
    scope.add_event_listener_with_callback(
        "notificationclick",
        click_listener.as_ref().unchecked_ref(),
    )?;
    click_listener.forget();

    Platform::new()
        .logger()
        .log("[Service Worker] Push and notification listeners installed");
    Ok(())
}

#[wasm_bindgen]
pub fn on_push(event: PushEvent) -> Result<(), JsValue> {
    let platform = Platform::new();
    let scope = service_worker_scope()?;
    let notifier = RegistrationNotifier::from_scope(&scope);

    let payload = event.data().map(|data| data.text());

    match dispatch::dispatch_push(&platform, &notifier, payload.as_deref()) {
        Some(pending) => hold_open(&event, pending),
        None => Ok(()),
    }
}

#[wasm_bindgen]
pub fn on_notification_click(event: NotificationEvent) -> Result<(), JsValue> {
    let platform = Platform::new();
    let scope = service_worker_scope()?;
    let opener = WindowOpener::from_scope(&scope);
    let notification = event.notification();

    let pending = dispatch::dispatch_notification_click(&platform, &opener, &notification);
    hold_open(&event, pending)
}

/// Keeps the worker alive until `pending` settles. A failure rejects the
/// promise handed to `waitUntil`.
fn hold_open(event: &ExtendableEvent, pending: PendingOperation) -> Result<(), JsValue> {
    let promise = future_to_promise(async move {
        pending
            .await
            .map(|_| JsValue::UNDEFINED)
            .map_err(JsValue::from)
    });
    event.wait_until(&promise)
}

fn report_listener_error(event_name: &str, error: JsValue) {
    let message = error
        .as_string()
        .unwrap_or_else(|| format!("{:?}", error));
    Platform::new()
        .logger()
        .error(&format!("[Service Worker] {event_name} handler failed: {message}"));
}
