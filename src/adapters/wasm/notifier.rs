use futures::future;
use futures::FutureExt;
use wasm_bindgen_futures::JsFuture;
use web_sys::{NotificationOptions, ServiceWorkerGlobalScope, ServiceWorkerRegistration};

use crate::domain::dispatch::{DispatchError, NotificationRequest, PendingOperation};
use crate::ports::{DisplayedNotification, NotificationPort};

/// Shows notifications through the worker's `ServiceWorkerRegistration`.
#[derive(Clone)]
pub struct RegistrationNotifier {
    registration: ServiceWorkerRegistration,
}

impl RegistrationNotifier {
    pub fn new(registration: ServiceWorkerRegistration) -> Self {
        Self { registration }
    }

    pub fn from_scope(scope: &ServiceWorkerGlobalScope) -> Self {
        Self::new(scope.registration())
    }
}

impl NotificationPort for RegistrationNotifier {
    fn show_notification(&self, request: &NotificationRequest) -> PendingOperation {
        let options = NotificationOptions::new();
        options.set_body(&request.body);
        options.set_icon(&request.icon);

        match self
            .registration
            .show_notification_with_options(&request.title, &options)
        {
            Ok(promise) => async move {
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(DispatchError::from)
            }
            .boxed_local(),
            Err(e) => future::ready(Err(DispatchError::from(e))).boxed_local(),
        }
    }
}

impl DisplayedNotification for web_sys::Notification {
    fn close(&self) {
        web_sys::Notification::close(self);
    }
}
