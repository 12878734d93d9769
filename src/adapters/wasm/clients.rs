use futures::FutureExt;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clients, ServiceWorkerGlobalScope};

use crate::domain::dispatch::{DispatchError, PendingOperation};
use crate::ports::WindowPort;

/// Opens windows through the worker's `Clients` interface.
#[derive(Clone)]
pub struct WindowOpener {
    clients: Clients,
}

impl WindowOpener {
    pub fn new(clients: Clients) -> Self {
        Self { clients }
    }

    pub fn from_scope(scope: &ServiceWorkerGlobalScope) -> Self {
        Self::new(scope.clients())
    }
}

impl WindowPort for WindowOpener {
    fn open_window(&self, url: &str) -> PendingOperation {
        let promise = self.clients.open_window(url);
        async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(DispatchError::from)
        }
        .boxed_local()
    }
}
