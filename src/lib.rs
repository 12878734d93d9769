#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod ports;
pub mod platform;

pub mod diagnostics;
pub mod facades;
#[cfg(target_arch = "wasm32")]
pub mod global;

// Re-exports for testing
pub use domain::dispatch::{
    DispatchError, DispatcherConfig, IconSet, NotificationIcon, NotificationRequest,
    OpenWindowRequest,
};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
