use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::adapters::{current_config, replace_config, reset_config};
use crate::domain::dispatch::DispatcherConfig;

/// Replaces the dispatcher configuration. Missing fields take their default
/// value; an invalid configuration is rejected and the active one is kept.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: DispatcherConfig = from_value(config)?;
    replace_config(config)?;
    Ok(())
}

#[wasm_bindgen]
pub fn current_configuration() -> Result<JsValue, JsValue> {
    to_value(&*current_config()).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn reset_configuration() {
    reset_config();
}
