/// Process-wide dispatcher configuration.
///
/// Readers get an `Arc` snapshot, so a replacement never affects an event
/// that is already being handled.
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::domain::dispatch::{validate_config, DispatchError, DispatcherConfig};

static CONFIG: Lazy<RwLock<Arc<DispatcherConfig>>> =
    Lazy::new(|| RwLock::new(Arc::new(DispatcherConfig::default())));

pub fn current_config() -> Arc<DispatcherConfig> {
    CONFIG.read().clone()
}

/// Validates and installs a new configuration. On error the active
/// configuration is left untouched.
pub fn replace_config(config: DispatcherConfig) -> Result<(), DispatchError> {
    validate_config(&config)?;
    *CONFIG.write() = Arc::new(config);
    Ok(())
}

pub fn reset_config() {
    *CONFIG.write() = Arc::new(DispatcherConfig::default());
}
