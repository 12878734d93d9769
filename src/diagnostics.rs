use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

/// Logs through the platform logger only while debug mode is on.
#[macro_export]
macro_rules! debug_log {
    ($platform:expr, $($arg:tt)*) => {{
        if $crate::diagnostics::is_debug_mode() {
            $platform.logger().log(&format!($($arg)*));
        }
    }};
}

pub use crate::debug_log;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_debug_mode() {
        set_debug_mode(true);
        assert!(is_debug_mode());
        set_debug_mode(false);
        assert!(!is_debug_mode());
    }
}
