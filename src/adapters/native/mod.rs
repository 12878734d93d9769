/// Native adapters - implementations for native Rust (non-WASM).

pub mod console_logger;
pub mod notification_center;

pub use console_logger::ConsoleLogger;
pub use notification_center::{CenterEvent, NotificationCenter, RecordedNotification};
