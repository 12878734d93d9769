/// WASM adapters - implementations using browser APIs.

pub mod clients;
pub mod console_logger;
pub mod error_conversions;
pub mod notifier;

pub use clients::WindowOpener;
pub use console_logger::ConsoleLogger;
pub use notifier::RegistrationNotifier;
