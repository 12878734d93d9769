/// Ports module - the interfaces (traits) between the dispatcher logic and the
/// platform it runs on.
///
/// The domain layer only talks to these traits; browser and native adapters
/// provide the implementations.

pub mod logger;
pub mod notifier;

pub use logger::LoggerPort;
pub use notifier::{DisplayedNotification, NotificationPort, WindowPort};
