/// Native Rust facade for the notification dispatcher
/// Runs the dispatcher against the in-memory notification center
use futures::executor::block_on;

use crate::adapters::native::NotificationCenter;
use crate::domain::dispatch::{self, DispatchError, DispatcherConfig};
use crate::platform::Platform;
use crate::ports::DisplayedNotification;

pub struct Dispatcher {
    platform: Platform,
    center: NotificationCenter,
}

impl Dispatcher {
    /// Create a dispatcher using the active configuration
    pub fn new(center: NotificationCenter) -> Self {
        Self {
            platform: Platform::new(),
            center,
        }
    }

    pub fn with_config(config: DispatcherConfig, center: NotificationCenter) -> Self {
        Self {
            platform: Platform::with_config(config),
            center,
        }
    }

    pub fn center(&self) -> &NotificationCenter {
        &self.center
    }

    /// Handle a push delivery and wait for the notification to settle.
    ///
    /// Returns `Ok(false)` when the payload was absent and nothing was shown.
    pub fn push(&self, payload: Option<&str>) -> Result<bool, DispatchError> {
        match dispatch::dispatch_push(&self.platform, &self.center, payload) {
            Some(pending) => block_on(pending).map(|_| true),
            None => Ok(false),
        }
    }

    /// Handle a click on `notification` and wait for the window to open.
    pub fn click(&self, notification: &dyn DisplayedNotification) -> Result<(), DispatchError> {
        block_on(dispatch::dispatch_notification_click(
            &self.platform,
            &self.center,
            notification,
        ))
    }
}

