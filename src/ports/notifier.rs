use crate::domain::dispatch::{NotificationRequest, PendingOperation};

/// Displays system notifications.
///
/// The platform call must be issued before this returns; the returned
/// operation only reports how it settled.
pub trait NotificationPort {
    fn show_notification(&self, request: &NotificationRequest) -> PendingOperation;
}

/// Opens or focuses an application window.
///
/// Same contract as [`NotificationPort`]: the call is already in flight when
/// the pending operation is handed back.
pub trait WindowPort {
    fn open_window(&self, url: &str) -> PendingOperation;
}

/// A notification that was shown by the platform and can be dismissed.
pub trait DisplayedNotification {
    fn close(&self);
}
