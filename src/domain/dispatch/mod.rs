pub mod error;
pub mod operations;
pub mod types;
pub mod validation;

pub use error::DispatchError;
pub use operations::{
    dispatch_notification_click, dispatch_push, plan_click, plan_push, select_icon,
};
pub use types::{
    DispatcherConfig, IconSet, NotificationIcon, NotificationRequest, OpenWindowRequest,
    PendingOperation,
};
pub use validation::{validate_config, validate_open_url};
