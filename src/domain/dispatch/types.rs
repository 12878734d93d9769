use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use super::error::DispatchError;

pub const DEFAULT_TITLE: &str = "CloudDB";
pub const DEFAULT_OPEN_URL: &str = "http://localhost:7010";
pub const DEFAULT_ICON_PATH: &str = "/res/icon-192.png";
pub const SUCCESS_ICON_PATH: &str = "/res/success.png";
pub const FAILURE_ICON_PATH: &str = "/res/failure.png";

/// An asynchronous platform call that has already been issued.
///
/// Handlers hand these back instead of awaiting them so the caller decides
/// how to keep the worker alive while they settle.
pub type PendingOperation = LocalBoxFuture<'static, Result<(), DispatchError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationIcon {
    Default,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconSet {
    pub default: String,
    pub success: String,
    pub failure: String,
}

impl IconSet {
    pub fn path(&self, icon: NotificationIcon) -> &str {
        match icon {
            NotificationIcon::Default => &self.default,
            NotificationIcon::Success => &self.success,
            NotificationIcon::Failure => &self.failure,
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            default: DEFAULT_ICON_PATH.to_string(),
            success: SUCCESS_ICON_PATH.to_string(),
            failure: FAILURE_ICON_PATH.to_string(),
        }
    }
}

/// Settings of the dispatcher. Every field falls back to the built-in
/// default when missing from a deserialized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DispatcherConfig {
    pub title: String,
    pub open_url: String,
    pub icons: IconSet,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            open_url: DEFAULT_OPEN_URL.to_string(),
            icons: IconSet::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenWindowRequest {
    pub url: String,
}
