use futures::FutureExt;

use super::error::DispatchError;
use super::types::{
    DispatcherConfig, NotificationIcon, NotificationRequest, OpenWindowRequest, PendingOperation,
};
use crate::debug_log;
use crate::platform::Platform;
use crate::ports::{DisplayedNotification, NotificationPort, WindowPort};

pub const SUCCESS_MARKER: &str = "Finished importing";
pub const FAILURE_MARKER: &str = "failed";

/// Picks the icon for a push message. Matching is case-sensitive and the
/// success marker wins over the failure marker.
pub fn select_icon(message: &str) -> NotificationIcon {
    if message.contains(SUCCESS_MARKER) {
        NotificationIcon::Success
    } else if message.contains(FAILURE_MARKER) {
        NotificationIcon::Failure
    } else {
        NotificationIcon::Default
    }
}

/// Builds the notification for a push payload. An absent or empty payload
/// yields [`DispatchError::MissingPayload`].
pub fn plan_push(
    config: &DispatcherConfig,
    payload: Option<&str>,
) -> Result<NotificationRequest, DispatchError> {
    let message = payload
        .filter(|text| !text.is_empty())
        .ok_or(DispatchError::MissingPayload)?;

    let icon = select_icon(message);

    Ok(NotificationRequest {
        title: config.title.clone(),
        body: message.to_string(),
        icon: config.icons.path(icon).to_string(),
    })
}

pub fn plan_click(config: &DispatcherConfig) -> OpenWindowRequest {
    OpenWindowRequest {
        url: config.open_url.clone(),
    }
}

/// Handles one push delivery.
///
/// Returns `None` when nothing was displayed. Otherwise the returned
/// operation settles once the platform has shown (or refused to show) the
/// notification.
pub fn dispatch_push(
    platform: &Platform,
    notifier: &dyn NotificationPort,
    payload: Option<&str>,
) -> Option<PendingOperation> {
    debug_log!(platform, "[Service Worker] Push Received.");

    let request = match plan_push(platform.config(), payload) {
        Ok(request) => request,
        Err(e) => {
            platform
                .logger()
                .warn(&format!("Skipping notification: {e}"));
            return None;
        }
    };

    debug_log!(
        platform,
        "[Service Worker] Push had this data: \"{}\"",
        request.body
    );

    let pending = notifier.show_notification(&request);
    Some(report_failure(platform, "show notification", pending))
}

/// Handles a click on a displayed notification: opens the configured URL,
/// then dismisses the notification without waiting for the window.
pub fn dispatch_notification_click(
    platform: &Platform,
    windows: &dyn WindowPort,
    notification: &dyn DisplayedNotification,
) -> PendingOperation {
    let request = plan_click(platform.config());

    debug_log!(platform, "[Service Worker] Opening {}", request.url);

    let pending = windows.open_window(&request.url);
    notification.close();

    report_failure(platform, "open window", pending)
}

fn report_failure(
    platform: &Platform,
    action: &'static str,
    pending: PendingOperation,
) -> PendingOperation {
    let logger = platform.logger();
    async move {
        pending.await.map_err(|e| {
            logger.error(&format!("Failed to {action}: {e}"));
            e
        })
    }
    .boxed_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dispatch::types::{
        DEFAULT_ICON_PATH, FAILURE_ICON_PATH, SUCCESS_ICON_PATH,
    };

    #[test]
    fn test_select_icon_success() {
        assert_eq!(
            select_icon("Finished importing 42 records"),
            NotificationIcon::Success
        );
    }

    #[test]
    fn test_select_icon_failure() {
        assert_eq!(select_icon("Import failed: timeout"), NotificationIcon::Failure);
    }

    #[test]
    fn test_select_icon_success_wins_over_failure() {
        assert_eq!(
            select_icon("Finished importing, 3 rows failed"),
            NotificationIcon::Success
        );
    }

    #[test]
    fn test_select_icon_is_case_sensitive() {
        assert_eq!(select_icon("finished importing db"), NotificationIcon::Default);
        assert_eq!(select_icon("Import FAILED"), NotificationIcon::Default);
        assert_eq!(select_icon("Failed to import"), NotificationIcon::Default);
    }

    #[test]
    fn test_select_icon_default() {
        assert_eq!(select_icon("Import started"), NotificationIcon::Default);
    }

    #[test]
    fn test_plan_push_keeps_body_verbatim() {
        let config = DispatcherConfig::default();
        let body = "  Import failed:\n\tdisk full  ";

        let request = plan_push(&config, Some(body)).unwrap();

        assert_eq!(request.title, "CloudDB");
        assert_eq!(request.body, body);
        assert_eq!(request.icon, FAILURE_ICON_PATH);
    }

    #[test]
    fn test_plan_push_icons() {
        let config = DispatcherConfig::default();

        let success = plan_push(&config, Some("Finished importing 42 records")).unwrap();
        let default = plan_push(&config, Some("Import started")).unwrap();

        assert_eq!(success.icon, SUCCESS_ICON_PATH);
        assert_eq!(default.icon, DEFAULT_ICON_PATH);
    }

    #[test]
    fn test_plan_push_missing_payload() {
        let config = DispatcherConfig::default();

        assert_eq!(plan_push(&config, None), Err(DispatchError::MissingPayload));
        assert_eq!(
            plan_push(&config, Some("")),
            Err(DispatchError::MissingPayload)
        );
    }

    #[test]
    fn test_plan_push_uses_configured_title_and_icons() {
        let mut config = DispatcherConfig::default();
        config.title = "CloudDB staging".to_string();
        config.icons.success = "/static/ok.svg".to_string();

        let request = plan_push(&config, Some("Finished importing dump.sql")).unwrap();

        assert_eq!(request.title, "CloudDB staging");
        assert_eq!(request.icon, "/static/ok.svg");
    }

    #[test]
    fn test_plan_click_uses_open_url() {
        let request = plan_click(&DispatcherConfig::default());
        assert_eq!(request.url, "http://localhost:7010");
    }
}
