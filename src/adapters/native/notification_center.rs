use std::cell::RefCell;
use std::rc::Rc;

use futures::future;
use futures::FutureExt;

use crate::domain::dispatch::{DispatchError, NotificationRequest, PendingOperation};
use crate::ports::{DisplayedNotification, NotificationPort, WindowPort};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CenterEvent {
    Shown(NotificationRequest),
    Opened(String),
    Closed,
}

/// In-memory notification center (native).
///
/// There is no system notification area outside the browser, so every call is
/// recorded instead. A failing center records the call and then rejects it,
/// the way a browser does when permission has been revoked.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    events: Rc<RefCell<Vec<CenterEvent>>>,
    failure: Option<String>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            events: Rc::default(),
            failure: Some(reason.into()),
        }
    }

    /// A notification owned by this center, as delivered with a click event.
    pub fn displayed(&self) -> RecordedNotification {
        RecordedNotification {
            events: Rc::clone(&self.events),
            closed: Rc::default(),
        }
    }

    pub fn events(&self) -> Vec<CenterEvent> {
        self.events.borrow().clone()
    }

    pub fn shown(&self) -> Vec<NotificationRequest> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                CenterEvent::Shown(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn opened(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                CenterEvent::Opened(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    fn settle(&self) -> PendingOperation {
        let result = match &self.failure {
            Some(reason) => Err(DispatchError::platform(reason.clone())),
            None => Ok(()),
        };
        future::ready(result).boxed_local()
    }
}

impl NotificationPort for NotificationCenter {
    fn show_notification(&self, request: &NotificationRequest) -> PendingOperation {
        self.events
            .borrow_mut()
            .push(CenterEvent::Shown(request.clone()));
        self.settle()
    }
}

impl WindowPort for NotificationCenter {
    fn open_window(&self, url: &str) -> PendingOperation {
        self.events
            .borrow_mut()
            .push(CenterEvent::Opened(url.to_string()));
        self.settle()
    }
}

#[derive(Clone)]
pub struct RecordedNotification {
    events: Rc<RefCell<Vec<CenterEvent>>>,
    closed: Rc<RefCell<bool>>,
}

impl RecordedNotification {
    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }
}

impl DisplayedNotification for RecordedNotification {
    fn close(&self) {
        *self.closed.borrow_mut() = true;
        self.events.borrow_mut().push(CenterEvent::Closed);
    }
}
