use crate::color::ColorItem;
use crate::current::CurrentColor;

/// Requests a UI surface can send to the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    // Workspace color
    Apply(ColorItem),
    Reset,

    // Palette
    Add { name: String, color: String },
    Edit { original: ColorItem, updated: ColorItem },
    Delete(ColorItem),

    // Recent colors
    EditRecent { original: ColorItem, updated: ColorItem },
    DeleteRecent(ColorItem),
    ClearRecent,

    // Other
    Refresh,
}

impl Request {
    /// Whether the user must confirm before the request runs
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Request::Delete(_) | Request::DeleteRecent(_) | Request::ClearRecent | Request::Reset
        )
    }
}

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Message for the user about how a request went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    /// Whether the request did not go through, warnings included
    pub fn is_failure(&self) -> bool {
        self.level != NotificationLevel::Info
    }
}

/// Result of handling a request, ready for re-rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// `None` when nothing happened, e.g. a declined confirmation
    pub notification: Option<Notification>,
    pub current: CurrentColor,
}

impl Response {
    pub fn is_failure(&self) -> bool {
        self.notification.as_ref().is_some_and(Notification::is_failure)
    }
}
