//! Transient user notifications ("toasts").

use serde::Serialize;

use crate::domain::form::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Destructive,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Destructive => "destructive",
        }
    }
}

/// A one-shot message shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn new(kind: NotificationKind, title: &str, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
        }
    }

    pub fn shortened(count: usize) -> Self {
        Self::new(
            NotificationKind::Success,
            "Success!",
            format!("{} URL(s) shortened successfully", count),
        )
    }

    pub fn copied() -> Self {
        Self::new(
            NotificationKind::Success,
            "Copied!",
            "Short URL copied to clipboard",
        )
    }

    pub fn copy_failed() -> Self {
        Self::new(
            NotificationKind::Destructive,
            "Copy failed",
            "Unable to copy to clipboard",
        )
    }
}

impl From<&FormError> for Notification {
    fn from(err: &FormError) -> Self {
        match err {
            FormError::NoValidEntries => {
                Self::new(NotificationKind::Destructive, "Validation Error", err.to_string())
            }
            FormError::ExpiryOutOfRange { .. } => Self::new(
                NotificationKind::Destructive,
                "Error",
                "Failed to shorten URLs. Please try again.",
            ),
        }
    }
}
