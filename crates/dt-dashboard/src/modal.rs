//! Modal dialogs.

use serde::Serialize;

/// Which dialog an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    Login,
    ForcePasswordChange,
    SnapshotNotification,
    Informational,
    GenericError,
}

/// A dialog with its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "modal", content = "message", rename_all = "snake_case")]
pub enum Modal {
    Login,
    ForcePasswordChange,
    SnapshotNotification,
    Info(String),
    GenericError(String),
}

impl Modal {
    #[must_use]
    pub const fn kind(&self) -> ModalKind {
        match self {
            Self::Login => ModalKind::Login,
            Self::ForcePasswordChange => ModalKind::ForcePasswordChange,
            Self::SnapshotNotification => ModalKind::SnapshotNotification,
            Self::Info(_) => ModalKind::Informational,
            Self::GenericError(_) => ModalKind::GenericError,
        }
    }

    /// Text shown in the dialog body, for the dialogs that carry one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Info(message) | Self::GenericError(message) => Some(message),
            _ => None,
        }
    }
}

/// One step of a flow's effect on the dialogs, applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ModalEvent {
    Show { modal: Modal },
    Hide { kind: ModalKind },
}

impl ModalEvent {
    #[must_use]
    pub const fn show(modal: Modal) -> Self {
        Self::Show { modal }
    }

    #[must_use]
    pub const fn hide(kind: ModalKind) -> Self {
        Self::Hide { kind }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::show(Modal::Info(message.into()))
    }
}
