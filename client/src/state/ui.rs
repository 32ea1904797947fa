//! Local UI chrome state (sidebar, toast notifications).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so pages can
//! surface failures uniformly: every non-401 API failure becomes a toast
//! with its class's fixed message, and the pages decide nothing else.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use api::error::ApiFailure;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// UI state for chrome and notifications.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub sidebar_collapsed: bool,
    toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Queue a toast; returns its id for dismissal.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Queue the fixed per-class message for an API failure.
    pub fn push_failure(&mut self, failure: &ApiFailure) -> u64 {
        self.push_toast(ToastKind::Error, failure.user_message())
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
