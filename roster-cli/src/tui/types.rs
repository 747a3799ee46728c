use std::time::{Duration, Instant};

use roster_api::{Employee, EmployeeFields};

/// How long a notification stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// State of the employee list fetch
#[derive(Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient status line message
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}

pub enum Action {
    Refresh,
    LoadDetail(i64),
    Create(EmployeeFields),
    Update { id: i64, fields: EmployeeFields },
    Delete(i64),
}

pub enum ActionResult {
    Refreshed(Result<Vec<Employee>, String>),
    DetailLoaded(Result<Employee, String>),
    Created(Result<Employee, String>),
    Updated(Result<Employee, String>),
    Deleted(i64, Result<(), String>),
}
