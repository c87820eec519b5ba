//! Transient notification queue.
//!
//! Toasts are appended and removed independently of each other: a timeout
//! or manual dismissal only ever touches its own entry.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::{RwSignal, Update};
use uuid::Uuid;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// CSS modifier class for the toast card.
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }
}

/// A single notification entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub auto_dismiss: bool,
}

/// Process-wide notification queue, provided as a signal from the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, auto_dismiss: bool) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            auto_dismiss,
        });
        id
    }

    /// Remove the toast with the given id, if still present.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// How long an auto-dismissing toast stays on screen.
#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u64 = 4_000;

/// Push a toast and schedule its auto-dismissal.
pub fn show(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = Uuid::nil();
    let message = message.into();
    toasts.update(|state| id = state.push(kind, message, true));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Success, message);
}

pub fn error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Error, message);
}
