//! Notifier Port
//!
//! Everything the controllers tell their host: toast messages plus the
//! "a check was submitted" / "a check was deleted" callbacks. The host decides
//! what to do with them (print a toast, bump the history refresh trigger, ...).

use std::sync::Arc;

/// Toast flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

pub trait Notifier {
    /// Fire-and-forget user notification.
    fn show_toast(&self, message: &str, kind: ToastKind);

    /// A new check was created.
    fn check_submitted(&self) {}

    /// A check was deleted.
    fn check_deleted(&self) {}
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        (**self).show_toast(message, kind)
    }

    fn check_submitted(&self) {
        (**self).check_submitted()
    }

    fn check_deleted(&self) {
        (**self).check_deleted()
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        (**self).show_toast(message, kind)
    }

    fn check_submitted(&self) {
        (**self).check_submitted()
    }

    fn check_deleted(&self) {
        (**self).check_deleted()
    }
}

/// Notifier that drops everything.
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn show_toast(&self, _message: &str, _kind: ToastKind) {}
}
