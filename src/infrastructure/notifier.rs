//! Shell Notifier
//!
//! Routes controller notifications to the host shell: toasts go to a render
//! callback, submit/delete callbacks bump the shared [`RefreshTrigger`] that
//! the history view watches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{Notifier, ToastKind};

/// Monotonic counter owned by the shell. Any change asks the history view to
/// refetch.
#[derive(Debug, Clone, Default)]
pub struct RefreshTrigger(Arc<AtomicU64>);

impl RefreshTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Advance the counter and return the new value.
    pub fn bump(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

pub struct ShellNotifier<F> {
    render: F,
    refresh: RefreshTrigger,
}

impl<F: Fn(&str, ToastKind)> ShellNotifier<F> {
    pub fn new(render: F, refresh: RefreshTrigger) -> Self {
        Self { render, refresh }
    }

    pub fn refresh_trigger(&self) -> &RefreshTrigger {
        &self.refresh
    }
}

impl<F: Fn(&str, ToastKind)> Notifier for ShellNotifier<F> {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        debug!(kind = kind.as_str(), message, "toast");
        (self.render)(message, kind);
    }

    fn check_submitted(&self) {
        let value = self.refresh.bump();
        debug!(trigger = value, "check submitted; history refresh requested");
    }

    fn check_deleted(&self) {
        let value = self.refresh.bump();
        debug!(trigger = value, "check deleted; history refresh requested");
    }
}
