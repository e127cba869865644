//! Command handlers for the `fleetcheck` binary.

pub mod delete;
pub mod history;
pub mod interactive;
pub mod submit;
pub mod vehicles;

use fleetcheck::{RefreshTrigger, ShellNotifier, ToastKind};

use crate::ui::blocks::toast::render_toast;
use crate::ui::context::UiContext;

/// Notifier that prints toasts to stderr (suppressed in JSON mode) and bumps
/// `refresh` when a record is created or deleted.
pub(crate) fn toast_notifier(
    ui: &UiContext,
    refresh: RefreshTrigger,
) -> ShellNotifier<impl Fn(&str, ToastKind)> {
    let (json, color, unicode) = (ui.json, ui.color, ui.unicode);
    ShellNotifier::new(
        move |message: &str, kind: ToastKind| {
            if !json {
                eprintln!("{}", render_toast(message, kind, color, unicode));
            }
        },
        refresh,
    )
}
