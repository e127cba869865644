use fleetcheck::ToastKind;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One-line toast: status icon plus message.
pub fn render_toast(message: &str, kind: ToastKind, supports_color: bool, supports_unicode: bool) -> String {
    let (icon, text) = match kind {
        ToastKind::Success => (Icon::Success, ColoredText::success(message)),
        ToastKind::Error => (Icon::Error, ColoredText::error(message)),
    };
    format!(
        "{} {}",
        icon.colored(supports_color, supports_unicode),
        text.render(supports_color)
    )
}
