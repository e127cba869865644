use fleetcheck::application::RequiredField;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Backend validation failures, one row per detail.
pub fn render_validation_errors(
    messages: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let mut b = Box::with_title(
        ColoredText::error("Validation errors:")
            .bold()
            .render(supports_color),
    )
    .style(BoxStyle::Error);
    for message in messages {
        b.add_line(format!(
            "{} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            message
        ));
    }
    b.render(supports_color, supports_unicode)
}

/// Generic submit failure line.
pub fn render_error_banner(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(message).render(supports_color)
    )
}

/// Required fields that blocked a submit.
pub fn render_missing_fields(
    missing: &[RequiredField],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for field in missing {
        out.push_str(&format!(
            "{} {} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(field.label()).render(supports_color),
            field.message()
        ));
    }
    out
}
