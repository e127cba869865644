use fleetcheck::domain::value_objects::CheckItemStatus;
use fleetcheck::presentation::output::{format_created_at, format_odometer, issue_badge};
use fleetcheck::Check;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// One inspection record as a bordered card.
#[derive(Debug, Clone)]
pub struct CheckCard<'a> {
    check: &'a Check,
    created_label: String,
    busy: bool,
}

impl<'a> CheckCard<'a> {
    /// Card with the timestamp in the local time zone.
    pub fn new(check: &'a Check) -> Self {
        Self::with_created_label(check, format_created_at(&check.created_at))
    }

    pub fn with_created_label(check: &'a Check, created_label: impl Into<String>) -> Self {
        Self {
            check,
            created_label: created_label.into(),
            busy: false,
        }
    }

    /// Mark the record as being deleted.
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let check = self.check;
        let badge = issue_badge(check.has_issue, supports_unicode);
        let badge = if check.has_issue {
            ColoredText::warning(badge)
        } else {
            ColoredText::success(badge)
        }
        .render(supports_color);

        let mut title = format!(
            "{}  {}",
            ColoredText::plain(self.created_label.as_str())
                .bold()
                .render(supports_color),
            badge
        );
        if self.busy {
            title.push_str(&format!(
                "  {}",
                Icon::Busy.colored(supports_color, supports_unicode)
            ));
        }

        let style = if self.busy {
            BoxStyle::Dim
        } else if check.has_issue {
            BoxStyle::Warning
        } else {
            BoxStyle::Success
        };
        let mut b = Box::with_title(title).style(style).min_width(40);

        b.add_line(format!(
            "{} {}",
            ColoredText::dim("ID:").render(supports_color),
            check.id
        ));
        b.add_line(format!(
            "{} {} km",
            ColoredText::dim("Odometer:").render(supports_color),
            format_odometer(check.odometer_km)
        ));
        b.add_empty();

        for item in &check.items {
            let line = match item.status {
                CheckItemStatus::Ok => format!(
                    "{} {:<8} {}",
                    Icon::Success.colored(supports_color, supports_unicode),
                    item.key.as_str(),
                    ColoredText::success("OK").render(supports_color)
                ),
                CheckItemStatus::Fail => format!(
                    "{} {:<8} {}",
                    Icon::Error.colored(supports_color, supports_unicode),
                    item.key.as_str(),
                    ColoredText::error("FAIL").bold().render(supports_color)
                ),
            };
            b.add_line(line);
        }

        if let Some(note) = check.note() {
            b.add_empty();
            b.add_line(format!(
                "{} {}",
                ColoredText::dim("Notes:").render(supports_color),
                note
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
