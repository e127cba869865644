use fleetcheck::domain::value_objects::CheckItemStatus;
use fleetcheck::{CheckForm, InspectionApi, Notifier};

use crate::ui::blocks::form_errors::{render_error_banner, render_validation_errors};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const FORM_TITLE: &str = "Submit Vehicle Inspection Result";

/// Current state of the inspection form: errors first, then every field.
pub fn render_form<A: InspectionApi, N: Notifier>(
    form: &CheckForm<A, N>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = CommandHeader::new(Icon::Inspect, FORM_TITLE).render(supports_color, supports_unicode);
    out.push('\n');

    if let Some(error) = form.error() {
        out.push_str(&render_error_banner(error, supports_color, supports_unicode));
    }
    out.push_str(&render_validation_errors(
        form.validation_errors(),
        supports_color,
        supports_unicode,
    ));

    let vehicle = form
        .selected_vehicle()
        .map(|id| {
            form.vehicles()
                .iter()
                .find(|v| v.id == id)
                .map(|v| v.form_label())
                .unwrap_or_else(|| id.to_string())
        })
        .unwrap_or_else(|| "Select a vehicle".to_string());
    out.push_str(&field("Vehicle *", &vehicle, supports_color));

    let odometer = if form.odometer().is_empty() {
        "Enter odometer reading"
    } else {
        form.odometer()
    };
    out.push_str(&field("Odometer (km) *", odometer, supports_color));

    out.push_str(&format!(
        "{}\n",
        ColoredText::plain("Checklist Items *").bold().render(supports_color)
    ));
    for item in form.checklist().items() {
        let status = match item.status {
            CheckItemStatus::Ok => ColoredText::success("OK"),
            CheckItemStatus::Fail => ColoredText::error("FAIL").bold(),
        };
        out.push_str(&format!(
            "  {:<8} {}\n",
            item.key.as_str(),
            status.render(supports_color)
        ));
    }

    let note = form.note();
    out.push_str(&field(
        "Notes (optional)",
        &format!(
            "{} {}",
            note.as_str(),
            ColoredText::dim(format!("({})", note.counter())).render(supports_color)
        ),
        supports_color,
    ));

    if form.is_submitting() {
        out.push_str(&format!(
            "{}\n",
            ColoredText::dim("Submitting...").render(supports_color)
        ));
    }
    out
}

fn field(label: &str, value: &str, supports_color: bool) -> String {
    format!(
        "{} {}\n",
        ColoredText::plain(format!("{label}:")).bold().render(supports_color),
        value
    )
}
