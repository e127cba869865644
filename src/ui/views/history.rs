use fleetcheck::{CheckHistory, HistoryDisplay, InspectionApi, Notifier};

use crate::ui::blocks::check_card::CheckCard;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::spinner::Spinner;

pub const HISTORY_TITLE: &str = "View Inspection History";
pub const SELECT_VEHICLE_HINT: &str = "Select a vehicle to view its inspections.";
pub const LOADING_MESSAGE: &str = "Loading checks...";
pub const EMPTY_MESSAGE: &str = "No checks found for this vehicle.";

/// Filters plus whichever of the empty/loading/failed/list states applies.
pub fn render_history<A: InspectionApi, N: Notifier>(
    history: &CheckHistory<A, N>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::History, HISTORY_TITLE);
    if let Some(id) = history.selected_vehicle() {
        let label = history
            .vehicles()
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.history_label())
            .unwrap_or_else(|| id.to_string());
        header.add("Vehicle", label);
        header.add("Filter by issues", history.issue_filter().label());
    }
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    match history.display() {
        HistoryDisplay::NoVehicle => {
            out.push_str(&format!(
                "{}\n",
                ColoredText::dim(SELECT_VEHICLE_HINT).render(supports_color)
            ));
        }
        HistoryDisplay::Loading => {
            out.push_str(&Spinner::new(LOADING_MESSAGE).render(supports_unicode));
            out.push('\n');
        }
        HistoryDisplay::Failed(message) => {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Error.colored(supports_color, supports_unicode),
                ColoredText::error(message).render(supports_color)
            ));
        }
        HistoryDisplay::Empty => {
            out.push_str(&format!(
                "{}\n",
                ColoredText::dim(EMPTY_MESSAGE).render(supports_color)
            ));
        }
        HistoryDisplay::Checks(checks) => {
            for check in checks {
                let busy = history.deleting_id() == Some(check.id.as_str());
                out.push_str(&CheckCard::new(check).busy(busy).render(supports_color, supports_unicode));
            }
        }
    }
    out
}
