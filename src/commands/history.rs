//! History command handler

use anyhow::{bail, Result};

use fleetcheck::application::LOAD_FAILED_MESSAGE;
use fleetcheck::presentation::factory::{self, SharedApi};
use fleetcheck::{HistoryDisplay, IssueFilter, RefreshTrigger};

use crate::ui::context::UiContext;
use crate::ui::views::history::{render_history, LOADING_MESSAGE};
use crate::ui::widgets::spinner::with_spinner;

pub fn cmd_history(
    ui: &UiContext,
    api: &SharedApi,
    vehicle: &str,
    issues: IssueFilter,
) -> Result<()> {
    let vehicle = vehicle.trim();
    if vehicle.is_empty() {
        bail!("--vehicle must not be empty");
    }

    let refresh = RefreshTrigger::new();
    let notifier = super::toast_notifier(ui, refresh.clone());
    let mut history = factory::create_check_history(api, notifier, refresh.get());
    if !ui.json {
        with_spinner(ui, "Loading vehicles...", || history.load_vehicles());
    }

    history.set_issue_filter(issues);
    if let Some(ticket) = history.select_vehicle(vehicle) {
        with_spinner(ui, LOADING_MESSAGE, || history.run_fetch(ticket));
    }

    if ui.json {
        let (status, error) = match history.display() {
            HistoryDisplay::Failed(message) => ("failed", Some(message.to_string())),
            _ => ("ok", None),
        };
        crate::ui::json::emit(serde_json::json!({
            "event": "history",
            "vehicle_id": vehicle,
            "filter": issues.label(),
            "status": status,
            "error": error,
            "checks": history.checks(),
        }))?;
    } else {
        print!("{}", render_history(&history, ui.color, ui.unicode));
    }

    if matches!(history.display(), HistoryDisplay::Failed(_)) {
        bail!(LOAD_FAILED_MESSAGE);
    }
    Ok(())
}
