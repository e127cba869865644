//! Delete command handler

use anyhow::{bail, Context, Result};

use fleetcheck::domain::ports::AlwaysConfirm;
use fleetcheck::infrastructure::InteractiveConfirmer;
use fleetcheck::presentation::factory::{self, SharedApi};
use fleetcheck::{Confirmer, DeleteOutcome, InspectionApi, RefreshTrigger};

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::can_prompt;
use crate::ui::widgets::spinner::with_spinner;

pub fn cmd_delete(ui: &UiContext, api: &SharedApi, check_id: &str, yes: bool) -> Result<()> {
    let check_id = check_id.trim();
    if check_id.is_empty() {
        bail!("Check id must not be empty");
    }
    if !yes && (ui.json || !can_prompt()) {
        bail!("Refusing to delete '{check_id}' without confirmation (pass --yes)");
    }

    let interactive = InteractiveConfirmer::new();
    let confirmer: &dyn Confirmer = if yes { &AlwaysConfirm } else { &interactive };

    let mut history =
        factory::create_check_history(api, super::toast_notifier(ui, RefreshTrigger::new()), 0);

    let Some(ticket) = history.begin_delete(check_id, &confirmer) else {
        if ui.json {
            crate::ui::json::emit(serde_json::json!({ "event": "cancelled", "id": check_id }))?;
        } else {
            println!("{}", ColoredText::dim("Deletion cancelled.").render(ui.color));
        }
        return Ok(());
    };

    let result = with_spinner(ui, "Deleting...", || api.delete_check(ticket.check_id()));

    match history.finish_delete(ticket, result) {
        DeleteOutcome::Deleted => {
            if ui.json {
                crate::ui::json::emit(serde_json::json!({ "event": "deleted", "id": check_id }))?;
            }
            Ok(())
        }
        DeleteOutcome::Failed(e) => {
            if ui.json {
                crate::ui::json::emit(serde_json::json!({
                    "event": "delete_failed",
                    "id": check_id,
                    "error": e.to_string(),
                }))?;
            }
            Err(e).context(format!("Failed to delete inspection record '{check_id}'"))
        }
        DeleteOutcome::Cancelled => Ok(()),
    }
}
