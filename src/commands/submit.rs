//! Submit command handler
//!
//! Fills the inspection form from flags, prompts for whatever is missing when
//! a terminal is attached, and submits it.

use anyhow::{bail, Result};
use dialoguer::{Input, MultiSelect, Select};

use fleetcheck::application::SUBMIT_FAILED_MESSAGE;
use fleetcheck::domain::value_objects::{NoteInput, OdometerInput, NOTE_MAX_LENGTH};
use fleetcheck::presentation::factory::{self, SharedApi};
use fleetcheck::{
    CheckForm, CheckItemKey, CheckItemStatus, InspectionApi, Notifier, RefreshTrigger,
    SubmitOutcome,
};

use crate::ui::blocks::check_card::CheckCard;
use crate::ui::blocks::form_errors::{
    render_error_banner, render_missing_fields, render_validation_errors,
};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::can_prompt;
use crate::ui::widgets::spinner::with_spinner;

/// Field values given on the command line
#[derive(Debug, Clone, Default)]
pub struct SubmitArgs {
    pub vehicle: Option<String>,
    pub odometer: Option<String>,
    pub fail: Vec<CheckItemKey>,
    pub note: Option<String>,
}

pub fn cmd_submit(ui: &UiContext, api: &SharedApi, args: SubmitArgs) -> Result<()> {
    let interactive = !ui.json && can_prompt();
    let mut form =
        factory::create_check_form(api, super::toast_notifier(ui, RefreshTrigger::new()));

    apply_args(&mut form, &args)?;

    if interactive {
        if args.vehicle.is_none() {
            with_spinner(ui, "Loading vehicles...", || form.load_vehicles());
            if !prompt_vehicle(&mut form)? {
                bail!("No vehicles available.");
            }
        }
        if args.odometer.is_none() {
            prompt_odometer(&mut form)?;
        }
        if args.fail.is_empty() {
            prompt_checklist(&mut form)?;
        }
        if args.note.is_none() {
            prompt_note(&mut form)?;
        }
    }

    let outcome = with_spinner(ui, "Submitting...", || form.submit());
    report_outcome(ui, &form, outcome)
}

/// Copy the flag values into the form, rejecting text the input masks refuse.
fn apply_args<A: InspectionApi, N: Notifier>(
    form: &mut CheckForm<A, N>,
    args: &SubmitArgs,
) -> Result<()> {
    if let Some(vehicle) = &args.vehicle {
        form.select_vehicle(vehicle.trim());
    }
    if let Some(odometer) = &args.odometer {
        if !form.input_odometer(odometer.trim()) {
            bail!("Invalid odometer reading '{odometer}': use digits with at most one decimal point");
        }
    }
    for key in &args.fail {
        form.set_item_status(*key, CheckItemStatus::Fail);
    }
    if let Some(note) = &args.note {
        if !form.input_note(note) {
            bail!("Note is limited to {NOTE_MAX_LENGTH} characters");
        }
    }
    Ok(())
}

/// Pick the vehicle from the loaded list. Returns false if there is nothing
/// to pick from.
pub(crate) fn prompt_vehicle<A: InspectionApi, N: Notifier>(
    form: &mut CheckForm<A, N>,
) -> Result<bool> {
    if form.vehicles().is_empty() {
        return Ok(false);
    }

    let labels: Vec<String> = form.vehicles().iter().map(|v| v.form_label()).collect();
    let current = form
        .selected_vehicle()
        .and_then(|id| form.vehicles().iter().position(|v| v.id == id))
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Vehicle")
        .items(&labels)
        .default(current)
        .interact()?;

    let id = form.vehicles()[selection].id.clone();
    form.select_vehicle(id);
    Ok(true)
}

pub(crate) fn prompt_odometer<A: InspectionApi, N: Notifier>(
    form: &mut CheckForm<A, N>,
) -> Result<()> {
    let text: String = Input::new()
        .with_prompt("Odometer (km)")
        .with_initial_text(form.odometer())
        .validate_with(|input: &String| -> Result<(), &'static str> {
            let mut candidate = OdometerInput::default();
            if candidate.input(input.trim()) && candidate.parse().is_some() {
                Ok(())
            } else {
                Err("Enter a number, e.g. 45210.5")
            }
        })
        .interact_text()?;
    form.input_odometer(text.trim());
    Ok(())
}

pub(crate) fn prompt_checklist<A: InspectionApi, N: Notifier>(
    form: &mut CheckForm<A, N>,
) -> Result<()> {
    let labels: Vec<&str> = CheckItemKey::ALL.iter().map(|k| k.as_str()).collect();
    let defaults: Vec<bool> = CheckItemKey::ALL
        .iter()
        .map(|k| form.checklist().status(*k).is_fail())
        .collect();

    let failed = MultiSelect::new()
        .with_prompt("Checklist items that FAILED (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    for (i, key) in CheckItemKey::ALL.into_iter().enumerate() {
        let status = if failed.contains(&i) {
            CheckItemStatus::Fail
        } else {
            CheckItemStatus::Ok
        };
        form.set_item_status(key, status);
    }
    Ok(())
}

pub(crate) fn prompt_note<A: InspectionApi, N: Notifier>(form: &mut CheckForm<A, N>) -> Result<()> {
    let text: String = Input::new()
        .with_prompt(format!("Notes (optional, max {NOTE_MAX_LENGTH} characters)"))
        .with_initial_text(form.note().as_str())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if NoteInput::default().input(input) {
                Ok(())
            } else {
                Err(format!(
                    "Too long: {}/{NOTE_MAX_LENGTH}",
                    input.chars().count()
                ))
            }
        })
        .interact_text()?;
    form.input_note(&text);
    Ok(())
}

fn report_outcome<A: InspectionApi, N: Notifier>(
    ui: &UiContext,
    form: &CheckForm<A, N>,
    outcome: SubmitOutcome,
) -> Result<()> {
    match outcome {
        SubmitOutcome::Submitted(check) => {
            if ui.json {
                crate::ui::json::emit(serde_json::json!({
                    "event": "submitted",
                    "check": check,
                }))?;
            } else {
                print!("{}", CheckCard::new(&check).render(ui.color, ui.unicode));
            }
            Ok(())
        }
        SubmitOutcome::Blocked(missing) => {
            if ui.json {
                let fields: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                crate::ui::json::emit(serde_json::json!({
                    "event": "blocked",
                    "missing": fields,
                }))?;
            } else {
                eprint!("{}", render_missing_fields(&missing, ui.color, ui.unicode));
                eprintln!(
                    "{} {}",
                    Icon::Arrow.colored(ui.color, ui.unicode),
                    ColoredText::dim("Pass --vehicle and --odometer, or run on a terminal.")
                        .render(ui.color)
                );
            }
            bail!("Inspection not submitted: required fields missing");
        }
        SubmitOutcome::Rejected(messages) => {
            if ui.json {
                crate::ui::json::emit(serde_json::json!({
                    "event": "rejected",
                    "errors": messages,
                }))?;
            } else {
                eprint!("{}", render_validation_errors(&messages, ui.color, ui.unicode));
            }
            bail!("Inspection rejected by the backend");
        }
        SubmitOutcome::Failed => {
            let message = form.error().unwrap_or(SUBMIT_FAILED_MESSAGE);
            if ui.json {
                crate::ui::json::emit(serde_json::json!({
                    "event": "failed",
                    "error": message,
                }))?;
            } else {
                eprint!("{}", render_error_banner(message, ui.color, ui.unicode));
            }
            bail!("Inspection not submitted");
        }
    }
}
