//! Interactive shell
//!
//! Menu-driven loop over the two screens. Both controllers share one
//! [`RefreshTrigger`]: a submit or delete bumps it, and the history screen
//! refetches the next time it is shown.

use anyhow::Result;
use dialoguer::Select;

use fleetcheck::infrastructure::InteractiveConfirmer;
use fleetcheck::presentation::factory::{
    self, ConcreteCheckForm, ConcreteCheckHistory, SharedApi,
};
use fleetcheck::presentation::output::format_created_at;
use fleetcheck::{
    CheckHistory, HistoryDisplay, InspectionApi, IssueFilter, Notifier, RefreshTrigger,
    SubmitOutcome,
};

use super::submit::{prompt_checklist, prompt_note, prompt_odometer, prompt_vehicle};
use crate::ui::blocks::check_card::CheckCard;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::can_prompt;
use crate::ui::views::form::render_form;
use crate::ui::views::history::{render_history, LOADING_MESSAGE};
use crate::ui::widgets::spinner::with_spinner;

pub fn cmd_interactive(ui: &UiContext, api: &SharedApi) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "interactive",
            "status": "unavailable",
            "base_url": api.base_url().as_str(),
        }))?;
        return Ok(());
    }

    if !can_prompt() {
        println!("No command provided.");
        println!("Try: `fleetcheck history --vehicle <ID>` or `fleetcheck --help`");
        return Ok(());
    }

    print_banner(ui, api);

    let refresh = RefreshTrigger::new();
    let mut form = factory::create_check_form(api, super::toast_notifier(ui, refresh.clone()));
    let mut history = factory::create_check_history(
        api,
        super::toast_notifier(ui, refresh.clone()),
        refresh.get(),
    );
    let count = with_spinner(ui, "Loading vehicles...", || {
        history.load_vehicles();
        form.load_vehicles()
    });
    if count == 0 {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning("No vehicles available.").render(ui.color)
        );
    }

    let items = vec!["Submit inspection", "View history", "Quit"];
    loop {
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => submit_screen(ui, &mut form)?,
            1 => history_screen(ui, &mut history, &refresh)?,
            _ => return Ok(()),
        }
    }
}

fn print_banner(ui: &UiContext, api: &SharedApi) {
    println!(
        "{} {}",
        Icon::Inspect.colored(ui.color, ui.unicode),
        ColoredText::info("Fleetcheck").bold().render(ui.color)
    );
    println!(
        "{}\n",
        ColoredText::dim(format!("Backend: {}", api.base_url())).render(ui.color)
    );
}

fn submit_screen<N: Notifier>(ui: &UiContext, form: &mut ConcreteCheckForm<N>) -> Result<()> {
    if !prompt_vehicle(form)? {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning("No vehicles available.").render(ui.color)
        );
        return Ok(());
    }
    prompt_odometer(form)?;
    prompt_checklist(form)?;
    prompt_note(form)?;

    println!();
    print!("{}", render_form(&*form, ui.color, ui.unicode));

    let confirm = Select::new()
        .with_prompt("Ready?")
        .items(&["Submit Check", "Discard"])
        .default(0)
        .interact()?;
    if confirm != 0 {
        form.reset();
        return Ok(());
    }

    match with_spinner(ui, "Submitting...", || form.submit()) {
        SubmitOutcome::Submitted(check) => {
            print!("{}", CheckCard::new(&check).render(ui.color, ui.unicode));
        }
        SubmitOutcome::Blocked(_) | SubmitOutcome::Rejected(_) | SubmitOutcome::Failed => {
            // Fields stay filled so the next attempt starts from them.
            print!("{}", render_form(&*form, ui.color, ui.unicode));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryAction {
    ChangeVehicle,
    ChangeFilter,
    Delete,
    Refresh,
    Back,
}

impl HistoryAction {
    const ALL: [HistoryAction; 5] = [
        HistoryAction::ChangeVehicle,
        HistoryAction::ChangeFilter,
        HistoryAction::Delete,
        HistoryAction::Refresh,
        HistoryAction::Back,
    ];

    fn label(&self) -> &'static str {
        match self {
            HistoryAction::ChangeVehicle => "Select a vehicle",
            HistoryAction::ChangeFilter => "Filter by issues",
            HistoryAction::Delete => "Delete a record",
            HistoryAction::Refresh => "Refresh",
            HistoryAction::Back => "Back",
        }
    }
}

fn history_screen<N: Notifier>(
    ui: &UiContext,
    history: &mut ConcreteCheckHistory<N>,
    refresh: &RefreshTrigger,
) -> Result<()> {
    if history.selected_vehicle().is_none() && !choose_vehicle(ui, history)? {
        return Ok(());
    }

    loop {
        if let Some(ticket) = history.set_refresh_trigger(refresh.get()) {
            with_spinner(ui, LOADING_MESSAGE, || history.run_fetch(ticket));
        }

        println!();
        print!("{}", render_history(&*history, ui.color, ui.unicode));

        let labels: Vec<&str> = HistoryAction::ALL.iter().map(|a| a.label()).collect();
        let selection = Select::new()
            .with_prompt("History")
            .items(&labels)
            .default(HistoryAction::ALL.len() - 1)
            .interact()?;

        match HistoryAction::ALL[selection] {
            HistoryAction::ChangeVehicle => {
                choose_vehicle(ui, history)?;
            }
            HistoryAction::ChangeFilter => {
                let labels: Vec<&str> =
                    IssueFilter::ALL_VARIANTS.iter().map(|f| f.label()).collect();
                let current = IssueFilter::ALL_VARIANTS
                    .iter()
                    .position(|f| *f == history.issue_filter())
                    .unwrap_or(0);
                let selection = Select::new()
                    .with_prompt("Filter by issues")
                    .items(&labels)
                    .default(current)
                    .interact()?;
                let filter = IssueFilter::ALL_VARIANTS[selection];
                if let Some(ticket) = history.set_issue_filter(filter) {
                    with_spinner(ui, LOADING_MESSAGE, || history.run_fetch(ticket));
                }
            }
            HistoryAction::Delete => delete_record(ui, history)?,
            HistoryAction::Refresh => {
                if let Some(ticket) = history.reload() {
                    with_spinner(ui, LOADING_MESSAGE, || history.run_fetch(ticket));
                }
            }
            HistoryAction::Back => return Ok(()),
        }
    }
}

/// Returns false if there was nothing to choose from.
fn choose_vehicle<A: InspectionApi, N: Notifier>(
    ui: &UiContext,
    history: &mut CheckHistory<A, N>,
) -> Result<bool> {
    if history.vehicles().is_empty() {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning("No vehicles available.").render(ui.color)
        );
        return Ok(false);
    }

    let labels: Vec<String> = history.vehicles().iter().map(|v| v.history_label()).collect();
    let current = history
        .selected_vehicle()
        .and_then(|id| history.vehicles().iter().position(|v| v.id == id))
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Select a vehicle")
        .items(&labels)
        .default(current)
        .interact()?;

    let id = history.vehicles()[selection].id.clone();
    if let Some(ticket) = history.select_vehicle(&id) {
        with_spinner(ui, LOADING_MESSAGE, || history.run_fetch(ticket));
    }
    Ok(true)
}

fn delete_record<A: InspectionApi, N: Notifier>(
    ui: &UiContext,
    history: &mut CheckHistory<A, N>,
) -> Result<()> {
    let HistoryDisplay::Checks(checks) = history.display() else {
        println!("{}", ColoredText::dim("Nothing to delete.").render(ui.color));
        return Ok(());
    };

    let mut labels: Vec<String> = checks
        .iter()
        .map(|c| format!("{}  {}", format_created_at(&c.created_at), c.id))
        .collect();
    labels.push("Cancel".to_string());
    let selection = Select::new()
        .with_prompt("Delete which record?")
        .items(&labels)
        .default(labels.len() - 1)
        .interact()?;
    let Some(check) = checks.get(selection) else {
        return Ok(());
    };

    let check_id = check.id.clone();
    let Some(ticket) = history.begin_delete(&check_id, &InteractiveConfirmer::new()) else {
        return Ok(());
    };
    print!("{}", render_history(&*history, ui.color, ui.unicode));

    let result = with_spinner(ui, "Deleting...", || {
        history.api().delete_check(ticket.check_id())
    });
    history.finish_delete(ticket, result);
    Ok(())
}
