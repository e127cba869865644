//! Vehicles command handler

use anyhow::{Context, Result};

use fleetcheck::presentation::factory::SharedApi;
use fleetcheck::InspectionApi;

use crate::ui::context::UiContext;
use crate::ui::views::vehicles::render_vehicle_list;
use crate::ui::widgets::spinner::with_spinner;

pub fn cmd_vehicles(ui: &UiContext, api: &SharedApi) -> Result<()> {
    let vehicles = with_spinner(ui, "Loading vehicles...", || api.get_vehicles())
        .context("Failed to load vehicles")?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "vehicles",
            "count": vehicles.len(),
            "vehicles": vehicles,
        }))?;
        return Ok(());
    }

    print!("{}", render_vehicle_list(&vehicles, ui.color, ui.unicode));
    Ok(())
}
