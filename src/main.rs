//! Fleetcheck CLI - vehicle inspection client
//!
//! Usage: fleetcheck [COMMAND]
//!
//! Commands:
//!   vehicles  List the vehicles known to the backend
//!   submit    Submit a new inspection
//!   history   Show the inspection history of a vehicle
//!   delete    Delete one inspection record
//!
//! Without a command, opens the interactive shell.

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fleetcheck::config::Config;
use fleetcheck::presentation::factory;
use fleetcheck::presentation::{Cli, Commands};

use crate::commands::submit::SubmitArgs;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Log filter override; falls back to `RUST_LOG`, then to `-v`.
const ENV_LOG: &str = "FLEETCHECK_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    let config = factory::apply_cli_overrides(config, cli.api_url.as_deref());
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    if !ui.json {
        for warning in &warnings {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                ColoredText::warning(warning.to_string()).render(ui.color)
            );
        }
    }

    let api = factory::create_api(&config)?;
    if ui.verbose > 0 && !ui.json {
        eprintln!(
            "{}",
            ColoredText::dim(format!("Backend: {}", api.base_url())).render(ui.color)
        );
    }
    tracing::debug!(command = ?cli.command, "dispatching");

    match cli.command {
        None => commands::interactive::cmd_interactive(&ui, &api),
        Some(Commands::Vehicles) => commands::vehicles::cmd_vehicles(&ui, &api),
        Some(Commands::Submit {
            vehicle,
            odometer,
            fail,
            note,
        }) => commands::submit::cmd_submit(
            &ui,
            &api,
            SubmitArgs {
                vehicle,
                odometer,
                fail,
                note,
            },
        ),
        Some(Commands::History { vehicle, issues }) => {
            commands::history::cmd_history(&ui, &api, &vehicle, issues)
        }
        Some(Commands::Delete { check_id, yes }) => {
            commands::delete::cmd_delete(&ui, &api, &check_id, yes)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("fleetcheck={level}")));

    // stdout is reserved for command output.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
