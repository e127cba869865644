//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --api-url, --config) are inherited by all subcommands
//! - Running without a subcommand opens the interactive shell

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{CheckItemKey, IssueFilter};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Fleetcheck - vehicle inspection client
#[derive(Parser, Debug)]
#[command(name = "fleetcheck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'fleetcheck' without arguments for the interactive shell.")]
pub struct Cli {
    /// Machine-readable output (NDJSON events / JSON documents)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Backend base URL (overrides config and FLEETCHECK_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/fleetcheck/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the vehicles known to the backend
    Vehicles,

    /// Submit a new inspection
    Submit {
        /// Vehicle id (prompted on a terminal if omitted)
        #[arg(long)]
        vehicle: Option<String>,

        /// Odometer reading in km (prompted on a terminal if omitted)
        #[arg(long)]
        odometer: Option<String>,

        /// Checklist items that failed (e.g. --fail BRAKES,LIGHTS)
        #[arg(long, value_delimiter = ',', value_parser = CheckItemKey::from_str)]
        fail: Vec<CheckItemKey>,

        /// Free-text note (max 300 characters)
        #[arg(long)]
        note: Option<String>,
    },

    /// Show the inspection history of a vehicle
    History {
        /// Vehicle id
        #[arg(long)]
        vehicle: String,

        /// Restrict by issue status
        #[arg(long, value_enum, default_value_t = IssueFilter::All)]
        issues: IssueFilter,
    },

    /// Delete one inspection record
    Delete {
        /// Id of the record to delete
        check_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
