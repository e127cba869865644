//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating controllers with infrastructure dependencies
//! - Text formatting shared by the terminal views
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates controllers with proper dependencies (dependency injection)
//! - `output` - Formatting helpers
//!
//! ## Usage
//!
//! ```ignore
//! use fleetcheck::presentation::factory;
//!
//! let api = factory::create_api(&config)?;
//! let mut form = factory::create_check_form(&api, notifier);
//! form.load_vehicles();
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_api, create_check_form, create_check_history};
