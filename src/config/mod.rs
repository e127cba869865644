//! Configuration module for Fleetcheck
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FLEETCHECK_*)
//! 3. Config file (`--config PATH`, else ~/.config/fleetcheck/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, ENV_API_URL, ENV_COLOR, ENV_TIMEOUT_SECS};
pub use types::{ApiConfig, ColorMode, Config, OutputConfig};
