//! Controller Factory
//!
//! Creates controllers with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use tracing::debug;

use crate::application::{CheckForm, CheckHistory};
use crate::config::Config;
use crate::domain::ports::Notifier;
use crate::error::FleetcheckResult;
use crate::infrastructure::HttpInspectionApi;

/// Backend client shared by both controllers
pub type SharedApi = Arc<HttpInspectionApi>;

/// Form controller over the HTTP backend
pub type ConcreteCheckForm<N> = CheckForm<SharedApi, N>;

/// History controller over the HTTP backend
pub type ConcreteCheckHistory<N> = CheckHistory<SharedApi, N>;

/// Fold the `--api-url` flag into the loaded config.
pub fn apply_cli_overrides(mut config: Config, api_url: Option<&str>) -> Config {
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
    }
    config
}

/// Create the HTTP backend client from the effective config.
pub fn create_api(config: &Config) -> FleetcheckResult<SharedApi> {
    let api = HttpInspectionApi::new(&config.api.base_url, config.api.timeout())?;
    debug!(base_url = %api.base_url(), timeout_secs = config.api.timeout_secs, "backend client ready");
    Ok(Arc::new(api))
}

pub fn create_check_form<N: Notifier>(api: &SharedApi, notifier: N) -> ConcreteCheckForm<N> {
    CheckForm::new(Arc::clone(api), notifier)
}

pub fn create_check_history<N: Notifier>(
    api: &SharedApi,
    notifier: N,
    refresh_trigger: u64,
) -> ConcreteCheckHistory<N> {
    CheckHistory::new(Arc::clone(api), notifier).with_refresh_trigger(refresh_trigger)
}
