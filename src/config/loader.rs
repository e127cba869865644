//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FleetcheckError, FleetcheckResult};

use super::types::{ColorMode, Config};

pub const ENV_API_URL: &str = "FLEETCHECK_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "FLEETCHECK_TIMEOUT_SECS";
pub const ENV_COLOR: &str = "FLEETCHECK_COLOR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FleetcheckResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FleetcheckError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest(&key, CONFIG_KEYS),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Location of the user config file
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fleetcheck").join("config.toml"))
}

/// Load the explicit file, else the user config file if it exists, else the
/// defaults; environment overrides are applied on top.
///
/// An explicit path that does not exist is an error, a missing user config
/// file is not.
pub fn load_or_default(explicit: Option<&Path>) -> FleetcheckResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match user_config_path().filter(|p| p.exists()) {
            Some(path) => {
                debug!(path = %path.display(), "loading user config");
                load_with_warnings(&path)?
            }
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (FLEETCHECK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // FLEETCHECK_API_URL
    if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }

    // FLEETCHECK_TIMEOUT_SECS
    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => config.api.timeout_secs = secs,
            _ => warn!(
                value = %raw,
                "invalid {ENV_TIMEOUT_SECS}; expected a positive number of seconds"
            ),
        }
    }

    // FLEETCHECK_COLOR
    if let Some(raw) = lookup(ENV_COLOR) {
        match ColorMode::parse(&raw) {
            Some(mode) => config.output.color = mode,
            None => {
                let hint = suggest(&raw.to_lowercase(), COLOR_VALUES)
                    .map(|s| format!(" (did you mean '{s}'?)"))
                    .unwrap_or_default();
                warn!(
                    value = %raw,
                    "invalid {ENV_COLOR}{hint}; valid values: {}",
                    COLOR_VALUES.join(", ")
                );
            }
        }
    }

    config
}

const CONFIG_KEYS: &[&str] = &["api", "base_url", "timeout_secs", "output", "color", "unicode"];
const COLOR_VALUES: &[&str] = &["auto", "always", "never"];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist > 0 && *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
