//! Error types for Fleetcheck
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::domain::ports::inspection_api::{ApiError, ApiResult, ErrorDetail};

/// Result type alias for Fleetcheck operations
pub type FleetcheckResult<T> = Result<T, FleetcheckError>;

/// Main error type for Fleetcheck operations
#[derive(Error, Debug)]
pub enum FleetcheckError {
    /// Backend call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Base URL in config or on the command line is unusable
    #[error("invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown checklist item name
    #[error("unknown checklist item '{0}' (expected one of TYRES, BRAKES, LIGHTS, OIL, COOLANT)")]
    UnknownCheckItem(String),

    /// Unknown issue filter name
    #[error("unknown issue filter '{0}' (expected all, with or without)")]
    UnknownIssueFilter(String),
}
