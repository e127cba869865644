//! Inspection API Port
//!
//! The backend client the controllers depend on. The HTTP implementation lives
//! in `infrastructure::http`; tests use in-memory fakes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::{Check, NewCheck, Vehicle};

/// Result alias for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// One field-level validation failure reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub field: String,
    pub reason: String,
}

impl ErrorDetail {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Failure of a backend call.
///
/// Only [`ApiError::Validation`] carries structured detail; the other
/// variants are all handled as generic failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Backend rejected the request with field-level details
    #[error("validation failed: {} error(s)", .details.len())]
    Validation { details: Vec<ErrorDetail> },

    /// Backend answered with a non-success status
    #[error("server returned {status}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// Connection, TLS or timeout failure
    #[error("request failed: {0}")]
    Transport(String),

    /// Response body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Field-level details, if the backend sent any
    pub fn details(&self) -> Option<&[ErrorDetail]> {
        match self {
            ApiError::Validation { details } => Some(details),
            _ => None,
        }
    }
}

/// Backend operations consumed by the form and the history view.
pub trait InspectionApi: Send + Sync {
    fn get_vehicles(&self) -> ApiResult<Vec<Vehicle>>;

    fn create_check(&self, check: &NewCheck) -> ApiResult<Check>;

    /// `has_issue: None` means no filtering by issue status.
    fn get_checks(&self, vehicle_id: &str, has_issue: Option<bool>) -> ApiResult<Vec<Check>>;

    fn delete_check(&self, check_id: &str) -> ApiResult<()>;
}

impl<T: InspectionApi + ?Sized> InspectionApi for Arc<T> {
    fn get_vehicles(&self) -> ApiResult<Vec<Vehicle>> {
        (**self).get_vehicles()
    }

    fn create_check(&self, check: &NewCheck) -> ApiResult<Check> {
        (**self).create_check(check)
    }

    fn get_checks(&self, vehicle_id: &str, has_issue: Option<bool>) -> ApiResult<Vec<Check>> {
        (**self).get_checks(vehicle_id, has_issue)
    }

    fn delete_check(&self, check_id: &str) -> ApiResult<()> {
        (**self).delete_check(check_id)
    }
}

impl<T: InspectionApi + ?Sized> InspectionApi for &T {
    fn get_vehicles(&self) -> ApiResult<Vec<Vehicle>> {
        (**self).get_vehicles()
    }

    fn create_check(&self, check: &NewCheck) -> ApiResult<Check> {
        (**self).create_check(check)
    }

    fn get_checks(&self, vehicle_id: &str, has_issue: Option<bool>) -> ApiResult<Vec<Check>> {
        (**self).get_checks(vehicle_id, has_issue)
    }

    fn delete_check(&self, check_id: &str) -> ApiResult<()> {
        (**self).delete_check(check_id)
    }
}
