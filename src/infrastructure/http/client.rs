//! Blocking HTTP implementation of [`InspectionApi`]
//!
//! Routes (relative to the configured base URL):
//!
//! - `GET    /vehicles`
//! - `POST   /checks`
//! - `GET    /checks?vehicleId=..[&hasIssue=true|false]`
//! - `DELETE /checks/{id}`
//!
//! Failed responses carry `{"error": {"code", "message", "details": [..]}}`.
//! Any response that carries a `details` list, even an empty one, becomes
//! [`ApiError::Validation`].

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::{Check, NewCheck, Vehicle};
use crate::domain::ports::{ApiError, ApiResult, ErrorDetail, InspectionApi};
use crate::error::{FleetcheckError, FleetcheckResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<Vec<ErrorDetail>>,
}

pub struct HttpInspectionApi {
    client: Client,
    base_url: Url,
}

impl HttpInspectionApi {
    pub fn new(base_url: &str, timeout: Duration) -> FleetcheckResult<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("fleetcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // parse_base_url rejects cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let request = request.build().map_err(transport)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.client.execute(request).map_err(|e| {
            debug!(%method, path, error = %e, "backend request failed");
            transport(e)
        })?;

        let status = response.status();
        debug!(%method, path, status = status.as_u16(), "backend request");

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(classify_error(status.as_u16(), &body))
        }
    }
}

impl InspectionApi for HttpInspectionApi {
    fn get_vehicles(&self) -> ApiResult<Vec<Vehicle>> {
        let response = self.send(self.client.get(self.endpoint(&["vehicles"])))?;
        read_json(response)
    }

    fn create_check(&self, check: &NewCheck) -> ApiResult<Check> {
        let request = self.client.post(self.endpoint(&["checks"])).json(check);
        read_json(self.send(request)?)
    }

    fn get_checks(&self, vehicle_id: &str, has_issue: Option<bool>) -> ApiResult<Vec<Check>> {
        let mut request = self
            .client
            .get(self.endpoint(&["checks"]))
            .query(&[("vehicleId", vehicle_id)]);
        if let Some(has_issue) = has_issue {
            request = request.query(&[("hasIssue", has_issue)]);
        }
        read_json(self.send(request)?)
    }

    fn delete_check(&self, check_id: &str) -> ApiResult<()> {
        self.send(self.client.delete(self.endpoint(&["checks", check_id])))?;
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> FleetcheckResult<Url> {
    let invalid = |message: String| FleetcheckError::InvalidBaseUrl {
        url: raw.to_string(),
        message,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_string()));
    }
    Ok(url)
}

fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response.text().map_err(transport)?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Map a non-success response to an [`ApiError`].
fn classify_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => match error.details {
            Some(details) => {
                debug!(status, code = ?error.code, count = details.len(), "validation error");
                ApiError::Validation { details }
            }
            None => {
                debug!(status, code = ?error.code, "error response");
                ApiError::Status {
                    status,
                    message: error.message,
                }
            }
        },
        Err(_) => ApiError::Status {
            status,
            message: None,
        },
    }
}
