//! Inspection record entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CheckItem, Checklist};

/// Inspection record as returned by the backend.
///
/// `id`, `created_at` and `has_issue` are assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub id: String,
    pub vehicle_id: String,
    pub odometer_km: f64,
    pub items: Vec<CheckItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub has_issue: bool,
    pub created_at: DateTime<Utc>,
}

impl Check {
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

/// Body of a create-check request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCheck {
    pub vehicle_id: String,
    pub odometer_km: f64,
    pub items: Checklist,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
