//! Vehicle entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub registration: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl Vehicle {
    /// Label used when picking a vehicle for a new inspection
    pub fn form_label(&self) -> String {
        format!(
            "{} - {} {} ({})",
            self.registration, self.make, self.model, self.year
        )
    }

    /// Shorter label used by the history filter
    pub fn history_label(&self) -> String {
        format!("{} - {} {}", self.registration, self.make, self.model)
    }
}
