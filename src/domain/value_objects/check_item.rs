//! Checklist item value objects - the inspected subsystems and their status

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FleetcheckError;

/// Vehicle subsystem covered by every inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckItemKey {
    Tyres,
    Brakes,
    Lights,
    Oil,
    Coolant,
}

impl CheckItemKey {
    /// Every key, in checklist order
    pub const ALL: [CheckItemKey; 5] = [
        CheckItemKey::Tyres,
        CheckItemKey::Brakes,
        CheckItemKey::Lights,
        CheckItemKey::Oil,
        CheckItemKey::Coolant,
    ];

    /// Wire name (also the label shown in the checklist)
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckItemKey::Tyres => "TYRES",
            CheckItemKey::Brakes => "BRAKES",
            CheckItemKey::Lights => "LIGHTS",
            CheckItemKey::Oil => "OIL",
            CheckItemKey::Coolant => "COOLANT",
        }
    }

    /// Position in the fixed checklist order
    pub fn index(&self) -> usize {
        match self {
            CheckItemKey::Tyres => 0,
            CheckItemKey::Brakes => 1,
            CheckItemKey::Lights => 2,
            CheckItemKey::Oil => 3,
            CheckItemKey::Coolant => 4,
        }
    }
}

impl std::fmt::Display for CheckItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckItemKey {
    type Err = FleetcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CheckItemKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FleetcheckError::UnknownCheckItem(s.to_string()))
    }
}

/// Pass/fail result for one checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckItemStatus {
    #[default]
    Ok,
    Fail,
}

impl CheckItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckItemStatus::Ok => "OK",
            CheckItemStatus::Fail => "FAIL",
        }
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, CheckItemStatus::Fail)
    }
}

impl std::fmt::Display for CheckItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `{key, status}` entry of a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    pub key: CheckItemKey,
    pub status: CheckItemStatus,
}

impl CheckItem {
    pub fn new(key: CheckItemKey, status: CheckItemStatus) -> Self {
        Self { key, status }
    }
}
