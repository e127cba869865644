//! Checklist value object
//!
//! Holds exactly one entry per [`CheckItemKey`], in the fixed key order.
//! The array layout makes duplicate or missing keys unrepresentable.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use super::check_item::{CheckItem, CheckItemKey, CheckItemStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checklist {
    statuses: [CheckItemStatus; 5],
}

impl Default for Checklist {
    /// All items OK
    fn default() -> Self {
        Self {
            statuses: [CheckItemStatus::Ok; 5],
        }
    }
}

impl Checklist {
    pub fn status(&self, key: CheckItemKey) -> CheckItemStatus {
        self.statuses[key.index()]
    }

    /// Replace the status of one item, leaving the others untouched.
    pub fn set(&mut self, key: CheckItemKey, status: CheckItemStatus) {
        self.statuses[key.index()] = status;
    }

    pub fn items(&self) -> impl Iterator<Item = CheckItem> + '_ {
        CheckItemKey::ALL
            .into_iter()
            .map(|key| CheckItem::new(key, self.status(key)))
    }

    pub fn failed(&self) -> impl Iterator<Item = CheckItemKey> + '_ {
        CheckItemKey::ALL
            .into_iter()
            .filter(|key| self.status(*key).is_fail())
    }

    pub fn has_failure(&self) -> bool {
        self.failed().next().is_some()
    }

    pub fn to_vec(&self) -> Vec<CheckItem> {
        self.items().collect()
    }
}

impl Serialize for Checklist {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(CheckItemKey::ALL.len()))?;
        for item in self.items() {
            seq.serialize_element(&item)?;
        }
        seq.end()
    }
}
