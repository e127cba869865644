//! Issue filter value object - restricts the history list by issue status

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FleetcheckError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum IssueFilter {
    /// No filtering by issue status
    #[default]
    All,
    /// Only checks with at least one failed item
    #[value(alias = "true")]
    With,
    /// Only checks where every item passed
    #[value(alias = "false")]
    Without,
}

impl IssueFilter {
    pub const ALL_VARIANTS: [IssueFilter; 3] =
        [IssueFilter::All, IssueFilter::With, IssueFilter::Without];

    /// Value of the `hasIssue` query parameter; `None` means omit it.
    pub fn has_issue_param(&self) -> Option<bool> {
        match self {
            IssueFilter::All => None,
            IssueFilter::With => Some(true),
            IssueFilter::Without => Some(false),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueFilter::All => "All checks",
            IssueFilter::With => "With issues only",
            IssueFilter::Without => "No issues only",
        }
    }
}

impl std::fmt::Display for IssueFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IssueFilter {
    type Err = FleetcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(IssueFilter::All),
            "with" | "true" => Ok(IssueFilter::With),
            "without" | "false" => Ok(IssueFilter::Without),
            _ => Err(FleetcheckError::UnknownIssueFilter(s.to_string())),
        }
    }
}
