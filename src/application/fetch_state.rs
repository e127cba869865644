//! Fetch bookkeeping for the history list
//!
//! Each refetch is keyed by the parameter tuple that triggered it and carries
//! a sequence number. Only the most recently issued ticket may commit.

use crate::domain::value_objects::IssueFilter;

/// Parameters a history fetch was issued for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchParams {
    pub vehicle_id: String,
    pub filter: IssueFilter,
    pub trigger: u64,
}

impl FetchParams {
    /// Value of the `hasIssue` query parameter
    pub fn has_issue(&self) -> Option<bool> {
        self.filter.has_issue_param()
    }
}

/// Where the history list stands relative to its parameters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// No vehicle selected
    #[default]
    Idle,
    /// A fetch for these parameters is in flight
    Loading(FetchParams),
    /// The list holds the result for these parameters
    Loaded(FetchParams),
    /// The fetch for these parameters failed
    Failed { params: FetchParams, message: String },
}

impl FetchState {
    /// Parameters this state refers to, if any
    pub fn params(&self) -> Option<&FetchParams> {
        match self {
            FetchState::Idle => None,
            FetchState::Loading(p) | FetchState::Loaded(p) => Some(p),
            FetchState::Failed { params, .. } => Some(params),
        }
    }

    /// True if a fetch for exactly `current` has finished, successfully or not.
    pub fn is_settled_for(&self, current: &FetchParams) -> bool {
        match self {
            FetchState::Loaded(p) => p == current,
            FetchState::Failed { params, .. } => params == current,
            FetchState::Idle | FetchState::Loading(_) => false,
        }
    }
}

/// Handle for one issued fetch.
///
/// Hand it back to [`CheckHistory::complete_fetch`](super::CheckHistory::complete_fetch)
/// together with the backend result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub(crate) seq: u64,
    pub(crate) params: FetchParams,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn params(&self) -> &FetchParams {
        &self.params
    }
}
