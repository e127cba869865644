//! Check History
//!
//! Headless controller behind the history view: vehicle and issue filters,
//! the currently displayed list, and one-at-a-time deletion.
//!
//! Every change to (vehicle, filter, refresh trigger) issues a [`FetchTicket`].
//! The host runs the backend call however it likes (inline with
//! [`CheckHistory::run_fetch`] or on another thread) and hands the result back
//! through [`CheckHistory::complete_fetch`]. Results for anything but the most
//! recently issued ticket are dropped.

use tracing::{debug, error, info, warn};

use super::fetch_state::{FetchParams, FetchState, FetchTicket};
use crate::domain::entities::{Check, Vehicle};
use crate::domain::ports::{ApiError, ApiResult, Confirmer, InspectionApi, Notifier, ToastKind};
use crate::domain::value_objects::IssueFilter;

pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this inspection record?";
pub const DELETE_SUCCESS_TOAST: &str = "Inspection record deleted.";
pub const DELETE_FAILED_TOAST: &str = "Failed to delete inspection record.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load checks.";

/// What the history area should show. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryDisplay<'a> {
    NoVehicle,
    Loading,
    Failed(&'a str),
    Empty,
    Checks(&'a [Check]),
}

/// Handle for a confirmed deletion in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTicket {
    check_id: String,
}

impl DeleteTicket {
    pub fn check_id(&self) -> &str {
        &self.check_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// User declined (or the record is already being deleted)
    Cancelled,
    Deleted,
    Failed(ApiError),
}

pub struct CheckHistory<A, N> {
    api: A,
    notifier: N,
    vehicles: Vec<Vehicle>,
    selected_vehicle: Option<String>,
    issue_filter: IssueFilter,
    refresh_trigger: u64,
    checks: Vec<Check>,
    deleting_id: Option<String>,
    fetch: FetchState,
    latest_seq: u64,
}

impl<A: InspectionApi, N: Notifier> CheckHistory<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            vehicles: Vec::new(),
            selected_vehicle: None,
            issue_filter: IssueFilter::default(),
            refresh_trigger: 0,
            checks: Vec::new(),
            deleting_id: None,
            fetch: FetchState::Idle,
            latest_seq: 0,
        }
    }

    /// Start from a host-supplied refresh trigger value.
    pub fn with_refresh_trigger(mut self, trigger: u64) -> Self {
        self.refresh_trigger = trigger;
        self
    }

    /// Fetch the vehicle filter options. Failures are only logged.
    pub fn load_vehicles(&mut self) -> usize {
        match self.api.get_vehicles() {
            Ok(vehicles) => {
                debug!(count = vehicles.len(), "loaded vehicles for history");
                self.vehicles = vehicles;
            }
            Err(e) => {
                error!(error = %e, "failed to load vehicles");
            }
        }
        self.vehicles.len()
    }

    /// Backend client, for hosts that run deletions off the controller.
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn selected_vehicle(&self) -> Option<&str> {
        self.selected_vehicle.as_deref()
    }

    pub fn issue_filter(&self) -> IssueFilter {
        self.issue_filter
    }

    pub fn refresh_trigger(&self) -> u64 {
        self.refresh_trigger
    }

    /// Records loaded for the current parameters. Empty while a fetch is
    /// pending or after it failed, so nothing from a previous selection leaks.
    pub fn checks(&self) -> &[Check] {
        match (&self.fetch, self.current_params()) {
            (FetchState::Loaded(loaded), Some(current)) if *loaded == current => &self.checks,
            _ => &[],
        }
    }

    pub fn deleting_id(&self) -> Option<&str> {
        self.deleting_id.as_deref()
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// Parameters the list should currently reflect
    pub fn current_params(&self) -> Option<FetchParams> {
        self.selected_vehicle.as_ref().map(|vehicle_id| FetchParams {
            vehicle_id: vehicle_id.clone(),
            filter: self.issue_filter,
            trigger: self.refresh_trigger,
        })
    }

    /// A vehicle is selected and no fetch for the current parameters has
    /// finished yet.
    pub fn is_loading(&self) -> bool {
        match self.current_params() {
            None => false,
            Some(current) => !self.fetch.is_settled_for(&current),
        }
    }

    pub fn display(&self) -> HistoryDisplay<'_> {
        if self.selected_vehicle.is_none() {
            return HistoryDisplay::NoVehicle;
        }
        if self.is_loading() {
            return HistoryDisplay::Loading;
        }
        if let FetchState::Failed { message, .. } = &self.fetch {
            return HistoryDisplay::Failed(message);
        }
        match self.checks() {
            [] => HistoryDisplay::Empty,
            list => HistoryDisplay::Checks(list),
        }
    }

    /// Select a vehicle; an empty id clears the selection.
    ///
    /// Clearing empties the list at once and invalidates any fetch still in
    /// flight.
    pub fn select_vehicle(&mut self, vehicle_id: &str) -> Option<FetchTicket> {
        if vehicle_id.is_empty() {
            self.clear_vehicle();
            return None;
        }
        if self.selected_vehicle.as_deref() == Some(vehicle_id) {
            return None;
        }
        self.selected_vehicle = Some(vehicle_id.to_string());
        self.issue_fetch()
    }

    pub fn clear_vehicle(&mut self) {
        self.selected_vehicle = None;
        self.checks.clear();
        self.fetch = FetchState::Idle;
        self.latest_seq += 1;
    }

    pub fn set_issue_filter(&mut self, filter: IssueFilter) -> Option<FetchTicket> {
        if self.issue_filter == filter {
            return None;
        }
        self.issue_filter = filter;
        self.issue_fetch()
    }

    /// Host-driven reload: any new trigger value refetches the list.
    pub fn set_refresh_trigger(&mut self, trigger: u64) -> Option<FetchTicket> {
        if self.refresh_trigger == trigger {
            return None;
        }
        self.refresh_trigger = trigger;
        self.issue_fetch()
    }

    /// Re-issue a fetch for the current parameters, superseding any pending one.
    pub fn reload(&mut self) -> Option<FetchTicket> {
        self.issue_fetch()
    }

    fn issue_fetch(&mut self) -> Option<FetchTicket> {
        let params = self.current_params()?;
        self.latest_seq += 1;
        self.fetch = FetchState::Loading(params.clone());
        debug!(
            seq = self.latest_seq,
            vehicle_id = %params.vehicle_id,
            filter = ?params.filter,
            trigger = params.trigger,
            "issuing history fetch"
        );
        Some(FetchTicket {
            seq: self.latest_seq,
            params,
        })
    }

    /// Commit a fetch result. Returns false if the ticket was superseded, in
    /// which case nothing changes.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: ApiResult<Vec<Check>>) -> bool {
        if ticket.seq != self.latest_seq {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "dropping stale history fetch"
            );
            return false;
        }

        match result {
            Ok(checks) => {
                debug!(seq = ticket.seq, count = checks.len(), "history fetch applied");
                self.checks = checks;
                self.fetch = FetchState::Loaded(ticket.params);
            }
            Err(e) => {
                error!(error = %e, vehicle_id = %ticket.params.vehicle_id, "failed to load checks");
                self.fetch = FetchState::Failed {
                    params: ticket.params,
                    message: LOAD_FAILED_MESSAGE.to_string(),
                };
            }
        }
        true
    }

    /// Run the backend call for `ticket` on the current thread and commit it.
    pub fn run_fetch(&mut self, ticket: FetchTicket) -> bool {
        let result = self
            .api
            .get_checks(&ticket.params.vehicle_id, ticket.params.has_issue());
        self.complete_fetch(ticket, result)
    }

    /// Ask for confirmation and mark `check_id` as being deleted.
    ///
    /// Returns `None` if the user declined or that record is already being
    /// deleted.
    pub fn begin_delete(
        &mut self,
        check_id: &str,
        confirmer: &impl Confirmer,
    ) -> Option<DeleteTicket> {
        if self.deleting_id.as_deref() == Some(check_id) {
            return None;
        }
        if !confirmer.confirm(DELETE_CONFIRM_PROMPT) {
            debug!(check_id, "deletion declined");
            return None;
        }
        self.deleting_id = Some(check_id.to_string());
        Some(DeleteTicket {
            check_id: check_id.to_string(),
        })
    }

    /// Apply the backend answer for a deletion.
    ///
    /// The record leaves the list only once the backend confirmed it; the
    /// busy marker is cleared either way.
    pub fn finish_delete(&mut self, ticket: DeleteTicket, result: ApiResult<()>) -> DeleteOutcome {
        let outcome = match result {
            Ok(()) => {
                info!(check_id = %ticket.check_id, "inspection record deleted");
                self.checks.retain(|c| c.id != ticket.check_id);
                self.notifier.show_toast(DELETE_SUCCESS_TOAST, ToastKind::Success);
                self.notifier.check_deleted();
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(error = %e, check_id = %ticket.check_id, "failed to delete inspection record");
                self.notifier.show_toast(DELETE_FAILED_TOAST, ToastKind::Error);
                DeleteOutcome::Failed(e)
            }
        };

        if self.deleting_id.as_deref() == Some(ticket.check_id.as_str()) {
            self.deleting_id = None;
        }
        outcome
    }

    /// Confirm, call the backend and apply the result in one go.
    pub fn delete(&mut self, check_id: &str, confirmer: &impl Confirmer) -> DeleteOutcome {
        let Some(ticket) = self.begin_delete(check_id, confirmer) else {
            return DeleteOutcome::Cancelled;
        };
        let result = self.api.delete_check(ticket.check_id());
        self.finish_delete(ticket, result)
    }
}
