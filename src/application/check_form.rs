//! Check Form
//!
//! Headless controller behind the "submit inspection" form. It owns the
//! field state, applies the input masks, gates submission on the required
//! fields and turns backend failures into inline messages plus toasts.

use tracing::{debug, error, info, warn};

use crate::domain::entities::{Check, NewCheck, Vehicle};
use crate::domain::ports::{ApiError, InspectionApi, Notifier, ToastKind};
use crate::domain::value_objects::{
    CheckItemKey, CheckItemStatus, Checklist, NoteInput, OdometerInput,
};

pub const SUBMIT_SUCCESS_TOAST: &str = "Inspection submitted successfully!";
pub const SUBMIT_FAILED_TOAST: &str = "Failed to submit inspection. Please try again.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit check. Please try again.";

/// A field that must be filled before the form can be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Vehicle,
    Odometer,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Vehicle => "Vehicle",
            RequiredField::Odometer => "Odometer (km)",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RequiredField::Vehicle => "Please select a vehicle.",
            RequiredField::Odometer => "Please enter an odometer reading.",
        }
    }
}

/// What happened to a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Backend accepted the check; the form is back to its defaults
    Submitted(Check),
    /// Required fields missing; nothing was sent
    Blocked(Vec<RequiredField>),
    /// Backend returned field-level errors (one message per detail)
    Rejected(Vec<String>),
    /// Any other failure
    Failed,
}

pub struct CheckForm<A, N> {
    api: A,
    notifier: N,
    vehicles: Vec<Vehicle>,
    selected_vehicle: String,
    odometer: OdometerInput,
    checklist: Checklist,
    note: NoteInput,
    submitting: bool,
    error: Option<String>,
    validation_errors: Vec<String>,
}

impl<A: InspectionApi, N: Notifier> CheckForm<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            vehicles: Vec::new(),
            selected_vehicle: String::new(),
            odometer: OdometerInput::default(),
            checklist: Checklist::default(),
            note: NoteInput::default(),
            submitting: false,
            error: None,
            validation_errors: Vec::new(),
        }
    }

    /// Fetch the vehicle options. Failures are only logged; the option list
    /// stays empty.
    pub fn load_vehicles(&mut self) -> usize {
        match self.api.get_vehicles() {
            Ok(vehicles) => {
                debug!(count = vehicles.len(), "loaded vehicles for form");
                self.vehicles = vehicles;
            }
            Err(e) => {
                error!(error = %e, "failed to load vehicles");
            }
        }
        self.vehicles.len()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Select a vehicle by id; an empty id clears the selection.
    pub fn select_vehicle(&mut self, vehicle_id: impl Into<String>) {
        self.selected_vehicle = vehicle_id.into();
    }

    pub fn selected_vehicle(&self) -> Option<&str> {
        Some(self.selected_vehicle.as_str()).filter(|id| !id.is_empty())
    }

    /// Apply an odometer edit; returns false (and keeps the old text) if the
    /// candidate is not a partial decimal number.
    pub fn input_odometer(&mut self, text: &str) -> bool {
        self.odometer.input(text)
    }

    pub fn odometer(&self) -> &str {
        self.odometer.as_str()
    }

    pub fn set_item_status(&mut self, key: CheckItemKey, status: CheckItemStatus) {
        self.checklist.set(key, status);
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    /// Apply a note edit; returns false if it would exceed the length limit.
    pub fn input_note(&mut self, text: &str) -> bool {
        self.note.input(text)
    }

    pub fn note(&self) -> &NoteInput {
        &self.note
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Generic failure message from the last submit
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `"field: reason"` lines from the last rejected submit
    pub fn validation_errors(&self) -> &[String] {
        &self.validation_errors
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.selected_vehicle().is_none() {
            missing.push(RequiredField::Vehicle);
        }
        if self.odometer.parse().is_none() {
            missing.push(RequiredField::Odometer);
        }
        missing
    }

    /// Request body for the current field values.
    pub fn draft(&self) -> Result<NewCheck, Vec<RequiredField>> {
        let missing = self.missing_fields();
        let (Some(vehicle_id), Some(odometer_km)) = (self.selected_vehicle(), self.odometer.parse())
        else {
            return Err(missing);
        };

        Ok(NewCheck {
            vehicle_id: vehicle_id.to_string(),
            odometer_km,
            items: self.checklist,
            note: self.note.payload(),
        })
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let body = match self.draft() {
            Ok(body) => body,
            Err(missing) => {
                debug!(?missing, "submit blocked by required fields");
                return SubmitOutcome::Blocked(missing);
            }
        };

        self.error = None;
        self.validation_errors.clear();
        self.submitting = true;

        let result = self.api.create_check(&body);
        let outcome = match result {
            Ok(check) => {
                info!(check_id = %check.id, vehicle_id = %check.vehicle_id, "inspection submitted");
                self.reset();
                self.notifier.check_submitted();
                self.notifier.show_toast(SUBMIT_SUCCESS_TOAST, ToastKind::Success);
                SubmitOutcome::Submitted(check)
            }
            Err(ApiError::Validation { details }) => {
                warn!(count = details.len(), "inspection rejected by backend validation");
                self.validation_errors = details.iter().map(ToString::to_string).collect();
                self.notifier.show_toast(
                    &format!("Validation failed: {} error(s)", details.len()),
                    ToastKind::Error,
                );
                SubmitOutcome::Rejected(self.validation_errors.clone())
            }
            Err(e) => {
                error!(error = %e, "failed to submit inspection");
                self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
                self.notifier.show_toast(SUBMIT_FAILED_TOAST, ToastKind::Error);
                SubmitOutcome::Failed
            }
        };

        self.submitting = false;
        outcome
    }

    /// Put every field back to its default and drop any error from the
    /// last submit (vehicle list is kept).
    pub fn reset(&mut self) {
        self.selected_vehicle.clear();
        self.odometer.clear();
        self.checklist = Checklist::default();
        self.note.clear();
        self.error = None;
        self.validation_errors.clear();
    }
}
