//! Fleetcheck - vehicle inspection client
//!
//! Fleetcheck submits vehicle inspections (a five-item checklist, an odometer
//! reading and an optional note) to an inspection backend and browses,
//! filters and deletes past inspections per vehicle.
//!
//! The two screens are headless controllers in [`application`]; the binary
//! drives them from an interactive terminal shell or one-shot subcommands.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckForm, CheckHistory, DeleteOutcome, HistoryDisplay, SubmitOutcome};
pub use config::Config;
pub use domain::entities::{Check, NewCheck, Vehicle};
pub use domain::ports::{ApiError, ApiResult, Confirmer, InspectionApi, Notifier, ToastKind};
pub use domain::value_objects::{CheckItemKey, CheckItemStatus, Checklist, IssueFilter};
pub use error::{FleetcheckError, FleetcheckResult};
pub use infrastructure::{HttpInspectionApi, RefreshTrigger, ShellNotifier};
