//! Domain Value Objects
//!
//! Immutable value types for the checklist and the form inputs.

mod check_item;
mod checklist;
mod issue_filter;
mod note;
mod odometer;

pub use check_item::{CheckItem, CheckItemKey, CheckItemStatus};
pub use checklist::Checklist;
pub use issue_filter::IssueFilter;
pub use note::{NoteInput, NOTE_MAX_LENGTH};
pub use odometer::OdometerInput;
