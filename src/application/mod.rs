//! Application Layer
//!
//! Controllers that drive the two screens of the client.
//! This layer:
//! - Depends on the Domain layer (entities, value objects, ports)
//! - Holds screen state and sequencing, never I/O details
//! - Is driven by the presentation layer (interactive shell or subcommands)
//!
//! ## Controllers
//!
//! - `CheckForm` - Field state, input masks, submit gating and error mapping
//! - `CheckHistory` - Filters, stale-safe refetching and deletion

pub mod check_form;
pub mod check_history;
pub mod fetch_state;

pub use check_form::{
    CheckForm, RequiredField, SubmitOutcome, SUBMIT_FAILED_MESSAGE, SUBMIT_FAILED_TOAST,
    SUBMIT_SUCCESS_TOAST,
};
pub use check_history::{
    CheckHistory, DeleteOutcome, DeleteTicket, HistoryDisplay, DELETE_CONFIRM_PROMPT,
    DELETE_FAILED_TOAST, DELETE_SUCCESS_TOAST, LOAD_FAILED_MESSAGE,
};
pub use fetch_state::{FetchParams, FetchState, FetchTicket};
