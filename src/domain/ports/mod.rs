//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmer;
pub mod inspection_api;
pub mod notifier;

pub use confirmer::{AlwaysConfirm, Confirmer};
pub use inspection_api::{ApiError, ApiResult, ErrorDetail, InspectionApi};
pub use notifier::{Notifier, SilentNotifier, ToastKind};
