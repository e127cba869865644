//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `http/` - Blocking HTTP client for the inspection backend
//! - `notifier` - Toast routing and the shared refresh trigger
//! - `confirm` - Terminal confirmation prompt

pub mod confirm;
pub mod http;
pub mod notifier;

// Re-export for convenience
pub use confirm::InteractiveConfirmer;
pub use http::HttpInspectionApi;
pub use notifier::{RefreshTrigger, ShellNotifier};
