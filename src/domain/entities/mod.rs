//! Domain Entities
//!
//! Records owned by the backend. This client reads vehicles and checks and
//! produces new-check requests; it never edits an existing record.

mod check;
mod vehicle;

pub use check::{Check, NewCheck};
pub use vehicle::Vehicle;
