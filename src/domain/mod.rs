//! Domain Layer
//!
//! Inspection records, checklist rules and the ports the controllers talk
//! through. Nothing here touches the network or the terminal.
//!
//! ## Structure
//!
//! - `entities/` - Records owned by the backend (Vehicle, Check, NewCheck)
//! - `value_objects/` - Checklist keys/statuses, issue filter, input masks
//! - `ports/` - Backend client, toast sink and confirmation interfaces

pub mod entities;
pub mod ports;
pub mod value_objects;
