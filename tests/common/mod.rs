//! Common test utilities for Fleetcheck scenario and CLI tests.
//!
//! This module provides:
//! - `StubBackend`: In-process HTTP backend with an in-memory fleet
//! - `TestEnv`: Isolated home directory plus helpers to run the binary

#![allow(dead_code)]

pub mod backend;
pub mod env;

pub use backend::*;
pub use env::*;
