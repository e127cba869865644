//! HTTP backend client

mod client;

pub use client::{HttpInspectionApi, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
