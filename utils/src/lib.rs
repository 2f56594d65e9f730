//! Shared utilities for the attest protocol.

pub mod logging;
pub mod time;

pub use logging::init_tracing;
pub use time::format_duration;
