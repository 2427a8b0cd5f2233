//! CLI library components for the cycle tracker.

pub mod logging;
