//! Five Hundred tournament server.
//!
//! Serves one tournament over HTTP: clients read the seating and score
//! state and submit each table's result as it finishes.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
