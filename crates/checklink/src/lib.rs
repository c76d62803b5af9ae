//! Heuristic URL safety checks behind a small HTML front end.
//!
//! The crate hosts the scoring rules, the daily check counter, the audit
//! trail contract, and the HTTP router. Binding a listener, loading
//! configuration from the environment, and the file-backed audit sink live
//! in the `services/web` companion crate.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
