//! URL check pipeline: scoring rules, the daily counter, audit lines, and
//! the HTTP surface that ties them together.

pub mod audit;
pub mod counter;
pub(crate) mod pages;
pub mod router;
pub mod scorer;
pub mod service;

#[cfg(test)]
mod tests;

pub use audit::{AuditEntry, AuditError, AuditSink};
pub use counter::DailyCounter;
pub use router::check_router;
pub use scorer::{evaluate, ScoreResult, Verdict, SUSPICIOUS_KEYWORDS};
pub use service::{CheckOutcome, CheckService, CheckServiceError};
