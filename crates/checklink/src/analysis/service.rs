use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use super::audit::{AuditEntry, AuditError, AuditSink};
use super::counter::DailyCounter;
use super::scorer::{evaluate, ScoreResult};

/// Service composing the scorer, the daily counter, and the audit sink.
///
/// Owns the counter behind a mutex so concurrent requests serialize the
/// rollover-then-increment sequence instead of racing on a process global.
pub struct CheckService<S> {
    counter: Mutex<DailyCounter>,
    audit: Arc<S>,
}

/// What a single check produced: the verdict plus the post-increment total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub result: ScoreResult,
    pub total_checks: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckServiceError {
    #[error("audit error: {0}")]
    Audit(#[from] AuditError),
}

impl<S> CheckService<S>
where
    S: AuditSink + 'static,
{
    pub fn new(audit: Arc<S>, today: chrono::NaiveDate) -> Self {
        Self {
            counter: Mutex::new(DailyCounter::new(today)),
            audit,
        }
    }

    /// Runs one check at the supplied wall-clock instant.
    ///
    /// The counter is updated before the audit append, so a failing sink
    /// still leaves the check counted.
    pub fn check(&self, url: &str, now: NaiveDateTime) -> Result<CheckOutcome, CheckServiceError> {
        let total_checks = {
            let mut counter = self.counter.lock().expect("counter mutex poisoned");
            counter.record_check(now.date())
        };

        let result = evaluate(url);
        let entry = AuditEntry::new(now, url, &result);
        self.audit.append(&entry)?;

        Ok(CheckOutcome {
            result,
            total_checks,
        })
    }

    /// Current total as displayed on the home page. Reads the stored value
    /// without a rollover; only checks themselves advance the date.
    pub fn total_checks(&self) -> u64 {
        self.counter
            .lock()
            .expect("counter mutex poisoned")
            .total_checks()
    }
}
