use chrono::NaiveDateTime;

use super::scorer::{ScoreResult, Verdict};

/// One audit line's worth of data for a completed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub timestamp: NaiveDateTime,
    pub url: String,
    pub score: i32,
    pub verdict: Verdict,
    pub reasons: Vec<String>,
}

impl AuditEntry {
    pub fn new(timestamp: NaiveDateTime, url: &str, result: &ScoreResult) -> Self {
        Self {
            timestamp,
            url: url.to_string(),
            score: result.score,
            verdict: result.verdict,
            reasons: result.reasons.clone(),
        }
    }

    /// Renders the fixed pipe-delimited line format:
    /// `timestamp | url | score | label | reasons` with `none` when no rule
    /// fired.
    pub fn line(&self) -> String {
        let reasons = if self.reasons.is_empty() {
            "none".to_string()
        } else {
            self.reasons.join(", ")
        };
        format!(
            "{} | {} | {} | {} | {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.url,
            self.score,
            self.verdict.label(),
            reasons
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit sink unavailable: {0}")]
    Unavailable(String),
    #[error("failed to append audit line: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only destination for audit lines. No read-back is ever required.
pub trait AuditSink: Send + Sync {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError>;
}
