use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};

use crate::analysis::audit::{AuditEntry, AuditError, AuditSink};
use crate::analysis::service::CheckService;

#[derive(Default)]
pub(super) struct MemoryAudit {
    entries: Mutex<Vec<AuditEntry>>,
}

impl AuditSink for MemoryAudit {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let mut guard = self.entries.lock().expect("audit mutex poisoned");
        guard.push(entry.clone());
        Ok(())
    }
}

impl MemoryAudit {
    pub(super) fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().expect("audit mutex poisoned").clone()
    }
}

pub(super) struct UnavailableAudit;

impl AuditSink for UnavailableAudit {
    fn append(&self, _entry: &AuditEntry) -> Result<(), AuditError> {
        Err(AuditError::Unavailable("sink offline".to_string()))
    }
}

pub(super) fn day_one() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date")
}

pub(super) fn day_two() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 26).expect("valid date")
}

pub(super) fn at_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(12, 0, 0).expect("valid time")
}

pub(super) fn build_service() -> (Arc<CheckService<MemoryAudit>>, Arc<MemoryAudit>) {
    let audit = Arc::new(MemoryAudit::default());
    let service = Arc::new(CheckService::new(audit.clone(), day_one()));
    (service, audit)
}

pub(super) async fn read_body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}
