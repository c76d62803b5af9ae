use std::sync::Arc;

use super::common::{at_noon, build_service, day_one, day_two, UnavailableAudit};
use crate::analysis::scorer::Verdict;
use crate::analysis::service::{CheckService, CheckServiceError};

#[test]
fn check_counts_scores_and_audits() {
    let (service, audit) = build_service();

    let outcome = service
        .check("http://example.com", at_noon(day_one()))
        .expect("check succeeds");

    assert_eq!(outcome.total_checks, 1);
    assert_eq!(outcome.result.score, 70);
    assert_eq!(outcome.result.verdict, Verdict::Risky);

    let entries = audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].url, "http://example.com");
    assert_eq!(
        entries[0].line(),
        "2026-08-25 12:00:00 | http://example.com | 70 | RISKY | uses HTTP instead of HTTPS"
    );
}

#[test]
fn audit_line_uses_none_placeholder_when_clean() {
    let (service, audit) = build_service();

    service
        .check("https://example.com", at_noon(day_one()))
        .expect("check succeeds");

    assert_eq!(
        audit.entries()[0].line(),
        "2026-08-25 12:00:00 | https://example.com | 100 | SAFE | none"
    );
}

#[test]
fn totals_roll_over_at_the_day_boundary() {
    let (service, _) = build_service();

    service
        .check("https://one.example", at_noon(day_one()))
        .expect("check succeeds");
    service
        .check("https://two.example", at_noon(day_one()))
        .expect("check succeeds");
    assert_eq!(service.total_checks(), 2);

    let outcome = service
        .check("https://three.example", at_noon(day_two()))
        .expect("check succeeds");
    assert_eq!(outcome.total_checks, 1);
    assert_eq!(service.total_checks(), 1);
}

#[test]
fn failing_sink_surfaces_but_check_is_still_counted() {
    let service = CheckService::new(Arc::new(UnavailableAudit), day_one());

    let error = service
        .check("https://example.com", at_noon(day_one()))
        .expect_err("sink failure propagates");
    assert!(matches!(error, CheckServiceError::Audit(_)));
    assert_eq!(service.total_checks(), 1);
}
