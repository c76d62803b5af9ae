use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Args;

use checklink::analysis::CheckService;
use checklink::config::AppConfig;
use checklink::error::AppError;

use crate::infra::FileAuditSink;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// URL to score
    pub(crate) url: String,
    /// Override the check date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

/// Runs a single check from the command line, appending the same audit line
/// the HTTP service would.
pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs { url, date } = args;
    let config = AppConfig::load()?;

    let now = Local::now().naive_local();
    let timestamp = match date {
        Some(date) => date.and_time(now.time()),
        None => now,
    };

    let audit = Arc::new(FileAuditSink::open(&config.audit.log_path)?);
    let service = CheckService::new(audit, timestamp.date());
    let outcome = service.check(&url, timestamp)?;

    println!("URL:     {url}");
    println!(
        "Verdict: {} ({}/100)",
        outcome.result.verdict.label(),
        outcome.result.score
    );
    if outcome.result.reasons.is_empty() {
        println!("Reasons: none");
    } else {
        println!("Reasons:");
        for reason in &outcome.result.reasons {
            println!("  - {reason}");
        }
    }
    println!("Audit log: {}", config.audit.log_path.display());

    Ok(())
}
