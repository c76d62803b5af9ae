use chrono::NaiveDate;

/// Running count of checks performed, reset at calendar-day boundaries.
///
/// The calling layer injects the current date so the rollover logic stays
/// clock-free and testable. Purely informational display state; never
/// consulted for admission or throttling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCounter {
    total_checks: u64,
    current_date: NaiveDate,
}

impl DailyCounter {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            total_checks: 0,
            current_date: today,
        }
    }

    /// Registers one check for `today` and returns the updated total.
    ///
    /// A date mismatch resets the count to zero and adopts `today` before
    /// the increment, so the first check of a new day always reports 1.
    pub fn record_check(&mut self, today: NaiveDate) -> u64 {
        if today != self.current_date {
            self.total_checks = 0;
            self.current_date = today;
        }
        self.total_checks += 1;
        self.total_checks
    }

    pub fn total_checks(&self) -> u64 {
        self.total_checks
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }
}
