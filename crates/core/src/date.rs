//! Clock abstraction and date-token resolution.
//!
//! Habit operations accept human-facing date tokens ("today", "yesterday",
//! a day offset, or a calendar date). Resolution reads the current date
//! through the [`Clock`] trait so tests can pin it.

use chrono::{Days, Local, NaiveDate};

/// Source of the current local calendar date.
pub trait Clock {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the host's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(
    /// The pinned date
    pub NaiveDate,
);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Resolve a human-facing date token into a calendar date.
///
/// Recognized forms, keywords case-insensitive:
/// - `"today"` and `"yesterday"`
/// - a string of decimal digits: that many days before today (`"0"` = today)
/// - a `YYYY-MM-DD` calendar date
///
/// Anything else resolves to today. The silent fallback is part of the
/// contract: default-bound tokens and unchecked user input both pass
/// through here and must always come back as a usable date.
pub fn resolve_date_input(input: &str, clock: &dyn Clock) -> NaiveDate {
    let today = clock.today();
    if input.eq_ignore_ascii_case("today") {
        return today;
    }
    if input.eq_ignore_ascii_case("yesterday") {
        return today.pred_opt().unwrap_or(today);
    }
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        // Day offsets have no upper bound; one the calendar cannot represent
        // falls back to today like any other unresolvable token.
        return input
            .parse::<u64>()
            .ok()
            .and_then(|days| today.checked_sub_days(Days::new(days)))
            .unwrap_or(today);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").unwrap_or(today)
}
