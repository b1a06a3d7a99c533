//! Habit tracker - ordered collection of habits and report generation.

use chrono::NaiveDate;

use crate::date::{Clock, SystemClock};
use crate::habit::Habit;

/// Error from report generation.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A report bound was not a valid `YYYY-MM-DD` date.
    #[error("invalid report date {input:?}: {source}")]
    InvalidDate {
        /// The rejected input
        input: String,
        /// Parse failure detail
        #[source]
        source: chrono::ParseError,
    },
}

/// Ordered collection of habits.
///
/// Habits keep their insertion order, which is also the order reports walk
/// them in. Duplicate names are permitted.
#[derive(Debug, Clone, Default)]
pub struct HabitTracker {
    /// The tracked habits, in insertion order
    pub habits: Vec<Habit>,
}

impl HabitTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a habit.
    pub fn add_habit(&mut self, habit: Habit) {
        self.habits.push(habit);
    }

    /// Generate the habit report against the system clock. See
    /// [`HabitTracker::generate_habit_report_with`].
    pub fn generate_habit_report(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<String, ReportError> {
        self.generate_habit_report_with(start_date, end_date, &SystemClock)
    }

    /// Generate a multi-section text report.
    ///
    /// The summary section resolves each missing bound as `"today"` and
    /// feeds both through the permissive token rules of
    /// [`crate::resolve_date_input`]. The detailed section parses given
    /// bounds strictly as `YYYY-MM-DD` (malformed bounds are an error) and
    /// otherwise spans each habit's recorded history, or just today for a
    /// habit with none.
    pub fn generate_habit_report_with(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<String, ReportError> {
        let mut report = String::from("Habit Tracking Report\n=====================\n\n");

        if let (Some(start), Some(end)) = (start_date, end_date) {
            report.push_str(&format!("Date Range: {} to {}\n\n", start, end));
        }

        report.push_str("Habits Summary:\n");
        for habit in &self.habits {
            let (completed, total) = habit.check_progress_with(
                start_date.unwrap_or("today"),
                end_date.unwrap_or("today"),
                clock,
            );
            let completion_rate = if total > 0 {
                completed as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            report.push_str(&format!("  {} ({}):\n", habit.name, habit.category));
            report.push_str(&format!("    Target: {}\n", habit.target));
            report.push_str(&format!(
                "    Completion Rate: {:.2}% ({}/{} days)\n",
                completion_rate, completed, total
            ));
            report.push_str(&format!("    Current Streak: {} days\n", habit.get_streak()));
            report.push_str(&format!(
                "    Reminder Set: {}\n\n",
                if habit.reminder_set { "Yes" } else { "No" }
            ));
        }

        report.push_str("Detailed Progress:\n");
        for habit in &self.habits {
            report.push_str(&format!("  {}:\n", habit.name));
            let start = match start_date {
                Some(s) => parse_report_date(s)?,
                None => habit
                    .history
                    .first_key_value()
                    .map(|(&d, _)| d)
                    .unwrap_or_else(|| clock.today()),
            };
            let end = match end_date {
                Some(s) => parse_report_date(s)?,
                None => habit
                    .history
                    .last_key_value()
                    .map(|(&d, _)| d)
                    .unwrap_or_else(|| clock.today()),
            };
            let mut day = start;
            while day <= end {
                let status = if habit.done_on(day) {
                    "Completed"
                } else {
                    "Not Completed"
                };
                report.push_str(&format!("    {}: {}\n", day, status));
                match day.succ_opt() {
                    Some(next) => day = next,
                    None => break,
                }
            }
            report.push('\n');
        }

        Ok(report)
    }
}

/// Strictly parse a `YYYY-MM-DD` report bound.
fn parse_report_date(input: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| ReportError::InvalidDate {
        input: input.to_string(),
        source,
    })
}
