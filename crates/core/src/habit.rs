//! Habit model - one recurring habit and its completion history.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::date::{resolve_date_input, Clock, SystemClock};

/// A single recurring habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Display name, not necessarily unique within a tracker
    pub name: String,

    /// Free-form target description, e.g. "30 minutes daily"
    pub target: String,

    /// Category, fixed at construction
    pub category: Category,

    /// Completion history. Only explicitly marked dates are present; an
    /// absent date means "not completed". Loaders may insert explicit
    /// `false` entries, which readers treat the same as absence but which
    /// survive a save/load round trip.
    pub history: BTreeMap<NaiveDate, bool>,

    /// Whether a reminder has been requested for this habit
    pub reminder_set: bool,
}

impl Habit {
    /// Create a habit with an empty history and no reminder.
    pub fn new(name: impl Into<String>, target: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            category,
            history: BTreeMap::new(),
            reminder_set: false,
        }
    }

    /// Mark the habit done for the given date token (see
    /// [`resolve_date_input`]). Marking the same date twice is a no-op.
    /// Future dates are permitted and count like any other.
    pub fn mark_done(&mut self, date_input: &str) {
        self.mark_done_with(date_input, &SystemClock);
    }

    /// [`Habit::mark_done`] with an explicit clock.
    pub fn mark_done_with(&mut self, date_input: &str, clock: &dyn Clock) {
        let date = resolve_date_input(date_input, clock);
        self.history.insert(date, true);
    }

    /// Request a reminder for this habit. There is no way to clear it.
    pub fn set_reminder(&mut self) {
        self.reminder_set = true;
    }

    /// Count completed days over an inclusive date range.
    ///
    /// Both endpoints are date tokens resolved independently and never
    /// swapped: a start after the end yields zero completed days over a
    /// non-positive total.
    ///
    /// Returns `(completed_days, total_days)`.
    pub fn check_progress(&self, start_input: &str, end_input: &str) -> (u32, i64) {
        self.check_progress_with(start_input, end_input, &SystemClock)
    }

    /// [`Habit::check_progress`] with an explicit clock.
    pub fn check_progress_with(
        &self,
        start_input: &str,
        end_input: &str,
        clock: &dyn Clock,
    ) -> (u32, i64) {
        let start = resolve_date_input(start_input, clock);
        let end = resolve_date_input(end_input, clock);
        let total_days = (end - start).num_days() + 1;

        let mut completed = 0;
        let mut day = start;
        while day <= end {
            if self.done_on(day) {
                completed += 1;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        (completed, total_days)
    }

    /// Consecutive completed days ending at the latest recorded date.
    ///
    /// The walk is anchored to the newest history entry rather than today,
    /// so a streak that ended a week ago still reports its full length. An
    /// explicit `false` entry breaks the walk just like a missing one.
    pub fn get_streak(&self) -> u32 {
        let Some((&latest, _)) = self.history.last_key_value() else {
            return 0;
        };
        let mut streak = 0;
        let mut day = latest;
        while self.done_on(day) {
            streak += 1;
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }
        streak
    }

    /// Whether the habit is recorded as completed on `day`.
    pub fn done_on(&self, day: NaiveDate) -> bool {
        self.history.get(&day).copied().unwrap_or(false)
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Target: {}, Category: {}, Streak: {}",
            self.name,
            self.target,
            self.category,
            self.get_streak()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mark_done_is_idempotent() {
        let mut habit = Habit::new("Exercise", "30 minutes daily", Category::Health);
        habit.mark_done("2024-10-01");
        let once = habit.history.clone();
        habit.mark_done("2024-10-01");
        assert_eq!(habit.history, once);
        assert_eq!(habit.history.get(&date(2024, 10, 1)), Some(&true));
    }

    #[test]
    fn test_two_day_streak_and_progress() {
        let mut habit = Habit::new("Exercise", "30 minutes daily", Category::Health);
        habit.mark_done("2024-10-01");
        habit.mark_done("2024-10-02");
        assert_eq!(habit.get_streak(), 2);
        assert_eq!(habit.check_progress("2024-10-01", "2024-10-02"), (2, 2));
    }

    #[test]
    fn test_empty_history() {
        let habit = Habit::new("Meditate", "10 minutes daily", Category::Health);
        assert_eq!(habit.get_streak(), 0);
        assert!(habit.to_string().contains("Streak: 0"));
    }

    #[test]
    fn test_streak_is_anchored_to_latest_entry_not_today() {
        let mut habit = Habit::new("Run", "5km daily", Category::Health);
        habit.mark_done("2020-03-01");
        habit.mark_done("2020-03-02");
        habit.mark_done("2020-03-03");
        // Years later the streak still reports the run ending 2020-03-03.
        assert_eq!(habit.get_streak(), 3);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let mut habit = Habit::new("Read", "1 chapter daily", Category::Learning);
        habit.mark_done("2024-10-01");
        habit.mark_done("2024-10-03");
        habit.mark_done("2024-10-04");
        assert_eq!(habit.get_streak(), 2);
    }

    #[test]
    fn test_streak_stops_at_explicit_false_entry() {
        let mut habit = Habit::new("Read", "1 chapter daily", Category::Learning);
        habit.history.insert(date(2024, 10, 2), false);
        habit.mark_done("2024-10-03");
        habit.mark_done("2024-10-04");
        assert_eq!(habit.get_streak(), 2);
    }

    #[test]
    fn test_check_progress_single_day() {
        let mut habit = Habit::new("Write", "500 words daily", Category::Productivity);
        assert_eq!(habit.check_progress("2024-10-01", "2024-10-01"), (0, 1));
        habit.mark_done("2024-10-01");
        assert_eq!(habit.check_progress("2024-10-01", "2024-10-01"), (1, 1));
    }

    #[test]
    fn test_check_progress_ignores_false_entries() {
        let mut habit = Habit::new("Write", "500 words daily", Category::Productivity);
        habit.mark_done("2024-10-01");
        habit.history.insert(date(2024, 10, 2), false);
        assert_eq!(habit.check_progress("2024-10-01", "2024-10-02"), (1, 2));
    }

    #[test]
    fn test_check_progress_inverted_range_is_not_swapped() {
        let mut habit = Habit::new("Write", "500 words daily", Category::Productivity);
        habit.mark_done("2024-10-01");
        habit.mark_done("2024-10-02");
        assert_eq!(habit.check_progress("2024-10-02", "2024-10-01"), (0, 0));
        assert_eq!(habit.check_progress("2024-10-05", "2024-10-01"), (0, -3));
    }

    #[test]
    fn test_future_dates_count() {
        let clock = FixedClock(date(2024, 10, 15));
        let mut habit = Habit::new("Plan", "weekly review", Category::Personal);
        habit.mark_done_with("2024-12-25", &clock);
        assert_eq!(habit.get_streak(), 1);
        assert_eq!(
            habit.check_progress_with("2024-12-25", "2024-12-25", &clock),
            (1, 1)
        );
    }

    #[test]
    fn test_tokens_resolve_against_clock() {
        let clock = FixedClock(date(2024, 10, 15));
        let mut habit = Habit::new("Stretch", "5 minutes", Category::Health);
        habit.mark_done_with("today", &clock);
        habit.mark_done_with("yesterday", &clock);
        assert_eq!(habit.get_streak(), 2);
        assert_eq!(habit.check_progress_with("1", "today", &clock), (2, 2));
    }

    #[test]
    fn test_unparseable_mark_date_falls_back_to_today() {
        let clock = FixedClock(date(2024, 10, 15));
        let mut habit = Habit::new("Stretch", "5 minutes", Category::Health);
        habit.mark_done_with("not-a-date", &clock);
        assert_eq!(habit.history.get(&date(2024, 10, 15)), Some(&true));
    }

    #[test]
    fn test_display_summary() {
        let mut habit = Habit::new("Yoga", "30 minutes daily", Category::Health);
        habit.mark_done("2024-10-01");
        assert_eq!(
            habit.to_string(),
            "Yoga - Target: 30 minutes daily, Category: HEALTH, Streak: 1"
        );
    }
}
