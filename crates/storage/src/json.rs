//! JSON persistence.
//!
//! The on-disk document is an ordered array of per-habit objects:
//!
//! ```json
//! [
//!   {
//!     "name": "Exercise",
//!     "target": "30 minutes daily",
//!     "category": "HEALTH",
//!     "history": { "2024-10-01": true },
//!     "reminder_set": false
//!   }
//! ]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use habitman_core::{Category, Habit, HabitTracker};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};

/// On-disk shape of one habit.
///
/// Category and history dates stay as strings here so loading can validate
/// them record-by-record; a failure keeps the prefix that already parsed.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HabitRecord {
    pub name: String,
    pub target: String,
    pub category: String,
    pub history: BTreeMap<String, bool>,
    pub reminder_set: bool,
}

impl From<&Habit> for HabitRecord {
    fn from(habit: &Habit) -> Self {
        Self {
            name: habit.name.clone(),
            target: habit.target.clone(),
            category: habit.category.to_string(),
            history: habit
                .history
                .iter()
                .map(|(date, done)| (date.format("%Y-%m-%d").to_string(), *done))
                .collect(),
            reminder_set: habit.reminder_set,
        }
    }
}

impl HabitRecord {
    /// Validate the record into a habit.
    pub(crate) fn into_habit(self) -> Result<Habit> {
        let HabitRecord {
            name,
            target,
            category,
            history,
            reminder_set,
        } = self;
        let category = category
            .parse::<Category>()
            .map_err(|e| StorageError::invalid(e.to_string()))?;
        let mut habit = Habit::new(name, target, category);
        habit.reminder_set = reminder_set;
        for (raw, done) in history {
            let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|e| StorageError::invalid(format!("malformed history date {raw:?}: {e}")))?;
            habit.history.insert(date, done);
        }
        Ok(habit)
    }
}

/// Write every habit in the tracker to `path` as pretty-printed JSON.
pub fn save(tracker: &HabitTracker, path: &Path) -> Result<()> {
    let records: Vec<HabitRecord> = tracker.habits.iter().map(HabitRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path, json.as_bytes()).map_err(|e| StorageError::io(path, e))
}

/// Replace the tracker's habits with the contents of `path`.
///
/// The document is parsed up front, so I/O and JSON failures leave the
/// tracker untouched. Record validation happens while rebuilding: a
/// mid-loop failure leaves the prefix of habits that already converted.
pub fn load(tracker: &mut HabitTracker, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let records: Vec<HabitRecord> = serde_json::from_str(&raw)?;

    tracker.habits.clear();
    for record in records {
        let habit = record.into_habit()?;
        tracker.habits.push(habit);
    }
    Ok(())
}
