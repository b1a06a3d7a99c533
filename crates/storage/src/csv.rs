//! CSV persistence.
//!
//! One row per habit under a fixed header:
//!
//! ```text
//! Name,Target,Category,History,Reminder Set
//! Exercise,30 minutes daily,HEALTH,2024-10-01:True;2024-10-02:False,False
//! ```
//!
//! The history cell joins `date:True|False` pairs with `;`; the reminder
//! cell is the literal `True`/`False` token. Fields containing the
//! delimiter, quotes, or line breaks are double-quoted with `""` escaping.
//! The parser works over the whole document so quoted fields may span
//! lines.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use habitman_core::{Category, Habit, HabitTracker};

use crate::error::{Result, StorageError};

const HEADER: &str = "Name,Target,Category,History,Reminder Set";

fn bool_token(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn quote_field(field: &str) -> String {
    let needs_quotes = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write every habit in the tracker to `path`.
pub fn save(tracker: &HabitTracker, path: &Path) -> Result<()> {
    let mut out = String::from(HEADER);
    out.push('\n');
    for habit in &tracker.habits {
        let history = habit
            .history
            .iter()
            .map(|(date, done)| format!("{}:{}", date.format("%Y-%m-%d"), bool_token(*done)))
            .collect::<Vec<_>>()
            .join(";");
        let fields = [
            habit.name.as_str(),
            habit.target.as_str(),
            habit.category.as_str(),
            history.as_str(),
            bool_token(habit.reminder_set),
        ];
        let row = fields
            .iter()
            .map(|f| quote_field(f))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push('\n');
    }
    fs::write(path, out.as_bytes()).map_err(|e| StorageError::io(path, e))
}

/// Replace the tracker's habits with the contents of `path`.
///
/// I/O failures and lexing failures surface before any mutation; row
/// validation happens while rebuilding, so a mid-loop failure leaves the
/// prefix of rows that already converted.
pub fn load(tracker: &mut HabitTracker, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let mut rows = parse_rows(&raw)?.into_iter();
    // Header row is skipped without inspection, matching the writer.
    rows.next();

    tracker.habits.clear();
    for (index, row) in rows.enumerate() {
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }
        let habit = row_to_habit(&row, index + 2)?;
        tracker.habits.push(habit);
    }
    Ok(())
}

/// Split a CSV document into rows of unquoted fields.
fn parse_rows(content: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }
    if in_quotes {
        return Err(StorageError::invalid("unterminated quoted field"));
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    Ok(rows)
}

/// Validate one data row into a habit. `line` is 1-based for error context.
fn row_to_habit(row: &[String], line: usize) -> Result<Habit> {
    let [name, target, category, history, reminder] = row else {
        return Err(StorageError::invalid(format!(
            "row {line}: expected 5 columns, found {}",
            row.len()
        )));
    };

    let category = category
        .parse::<Category>()
        .map_err(|e| StorageError::invalid(format!("row {line}: {e}")))?;
    let mut habit = Habit::new(name.clone(), target.clone(), category);
    // The reminder cell is read leniently: anything but the exact token
    // `True` counts as unset.
    habit.reminder_set = reminder.as_str() == "True";

    if !history.is_empty() {
        for cell in history.split(';') {
            let Some((raw_date, raw_done)) = cell.split_once(':') else {
                return Err(StorageError::invalid(format!(
                    "row {line}: malformed history cell {cell:?}"
                )));
            };
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|e| {
                StorageError::invalid(format!(
                    "row {line}: malformed history date {raw_date:?}: {e}"
                ))
            })?;
            let done = match raw_done {
                "True" => true,
                "False" => false,
                other => {
                    return Err(StorageError::invalid(format!(
                        "row {line}: malformed history flag {other:?}"
                    )))
                }
            };
            habit.history.insert(date, done);
        }
    }
    Ok(habit)
}
