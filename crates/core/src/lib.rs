//! Habitman core data models.
//!
//! This crate defines the habit, category, and tracker types together with
//! the date-token resolution, streak/progress computation, and report
//! generation that power the habit tracker.

#![warn(missing_docs)]

// Clock and date-token resolution
mod date;

// Habit model
mod category;
mod habit;

// Aggregation and reporting
mod tracker;

// Re-exports
pub use category::{Category, ParseCategoryError};
pub use date::{resolve_date_input, Clock, FixedClock, SystemClock};
pub use habit::Habit;
pub use tracker::{HabitTracker, ReportError};
