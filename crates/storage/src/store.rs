//! Persistence seam for the habit tracker.

use std::path::Path;

use habitman_core::HabitTracker;

use crate::error::Result;
use crate::{csv, json};

/// Save/load interface over the on-disk habit formats.
///
/// Loading replaces the tracker's collection. The rebuild happens record
/// by record: a record that fails validation partway through leaves the
/// tracker holding the successfully parsed prefix, while failures before
/// any record is converted (I/O, document syntax) leave the previous
/// collection untouched.
pub trait TrackerStore {
    /// Save all habits to a JSON file.
    fn save_to_json(&self, path: &Path) -> Result<()>;

    /// Replace the collection with the habits stored in a JSON file.
    fn load_from_json(&mut self, path: &Path) -> Result<()>;

    /// Save all habits to a CSV file.
    fn save_to_csv(&self, path: &Path) -> Result<()>;

    /// Replace the collection with the habits stored in a CSV file.
    fn load_from_csv(&mut self, path: &Path) -> Result<()>;
}

impl TrackerStore for HabitTracker {
    fn save_to_json(&self, path: &Path) -> Result<()> {
        json::save(self, path)
    }

    fn load_from_json(&mut self, path: &Path) -> Result<()> {
        json::load(self, path)
    }

    fn save_to_csv(&self, path: &Path) -> Result<()> {
        csv::save(self, path)
    }

    fn load_from_csv(&mut self, path: &Path) -> Result<()> {
        csv::load(self, path)
    }
}
