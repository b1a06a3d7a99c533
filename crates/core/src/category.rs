//! Habit categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of habit categories.
///
/// The upper-case name of each variant is its stable serialized form, used
/// verbatim in JSON, CSV, and report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Habits related to physical or mental health
    Health,
    /// Habits related to productivity
    Productivity,
    /// Habits related to learning
    Learning,
    /// Personal habits
    Personal,
    /// Habits that fit none of the other categories
    Other,
}

impl Category {
    /// Stable serialized name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Health => "HEALTH",
            Category::Productivity => "PRODUCTIVITY",
            Category::Learning => "LEARNING",
            Category::Personal => "PERSONAL",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not one of the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown habit category: {0}")]
pub struct ParseCategoryError(
    /// The rejected name
    pub String,
);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HEALTH" => Ok(Category::Health),
            "PRODUCTIVITY" => Ok(Category::Productivity),
            "LEARNING" => Ok(Category::Learning),
            "PERSONAL" => Ok(Category::Personal),
            "OTHER" => Ok(Category::Other),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
