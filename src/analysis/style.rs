//! Style keys: the unit of typographic classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::TextRun;

/// A (rounded font size, font family) pair.
///
/// Sizes are rounded half-to-even, so 12.5pt and 11.5pt both land on 12.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleKey {
    /// Font size in whole points
    pub size_pt: i32,
    /// Font family as decoded
    pub family: String,
}

impl StyleKey {
    /// Create a key from an already-rounded size.
    pub fn new(size_pt: i32, family: impl Into<String>) -> Self {
        Self {
            size_pt,
            family: family.into(),
        }
    }

    /// Create a key from a decoded font size.
    pub fn from_size(font_size: f32, family: impl Into<String>) -> Self {
        Self::new(round_size(font_size), family)
    }

    /// Key of a text run.
    pub fn of_run(run: &TextRun) -> Self {
        Self::from_size(run.font_size, run.font_family.as_str())
    }

    /// Check whether a run carries this style without allocating a key.
    pub fn matches(&self, run: &TextRun) -> bool {
        self.size_pt == round_size(run.font_size) && self.family == run.font_family
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt {}", self.size_pt, self.family)
    }
}

fn round_size(font_size: f32) -> i32 {
    font_size.round_ties_even() as i32
}
