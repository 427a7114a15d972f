//! Per-day phase classification.

use serde::{Deserialize, Serialize};

/// Whole calendar days between a queried date and the start date.
///
/// Negative for dates before the start.
pub type DayOffset = i64;

/// A day's status under a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseClassification {
    /// A dose is taken on this day.
    Active,
    /// Within a cycle, no dose, supply not yet exhausted.
    Rest,
    /// Before the start date, or at/after dose exhaustion.
    Unclassified,
}

impl PhaseClassification {
    /// Whether this day belongs to the running course (active or rest).
    #[inline]
    pub fn is_classified(&self) -> bool {
        !matches!(self, PhaseClassification::Unclassified)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, PhaseClassification::Active)
    }
}
