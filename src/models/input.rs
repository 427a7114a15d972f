//! Schedule input model.
//!
//! A `ScheduleInput` is the complete, immutable description of one dosing
//! course. Every user edit (date pick, protocol switch, count edit) produces
//! a new value; nothing is mutated in place.
//!
//! # Dose count
//! The count is unsigned, so the non-negative invariant holds by
//! construction. Free-form caller input goes through [`clamp_dose_count`]
//! or [`parse_dose_count`] before it reaches the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Protocol;

/// Inputs of one dosing course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Calendar day of the first cycle (cycle day 0).
    pub start_date: NaiveDate,
    /// Dosing cadence.
    pub protocol: Protocol,
    /// Total doses in the course. `0` = empty schedule.
    pub dose_count: u32,
}

impl ScheduleInput {
    /// Creates a new schedule input.
    pub fn new(start_date: NaiveDate, protocol: Protocol, dose_count: u32) -> Self {
        Self {
            start_date,
            protocol,
            dose_count,
        }
    }

    /// The state a course returns to after a reset: starts `today`,
    /// default protocol, no doses.
    pub fn reset(today: NaiveDate) -> Self {
        Self::new(today, Protocol::default(), 0)
    }

    /// Returns a copy with a different start date.
    pub fn with_start_date(self, start_date: NaiveDate) -> Self {
        Self { start_date, ..self }
    }

    /// Returns a copy with a different protocol.
    pub fn with_protocol(self, protocol: Protocol) -> Self {
        Self { protocol, ..self }
    }

    /// Returns a copy with a different dose count.
    pub fn with_dose_count(self, dose_count: u32) -> Self {
        Self { dose_count, ..self }
    }

    /// Whether the course has no doses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dose_count == 0
    }
}

/// Clamps a signed count into the valid dose range.
///
/// Negative values become `0`; values beyond `u32::MAX` saturate.
pub fn clamp_dose_count(raw: i64) -> u32 {
    let clamped = raw.clamp(0, u32::MAX as i64) as u32;
    if clamped as i64 != raw {
        log::debug!("dose count {raw} clamped to {clamped}");
    }
    clamped
}

/// Parses free-text dose input the way a number field does.
///
/// Reads the leading integer (optional sign, then digits) and ignores
/// whatever follows. Text without a leading integer reads as `0`.
pub fn parse_dose_count(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    if negative {
        return 0;
    }

    // Overlong digit runs saturate rather than failing.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    clamp_dose_count(value.min(i64::MAX as u64) as i64)
}
