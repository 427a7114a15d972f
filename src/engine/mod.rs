//! Protocol scheduling engine.
//!
//! Pure functions from a [`ScheduleInput`] (and a queried date) to phase
//! classifications and the derived schedule period. The engine holds no
//! state; every call is reproducible from its arguments and safe to make
//! from any number of threads.
//!
//! # Classification
//! A day is classified in three steps:
//! 1. Days before the start date are `Unclassified`.
//! 2. If the doses consumed by the day's phase boundary already reach the
//!    dose count, the course is exhausted: `Unclassified`.
//! 3. Otherwise the cycle position decides `Active` or `Rest`.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use dose_schedule::engine::ScheduleEngine;
//! use dose_schedule::models::{PhaseClassification, Protocol, ScheduleInput};
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let input = ScheduleInput::new(start, Protocol::OneTwo, 3);
//!
//! let end = ScheduleEngine::compute_end_date(&input).unwrap();
//! assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 12).unwrap());
//! assert_eq!(ScheduleEngine::classify_day(&input, end), PhaseClassification::Active);
//! ```

mod cycle;

pub use cycle::{cycle_position, doses_consumed_by, final_dose_offset, is_active_position};

use chrono::NaiveDate;

use crate::dates::{add_days, whole_days_between};
use crate::models::{PhaseClassification, ScheduleInput, SchedulePeriod};

/// Stateless schedule engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleEngine;

impl ScheduleEngine {
    /// Classifies one calendar day under the course.
    pub fn classify_day(input: &ScheduleInput, query_date: NaiveDate) -> PhaseClassification {
        if input.is_empty() || query_date < input.start_date {
            return PhaseClassification::Unclassified;
        }

        let days_since_start = whole_days_between(input.start_date, query_date);
        let consumed = doses_consumed_by(input.protocol, days_since_start);
        if consumed >= input.dose_count as i64 {
            return PhaseClassification::Unclassified;
        }

        if is_active_position(input.protocol, days_since_start) {
            PhaseClassification::Active
        } else {
            PhaseClassification::Rest
        }
    }

    /// Date of the final dose.
    ///
    /// Returns `None` for an empty course, or when the date would fall
    /// outside the representable calendar range.
    pub fn compute_end_date(input: &ScheduleInput) -> Option<NaiveDate> {
        let offset = final_dose_offset(input.protocol, input.dose_count)?;
        add_days(input.start_date, offset)
    }

    /// Start date and final dose date of the course.
    pub fn schedule_period(input: &ScheduleInput) -> SchedulePeriod {
        SchedulePeriod::new(input.start_date, Self::compute_end_date(input))
    }

    /// 1-based number of the dose taken on `date`, if it is an active day.
    pub fn dose_number_on(input: &ScheduleInput, date: NaiveDate) -> Option<u32> {
        if !Self::classify_day(input, date).is_active() {
            return None;
        }
        let days_since_start = whole_days_between(input.start_date, date);
        // Active implies consumed < dose_count, so this fits in u32.
        let consumed = doses_consumed_by(input.protocol, days_since_start);
        u32::try_from(consumed + 1).ok()
    }

    /// Classifies every day of the inclusive range `[from, to]`, in order.
    pub fn classify_range(
        input: &ScheduleInput,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<(NaiveDate, PhaseClassification)> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .map(|d| (d, Self::classify_day(input, d)))
            .collect()
    }
}
