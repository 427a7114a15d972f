//! Schedule period (start/end summary).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::format_es;

/// Long date format used by the summary lines: `5 de enero, 2025`.
const LONG_DATE_ES: &str = "%-d de %B, %Y";

/// Derived first and last day of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    /// First day of the course.
    pub start_date: NaiveDate,
    /// Day of the final dose. `None` = empty course.
    pub end_date: Option<NaiveDate>,
}

impl SchedulePeriod {
    /// Creates a new period.
    pub fn new(start_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Whether the course has no doses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end_date.is_none()
    }

    /// Inclusive span in days from start to the final dose.
    ///
    /// Returns `None` for an empty course.
    pub fn duration_days(&self) -> Option<i64> {
        self.end_date
            .map(|end| (end - self.start_date).num_days() + 1)
    }

    /// Summary lines (`Inicio`, `Fin`) in Spanish long date form.
    ///
    /// Returns `None` for an empty course, which renders no summary.
    pub fn describe_es(&self) -> Option<(String, String)> {
        let end = self.end_date?;
        Some((
            format!("Inicio: {}", format_long_es(self.start_date)),
            format!("Fin: {}", format_long_es(end)),
        ))
    }
}

/// Formats a date as `d de MMMM, yyyy` with Spanish month names.
pub fn format_long_es(date: NaiveDate) -> String {
    format_es(date, LONG_DATE_ES)
}
