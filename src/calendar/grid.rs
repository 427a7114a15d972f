//! Month grid model.
//!
//! A month grid is every date from the start of the week containing the
//! 1st through the end of the week containing the last day of the month,
//! each annotated with its phase under the current course. The grid is
//! always a whole number of weeks.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::dates::{add_days, format_es};
use crate::engine::ScheduleEngine;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{PhaseClassification, ScheduleInput};

/// First day of each grid row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Column of `date` within its row (0-6).
    #[inline]
    fn column_of(&self, date: NaiveDate) -> i64 {
        match self {
            WeekStart::Monday => date.weekday().num_days_from_monday() as i64,
            WeekStart::Sunday => date.weekday().num_days_from_sunday() as i64,
        }
    }

    fn first_weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Spanish column headers, ordered from this week start.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Monday => ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"],
            WeekStart::Sunday => ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"],
        }
    }
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDay {
    pub date: NaiveDate,
    /// Phase under the course.
    pub phase: PhaseClassification,
    /// Dose ordinal for active days.
    pub dose_number: Option<u32>,
    /// Whether the date belongs to the displayed month (vs. padding).
    pub in_month: bool,
    /// Whether the date is the course start date.
    pub is_start: bool,
    /// Whether the date is the caller's "today".
    pub is_today: bool,
}

/// A month of dates padded to whole weeks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGrid {
    /// Displayed year.
    pub year: i32,
    /// Displayed month (1-12).
    pub month: u32,
    /// First day of each row.
    pub week_start: WeekStart,
    /// Course the grid was classified against.
    pub input: ScheduleInput,
    /// Reference date used for `is_today`.
    pub today: NaiveDate,
    /// Cells in row-major order.
    pub days: Vec<GridDay>,
}

impl MonthGrid {
    /// Builds the grid for `year`/`month`.
    ///
    /// # Errors
    /// `InvalidMonth` if the month does not exist, `DateOutOfRange` if the
    /// padded grid reaches past the representable calendar.
    pub fn build(
        input: &ScheduleInput,
        year: i32,
        month: u32,
        today: NaiveDate,
        week_start: WeekStart,
    ) -> ScheduleResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ScheduleError::InvalidMonth { year, month })?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(ScheduleError::DateOutOfRange(first))?;

        let grid_start = add_days(first, -week_start.column_of(first))
            .ok_or(ScheduleError::DateOutOfRange(first))?;
        let grid_end = add_days(last, 6 - week_start.column_of(last))
            .ok_or(ScheduleError::DateOutOfRange(last))?;

        let days: Vec<GridDay> = grid_start
            .iter_days()
            .take_while(|d| *d <= grid_end)
            .map(|date| GridDay {
                date,
                phase: ScheduleEngine::classify_day(input, date),
                dose_number: ScheduleEngine::dose_number_on(input, date),
                in_month: date.year() == year && date.month() == month,
                is_start: date == input.start_date,
                is_today: date == today,
            })
            .collect();

        log::trace!(
            "built {year}-{month:02} grid: {} days from {grid_start} ({:?}-first)",
            days.len(),
            week_start
        );

        Ok(Self {
            year,
            month,
            week_start,
            input: *input,
            today,
            days,
        })
    }

    /// Builds the grid for the month containing `date`.
    pub fn containing(
        input: &ScheduleInput,
        date: NaiveDate,
        today: NaiveDate,
        week_start: WeekStart,
    ) -> ScheduleResult<Self> {
        Self::build(input, date.year(), date.month(), today, week_start)
    }

    /// Grid for the following month, same course and settings.
    pub fn next(&self) -> ScheduleResult<Self> {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::build(&self.input, year, month, self.today, self.week_start)
    }

    /// Grid for the preceding month, same course and settings.
    pub fn previous(&self) -> ScheduleResult<Self> {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::build(&self.input, year, month, self.today, self.week_start)
    }

    /// Same month reclassified against a new course.
    pub fn with_input(&self, input: &ScheduleInput) -> ScheduleResult<Self> {
        Self::build(input, self.year, self.month, self.today, self.week_start)
    }

    /// Rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridDay]> {
        self.days.chunks(7)
    }

    /// Number of rows.
    #[inline]
    pub fn week_count(&self) -> usize {
        self.days.len() / 7
    }

    /// Finds the cell for a date, if it is on the grid.
    pub fn day(&self, date: NaiveDate) -> Option<&GridDay> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Heading text, e.g. `enero 2025`.
    pub fn title_es(&self) -> String {
        // `build` validated the month, so day 1 always exists.
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => format_es(first, "%B %Y"),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }

    /// Weekday of the first column.
    pub fn first_weekday(&self) -> Weekday {
        self.week_start.first_weekday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Protocol;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn course() -> ScheduleInput {
        ScheduleInput::new(date(2025, 1, 6), Protocol::FourThree, 8)
    }

    #[test]
    fn test_monday_grid_bounds() {
        let grid = MonthGrid::build(&course(), 2025, 1, date(2025, 1, 15), WeekStart::Monday).unwrap();

        assert_eq!(grid.days.len(), 35);
        assert_eq!(grid.week_count(), 5);
        assert_eq!(grid.days.first().unwrap().date, date(2024, 12, 30));
        assert_eq!(grid.days.last().unwrap().date, date(2025, 2, 2));
        assert_eq!(grid.days[0].date.weekday(), Weekday::Mon);
        assert!(!grid.days[0].in_month);
        assert!(grid.days[2].in_month);
    }

    #[test]
    fn test_sunday_grid_bounds() {
        let grid = MonthGrid::build(&course(), 2025, 1, date(2025, 1, 15), WeekStart::Sunday).unwrap();

        assert_eq!(grid.days.first().unwrap().date, date(2024, 12, 29));
        assert_eq!(grid.days.last().unwrap().date, date(2025, 2, 1));
        assert_eq!(grid.first_weekday(), Weekday::Sun);
        assert_eq!(grid.days.len() % 7, 0);
    }

    #[test]
    fn test_exact_four_week_month() {
        // February 2021 starts on a Monday and ends on a Sunday.
        let grid = MonthGrid::build(&course(), 2021, 2, date(2021, 2, 1), WeekStart::Monday).unwrap();
        assert_eq!(grid.days.len(), 28);
        assert!(grid.days.iter().all(|d| d.in_month));
    }

    #[test]
    fn test_cells_match_engine() {
        let input = course();
        let grid = MonthGrid::build(&input, 2025, 1, date(2025, 1, 15), WeekStart::Monday).unwrap();

        for cell in &grid.days {
            assert_eq!(cell.phase, ScheduleEngine::classify_day(&input, cell.date));
        }

        let start = grid.day(date(2025, 1, 6)).unwrap();
        assert!(start.is_start);
        assert_eq!(start.phase, PhaseClassification::Active);
        assert_eq!(start.dose_number, Some(1));

        assert!(grid.day(date(2025, 1, 15)).unwrap().is_today);
        assert_eq!(grid.days.iter().filter(|d| d.is_today).count(), 1);
        assert_eq!(
            grid.day(date(2025, 1, 10)).unwrap().phase,
            PhaseClassification::Rest
        );
        assert_eq!(grid.day(date(2025, 3, 1)), None);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let dec = MonthGrid::build(&course(), 2024, 12, date(2025, 1, 1), WeekStart::Monday).unwrap();
        let jan = dec.next().unwrap();
        assert_eq!((jan.year, jan.month), (2025, 1));

        let back = jan.previous().unwrap();
        assert_eq!((back.year, back.month), (2024, 12));
        assert_eq!(back.days, dec.days);
    }

    #[test]
    fn test_containing_and_reclassify() {
        let input = course();
        let grid = MonthGrid::containing(&input, date(2025, 1, 20), date(2025, 1, 20), WeekStart::Monday).unwrap();
        assert_eq!((grid.year, grid.month), (2025, 1));

        let empty = grid.with_input(&input.with_dose_count(0)).unwrap();
        assert!(empty.days.iter().all(|d| !d.phase.is_classified()));
    }

    #[test]
    fn test_invalid_month() {
        let err = MonthGrid::build(&course(), 2025, 13, date(2025, 1, 1), WeekStart::Monday).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidMonth { year: 2025, month: 13 }));
    }

    #[test]
    fn test_rows_and_labels() {
        let grid = MonthGrid::build(&course(), 2025, 1, date(2025, 1, 1), WeekStart::Monday).unwrap();
        assert!(grid.weeks().all(|row| row.len() == 7));
        assert_eq!(grid.weeks().count(), 5);
        assert_eq!(WeekStart::Monday.weekday_labels()[0], "Lun");
        assert_eq!(WeekStart::Sunday.weekday_labels()[0], "Dom");
        assert_eq!(grid.title_es(), "enero 2025");
    }
}
