//! Month calendar view models.
//!
//! Turns a course into the data a month view needs: padded week rows with
//! a phase per day, and the style lookup that maps phases to classes.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use dose_schedule::calendar::{MonthGrid, PhasePalette, Theme, WeekStart};
//! use dose_schedule::models::{Protocol, ScheduleInput};
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let input = ScheduleInput::new(start, Protocol::FourThree, 8);
//! let grid = MonthGrid::containing(&input, start, start, WeekStart::Monday).unwrap();
//!
//! let palette = PhasePalette::default();
//! let cell = grid.day(start).unwrap();
//! assert_eq!(palette.class_for(cell.phase, Theme::Light), "bg-green-200");
//! ```

mod grid;
mod palette;

pub use grid::{GridDay, MonthGrid, WeekStart};
pub use palette::{PhasePalette, Theme, ThemedClass};
