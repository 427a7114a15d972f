//! Dosing protocol calendar.
//!
//! Computes day-by-day medication schedules for two fixed dosing protocols
//! (4 days on / 3 off, and one day in three) from a start date and a total
//! dose count.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Protocol`, `ScheduleInput`,
//!   `PhaseClassification`, `SchedulePeriod`
//! - **`engine`**: `ScheduleEngine`, the pure phase and end-date functions
//! - **`calendar`**: Month grids and the phase style palette
//! - **`record`**: The persisted `{selectedDate, protocol, pillCount}` record
//! - **`dates`**: Whole-day arithmetic and local-date helpers
//!
//! # Architecture
//!
//! The engine is stateless. Callers hold one immutable `ScheduleInput`,
//! replace it wholesale on every edit, and re-query the engine. Storage,
//! dialogs and rendering stay outside this crate.

pub mod calendar;
pub mod dates;
pub mod engine;
pub mod error;
pub mod models;
pub mod record;

pub use engine::ScheduleEngine;
pub use error::{ScheduleError, ScheduleResult};
