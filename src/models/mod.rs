//! Dosing schedule domain models.
//!
//! Plain immutable values describing one course and what the engine
//! derives from it.
//!
//! | Type | Role |
//! |------|------|
//! | `Protocol` | Fixed cadence (4:3 or 1:2) |
//! | `ScheduleInput` | Start date, protocol, dose count |
//! | `PhaseClassification` | Active / Rest / Unclassified per day |
//! | `SchedulePeriod` | Start date and final dose date |

mod input;
mod period;
mod phase;
mod protocol;

pub use input::{clamp_dose_count, parse_dose_count, ScheduleInput};
pub use period::{format_long_es, SchedulePeriod};
pub use phase::{DayOffset, PhaseClassification};
pub use protocol::Protocol;
