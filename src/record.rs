//! Persisted course record.
//!
//! The storage layer keeps a course as a small JSON object:
//!
//! ```json
//! { "selectedDate": "2025-01-06T00:00:00.000Z", "protocol": "4:3", "pillCount": 12 }
//! ```
//!
//! `selectedDate` is the local midnight of the start date rendered as a UTC
//! date-time. Reading converts it back to the local calendar date, so a
//! record written and read on the same machine keeps its day. Plain
//! `YYYY-MM-DD` and zone-less date-times are read as local dates.
//!
//! Where the record is stored is the caller's concern; this module only
//! converts between the record and [`ScheduleInput`].

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::local_midnight;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{clamp_dose_count, Protocol, ScheduleInput};

const UTC_MILLIS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Wire shape of a saved course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    /// Start date as a date-time string.
    pub selected_date: String,
    /// Protocol token (`"4:3"` or `"1:2"`).
    pub protocol: Protocol,
    /// Dose count as stored. Negative values are clamped on read.
    pub pill_count: i64,
}

impl SavedRecord {
    /// Captures a course for storage.
    pub fn from_input(input: &ScheduleInput) -> Self {
        let instant = local_midnight(input.start_date)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&input.start_date.and_time(NaiveTime::MIN)));

        Self {
            selected_date: instant.format(UTC_MILLIS_FORMAT).to_string(),
            protocol: input.protocol,
            pill_count: input.dose_count as i64,
        }
    }

    /// Rebuilds the course described by this record.
    ///
    /// # Errors
    /// `InvalidDate` if `selectedDate` is not a recognised date or date-time.
    pub fn into_input(self) -> ScheduleResult<ScheduleInput> {
        let start_date = parse_selected_date(&self.selected_date)?;
        if self.pill_count < 0 {
            log::warn!(
                "saved record has negative dose count {}; using 0",
                self.pill_count
            );
        }
        Ok(ScheduleInput::new(
            start_date,
            self.protocol,
            clamp_dose_count(self.pill_count),
        ))
    }

    /// Serializes the record to JSON.
    pub fn to_json(&self) -> ScheduleResult<String> {
        let json = serde_json::to_string(self)?;
        log::debug!("encoded course record ({} bytes)", json.len());
        Ok(json)
    }

    /// Parses a record from JSON.
    pub fn from_json(json: &str) -> ScheduleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Encodes a course straight to its JSON record.
pub fn save_input(input: &ScheduleInput) -> ScheduleResult<String> {
    SavedRecord::from_input(input).to_json()
}

/// Decodes a stored record, if there is one.
///
/// `None` (nothing stored) yields `Ok(None)`; a stored but malformed record
/// is an error.
pub fn load_input(stored: Option<&str>) -> ScheduleResult<Option<ScheduleInput>> {
    let Some(json) = stored else {
        log::debug!("no saved course record");
        return Ok(None);
    };
    let input = SavedRecord::from_json(json)?.into_input()?;
    log::debug!(
        "loaded course record: start {} protocol {} doses {}",
        input.start_date,
        input.protocol,
        input.dose_count
    );
    Ok(Some(input))
}

/// Reads a `selectedDate` value as a local calendar date.
fn parse_selected_date(raw: &str) -> ScheduleResult<NaiveDate> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Local).date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    Err(ScheduleError::InvalidDate(raw.to_string()))
}
