//! Calendar date helpers.
//!
//! All schedule arithmetic works on `NaiveDate`, so differences are in
//! whole calendar days and time-of-day never enters the computation.

use chrono::{DateTime, Days, Local, Locale, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::DayOffset;

/// Whole calendar days from `from` to `to` (negative if `to` is earlier).
#[inline]
pub fn whole_days_between(from: NaiveDate, to: NaiveDate) -> DayOffset {
    (to - from).num_days()
}

/// Adds a signed number of days.
///
/// Returns `None` if the result leaves the representable calendar range.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// The local instant at which `date` begins.
///
/// Midnight is skipped in zones whose DST switch happens at 00:00; noon is
/// used for those days so the instant still maps back to `date`.
pub fn local_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .or_else(|| {
            let noon = NaiveTime::from_hms_opt(12, 0, 0)?;
            Local.from_local_datetime(&date.and_time(noon)).earliest()
        })
}

/// Formats a calendar date with Spanish month and weekday names.
///
/// `pattern` uses strftime syntax (`%B` = `enero`, `%-d` = unpadded day).
pub fn format_es(date: NaiveDate, pattern: &str) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .format_localized(pattern, Locale::es_ES)
        .to_string()
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
