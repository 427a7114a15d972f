//! Error types for the schedule collaborators.
//!
//! The engine itself is total and never fails. Errors only arise at the
//! edges: decoding persisted records, parsing protocol tokens and building
//! month grids from caller-supplied year/month values.

use chrono::NaiveDate;

/// Result type for fallible schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Error type for fallible schedule operations.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Record encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown protocol: {0}")]
    UnknownProtocol(String),

    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Date out of calendar range near {0}")]
    DateOutOfRange(NaiveDate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScheduleError::UnknownProtocol("5:2".into());
        assert_eq!(err.to_string(), "Unknown protocol: 5:2");

        let err = ScheduleError::InvalidMonth { year: 2025, month: 13 };
        assert_eq!(err.to_string(), "Invalid month: 2025-13");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ScheduleError = json_err.into();
        assert!(matches!(err, ScheduleError::Json(_)));
    }
}
