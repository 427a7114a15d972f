//! Dosing protocol model.
//!
//! A protocol is a fixed repeating cadence of active (dose) days followed
//! by rest days. The set is closed: only the two cadences below exist.
//!
//! | Protocol | Token | Cycle | Active days |
//! |----------|-------|-------|-------------|
//! | `FourThree` | `"4:3"` | 7 days | cycle days 0-3 |
//! | `OneTwo` | `"1:2"` | 3 days | cycle day 0 |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// A dosing cadence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// Four active days followed by three rest days, repeating weekly.
    #[default]
    #[serde(rename = "4:3")]
    FourThree,
    /// One active day followed by two rest days.
    #[serde(rename = "1:2")]
    OneTwo,
}

impl Protocol {
    /// All protocols, in display order.
    pub const ALL: [Protocol; 2] = [Protocol::FourThree, Protocol::OneTwo];

    /// Wire token used by persisted records and selectors.
    pub fn token(&self) -> &'static str {
        match self {
            Protocol::FourThree => "4:3",
            Protocol::OneTwo => "1:2",
        }
    }

    /// Length of one cycle in days.
    #[inline]
    pub fn cycle_len(&self) -> i64 {
        match self {
            Protocol::FourThree => 7,
            Protocol::OneTwo => 3,
        }
    }

    /// Number of active days at the head of each cycle.
    #[inline]
    pub fn active_days_per_cycle(&self) -> i64 {
        match self {
            Protocol::FourThree => 4,
            Protocol::OneTwo => 1,
        }
    }

    /// Number of rest days closing each cycle.
    #[inline]
    pub fn rest_days_per_cycle(&self) -> i64 {
        self.cycle_len() - self.active_days_per_cycle()
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Protocol {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Protocol::ALL
            .into_iter()
            .find(|p| p.token() == s.trim())
            .ok_or_else(|| ScheduleError::UnknownProtocol(s.to_string()))
    }
}
