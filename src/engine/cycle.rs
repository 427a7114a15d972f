//! Per-protocol cycle arithmetic.
//!
//! Every function here takes a non-negative day offset from the start of
//! the course and answers with integer arithmetic only.

use crate::models::{DayOffset, Protocol};

/// Position of a day within its cycle (`0..cycle_len`).
#[inline]
pub fn cycle_position(protocol: Protocol, days_since_start: DayOffset) -> i64 {
    days_since_start.rem_euclid(protocol.cycle_len())
}

/// Active-phase days counted up to the phase boundary of `days_since_start`.
///
/// - 4:3: `floor(d / 7) * 4 + min(d mod 7, 4)`
/// - 1:2: `floor(d / 3)`
///
/// The 1:2 count does not include the active day of the current cycle, so a
/// course is exhausted one cycle later than a strict running count would say.
pub fn doses_consumed_by(protocol: Protocol, days_since_start: DayOffset) -> i64 {
    let d = days_since_start;
    match protocol {
        Protocol::FourThree => d.div_euclid(7) * 4 + d.rem_euclid(7).min(4),
        Protocol::OneTwo => d.div_euclid(3),
    }
}

/// Whether a cycle position falls in the active phase.
#[inline]
pub fn is_active_position(protocol: Protocol, days_since_start: DayOffset) -> bool {
    let pos = cycle_position(protocol, days_since_start);
    match protocol {
        Protocol::FourThree => pos < 4,
        Protocol::OneTwo => pos == 0,
    }
}

/// Day offset of the final (`dose_count`-th) dose.
///
/// Returns `None` when `dose_count == 0`.
///
/// For 4:3, a count that fills whole cycles ends on day 3 of the last
/// cycle, not after its rest days.
pub fn final_dose_offset(protocol: Protocol, dose_count: u32) -> Option<DayOffset> {
    if dose_count == 0 {
        return None;
    }
    let n = dose_count as i64;
    let offset = match protocol {
        Protocol::FourThree => {
            let full_cycles = n / 4;
            let remainder = n % 4;
            if remainder == 0 {
                (full_cycles - 1) * 7 + 3
            } else {
                full_cycles * 7 + remainder - 1
            }
        }
        Protocol::OneTwo => (n - 1) * 3,
    };
    Some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_three_consumed() {
        let consumed: Vec<i64> = (0..15)
            .map(|d| doses_consumed_by(Protocol::FourThree, d))
            .collect();
        assert_eq!(consumed, vec![0, 1, 2, 3, 4, 4, 4, 4, 5, 6, 7, 8, 8, 8, 8]);
    }

    #[test]
    fn test_one_two_consumed() {
        let consumed: Vec<i64> = (0..10)
            .map(|d| doses_consumed_by(Protocol::OneTwo, d))
            .collect();
        assert_eq!(consumed, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn test_active_positions() {
        let four_three: Vec<bool> = (0..8)
            .map(|d| is_active_position(Protocol::FourThree, d))
            .collect();
        assert_eq!(
            four_three,
            vec![true, true, true, true, false, false, false, true]
        );

        let one_two: Vec<bool> = (0..7)
            .map(|d| is_active_position(Protocol::OneTwo, d))
            .collect();
        assert_eq!(one_two, vec![true, false, false, true, false, false, true]);
    }

    #[test]
    fn test_final_dose_offset() {
        assert_eq!(final_dose_offset(Protocol::FourThree, 0), None);
        assert_eq!(final_dose_offset(Protocol::FourThree, 1), Some(0));
        assert_eq!(final_dose_offset(Protocol::FourThree, 3), Some(2));
        assert_eq!(final_dose_offset(Protocol::FourThree, 4), Some(3));
        assert_eq!(final_dose_offset(Protocol::FourThree, 5), Some(7));
        assert_eq!(final_dose_offset(Protocol::FourThree, 8), Some(10));
        assert_eq!(final_dose_offset(Protocol::FourThree, 9), Some(14));

        assert_eq!(final_dose_offset(Protocol::OneTwo, 0), None);
        assert_eq!(final_dose_offset(Protocol::OneTwo, 1), Some(0));
        assert_eq!(final_dose_offset(Protocol::OneTwo, 3), Some(6));
    }
}
