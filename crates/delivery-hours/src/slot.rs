//! Time slot primitives -- parsing, validation, overlap testing, sorting.
//!
//! A [`TimeSlot`] is a single contiguous open/close interval within one day,
//! with minute granularity and no date or timezone attached. Slots are
//! half-open: a store open 09:00-17:00 is open at 09:00 and closed at 17:00.
//! Overnight wraparound (close before open) is not supported.

use crate::error::{HoursError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A single open/close interval within one day.
///
/// Invariant: `open < close`. Construct via [`TimeSlot::new`] or
/// [`TimeSlot::parse`] to have the invariant checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub open: NaiveTime,
    #[serde(with = "hhmm")]
    pub close: NaiveTime,
}

impl TimeSlot {
    /// Build a slot, rejecting equal or inverted endpoints.
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self> {
        let slot = TimeSlot { open, close };
        if !slot.is_valid() {
            return Err(HoursError::InvalidSlot {
                open: format_hhmm(open),
                close: format_hhmm(close),
            });
        }
        Ok(slot)
    }

    /// Parse a slot from `"HH:MM"` strings.
    ///
    /// # Errors
    /// Returns `HoursError::InvalidTime` if either string is not a valid
    /// time-of-day, or `HoursError::InvalidSlot` if `open >= close`.
    pub fn parse(open: &str, close: &str) -> Result<Self> {
        Self::new(parse_time(open)?, parse_time(close)?)
    }

    /// True iff `open < close` (strict). A zero-length or inverted slot is
    /// invalid; there is no overnight wraparound.
    pub fn is_valid(&self) -> bool {
        self.open < self.close
    }

    /// Slot length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.close - self.open).num_minutes()
    }

    /// True iff the instant falls within the half-open interval `[open, close)`.
    pub fn contains(&self, t: NaiveTime) -> bool {
        self.open <= t && t < self.close
    }
}

/// Parse an `"HH:MM"` time-of-day string.
///
/// Callers must reject non-conforming strings here before comparing times;
/// the rest of the crate assumes parsed `NaiveTime` values throughout.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| HoursError::InvalidTime(s.to_string()))
}

/// Format a time back to the zero-padded `"HH:MM"` wire form.
pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// True iff the half-open intervals `[a.open, a.close)` and `[b.open, b.close)`
/// intersect.
///
/// Two slots overlap when `a.open < b.close && b.open < a.close`. This excludes
/// the touching case where one slot ends exactly when the other starts.
pub fn slots_overlap(a: &TimeSlot, b: &TimeSlot) -> bool {
    a.open < b.close && b.open < a.close
}

/// Return a new sequence ordered by ascending open time, ties broken by close
/// time ascending. Idempotent.
pub fn sort_slots(slots: &[TimeSlot]) -> Vec<TimeSlot> {
    let mut sorted = slots.to_vec();
    sorted.sort_by_key(|s| (s.open, s.close));
    sorted
}

/// Serde representation of times as `"HH:MM"` strings (the on-disk shape used
/// by both the legacy and the multi-slot schedule documents).
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
    }
}
