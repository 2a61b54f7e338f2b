//! Day and week schedule model plus the pure editor operations.
//!
//! A [`DaySchedule`] holds up to [`MAX_SLOTS_PER_DAY`] non-overlapping slots,
//! sorted ascending by open time. A [`WeekSchedule`] is a fixed-key record with
//! one field per named day -- not a 0-6 indexed array -- serialized with the
//! canonical capitalized day keys (`"Monday"` ... `"Sunday"`). Day-of-week
//! labels live in a separate lookup so the algorithms stay label-free.

use crate::error::{HoursError, Result};
use crate::slot::{slots_overlap, sort_slots, TimeSlot};
use chrono::{Duration, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Maximum number of slots a single day may hold.
pub const MAX_SLOTS_PER_DAY: usize = 3;

/// The seven days in Monday-first order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full day label, e.g. `"Monday"`.
pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Abbreviated day label, e.g. `"Mon"`.
pub fn day_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("in-range hour/minute literal")
}

fn default_slot() -> TimeSlot {
    TimeSlot {
        open: hm(9, 0),
        close: hm(17, 0),
    }
}

/// Latest representable close time (minute granularity, no wraparound).
fn day_end() -> NaiveTime {
    hm(23, 59)
}

/// Produce a fresh slot for the editor.
///
/// With no previous slot, returns the default 09:00-17:00 range. Given the
/// previous slot, returns a one-hour window starting at its close, clamped to
/// 23:59, so consecutive slots do not overlap by construction. When no valid
/// window remains in the day, falls back to the default range.
pub fn create_empty_slot(previous: Option<&TimeSlot>) -> TimeSlot {
    let Some(prev) = previous else {
        return default_slot();
    };
    let open = prev.close;
    if open >= day_end() {
        return default_slot();
    }
    let (candidate, wrapped) = open.overflowing_add_signed(Duration::hours(1));
    let close = if wrapped != 0 || candidate > day_end() {
        day_end()
    } else {
        candidate
    };
    TimeSlot { open, close }
}

/// One day's opening hours.
///
/// When `closed` is true the slots are preserved (so re-opening the day
/// restores them) but are not consulted by any availability computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub closed: bool,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

impl Default for DaySchedule {
    /// A missing day is treated as closed (fail-safe default).
    fn default() -> Self {
        Self::closed_day()
    }
}

impl DaySchedule {
    /// An open day with the given slots, stored sorted.
    pub fn open_day(slots: Vec<TimeSlot>) -> Self {
        DaySchedule {
            closed: false,
            slots: sort_slots(&slots),
        }
    }

    /// A closed day with no slots.
    pub fn closed_day() -> Self {
        DaySchedule {
            closed: true,
            slots: Vec::new(),
        }
    }

    /// True iff the day is open with at least one slot.
    pub fn is_available(&self) -> bool {
        !self.closed && !self.slots.is_empty()
    }

    /// Check the day invariants: every slot valid, at most
    /// [`MAX_SLOTS_PER_DAY`] slots, pairwise non-overlapping, sorted ascending.
    pub fn validate(&self, day: Weekday) -> Result<()> {
        if self.slots.len() > MAX_SLOTS_PER_DAY {
            return Err(HoursError::TooManySlots {
                day: day_label(day).to_string(),
                count: self.slots.len(),
                max: MAX_SLOTS_PER_DAY,
            });
        }
        for slot in &self.slots {
            if !slot.is_valid() {
                return Err(HoursError::InvalidSlot {
                    open: crate::slot::format_hhmm(slot.open),
                    close: crate::slot::format_hhmm(slot.close),
                });
            }
        }
        for pair in self.slots.windows(2) {
            if pair[1].open < pair[0].open || slots_overlap(&pair[0], &pair[1]) {
                return Err(HoursError::OverlappingSlots {
                    day: day_label(day).to_string(),
                });
            }
        }
        Ok(())
    }

    /// Add a slot, keeping slots sorted. Returns false (no-op) once the day
    /// already holds [`MAX_SLOTS_PER_DAY`] slots.
    pub fn add_slot(&mut self, slot: TimeSlot) -> bool {
        if self.slots.len() >= MAX_SLOTS_PER_DAY {
            return false;
        }
        self.slots.push(slot);
        self.slots = sort_slots(&self.slots);
        true
    }

    /// Remove the slot at `index` (no-op when out of range). Removing the last
    /// slot marks the day closed.
    pub fn remove_slot(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
        }
        if self.slots.is_empty() {
            self.closed = true;
        }
    }

    /// Toggle the day open or closed. Opening a day that has no slots seeds it
    /// with one default slot; closing preserves the slots for later re-opening.
    pub fn set_open(&mut self, open: bool) {
        if open {
            self.closed = false;
            if self.slots.is_empty() {
                self.slots.push(default_slot());
            }
        } else {
            self.closed = true;
        }
    }
}

/// A full week of day schedules, one field per named day.
///
/// All seven keys are always present; on deserialization a missing day key
/// defaults to a closed day rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WeekSchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl WeekSchedule {
    /// Weekdays open 09:00-17:00, weekend closed.
    pub fn standard_week() -> Self {
        let weekday = DaySchedule::open_day(vec![default_slot()]);
        WeekSchedule {
            monday: weekday.clone(),
            tuesday: weekday.clone(),
            wednesday: weekday.clone(),
            thursday: weekday.clone(),
            friday: weekday,
            saturday: DaySchedule::closed_day(),
            sunday: DaySchedule::closed_day(),
        }
    }

    /// All seven days closed.
    pub fn closed_week() -> Self {
        WeekSchedule::default()
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Iterate the days in Monday-first order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        WEEK.iter().map(move |&d| (d, self.day(d)))
    }

    /// Validate all seven days.
    pub fn validate(&self) -> Result<()> {
        for (day, schedule) in self.days() {
            schedule.validate(day)?;
        }
        Ok(())
    }
}
