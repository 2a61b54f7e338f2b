//! Query helpers over an effective weekly schedule.
//!
//! Every function takes the current instant as an explicit parameter -- the
//! crate never reads the system clock, so all of this is unit-testable without
//! mocking time. Slot membership is half-open: open at `open`, closed again at
//! `close`.

use crate::schedule::{day_abbrev, day_label, WeekSchedule, WEEK};
use crate::slot::TimeSlot;
use chrono::{Datelike, NaiveDateTime, Weekday};

/// The first upcoming day with delivery availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextAvailableDay {
    pub day: Weekday,
    pub label: &'static str,
    pub is_today: bool,
    pub is_tomorrow: bool,
}

/// True iff the schedule has an open slot covering the given instant.
pub fn is_available_at(schedule: &WeekSchedule, now: NaiveDateTime) -> bool {
    let day = schedule.day(now.weekday());
    if day.closed {
        return false;
    }
    let t = now.time();
    day.slots.iter().any(|slot| slot.contains(t))
}

fn format_slot(slot: &TimeSlot) -> String {
    format!(
        "{} – {}",
        slot.open.format("%-I:%M %p"),
        slot.close.format("%-I:%M %p")
    )
}

/// Human-readable hours for one day, e.g. `"9:00 AM – 12:00 PM, 1:00 PM – 5:00 PM"`,
/// or `"Closed"`.
pub fn hours_on(schedule: &WeekSchedule, day: Weekday) -> String {
    let day = schedule.day(day);
    if !day.is_available() {
        return "Closed".to_string();
    }
    day.slots
        .iter()
        .map(format_slot)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable hours for the given instant's day.
pub fn today_hours(schedule: &WeekSchedule, now: NaiveDateTime) -> String {
    hours_on(schedule, now.weekday())
}

/// Labels of the days with at least one open slot, Monday-first.
pub fn available_days(schedule: &WeekSchedule, abbreviated: bool) -> Vec<&'static str> {
    schedule
        .days()
        .filter(|(_, day)| day.is_available())
        .map(|(weekday, _)| {
            if abbreviated {
                day_abbrev(weekday)
            } else {
                day_label(weekday)
            }
        })
        .collect()
}

/// Scan forward from `today` (inclusive) for the first available day.
///
/// Returns `None` when no day of the week has any availability -- an
/// all-closed schedule is a normal input, not an error.
pub fn next_available_day(schedule: &WeekSchedule, today: Weekday) -> Option<NextAvailableDay> {
    let mut day = today;
    for offset in 0..WEEK.len() {
        if schedule.day(day).is_available() {
            return Some(NextAvailableDay {
                day,
                label: day_label(day),
                is_today: offset == 0,
                is_tomorrow: offset == 1,
            });
        }
        day = day.succ();
    }
    None
}
