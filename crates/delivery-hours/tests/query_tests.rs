//! Tests for effective-schedule query helpers.
//!
//! The "current instant" is always passed in explicitly, so these tests never
//! touch the system clock. 2026-08-24 is a Monday.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use delivery_hours::query::{available_days, hours_on, today_hours};
use delivery_hours::{
    is_available_at, next_available_day, DaySchedule, TimeSlot, WeekSchedule,
};

fn slot(open: &str, close: &str) -> TimeSlot {
    TimeSlot::parse(open, close).unwrap()
}

/// Monday 2026-08-24 at the given time.
fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 24)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn week_with(day: Weekday, slots: Vec<TimeSlot>) -> WeekSchedule {
    let mut week = WeekSchedule::closed_week();
    *week.day_mut(day) = DaySchedule::open_day(slots);
    week
}

// ── is_available_at ─────────────────────────────────────────────────────────

#[test]
fn available_within_slot() {
    let week = week_with(Weekday::Mon, vec![slot("09:00", "17:00")]);
    assert!(is_available_at(&week, monday_at(12, 30)));
}

#[test]
fn availability_is_half_open_at_boundaries() {
    let week = week_with(Weekday::Mon, vec![slot("09:00", "17:00")]);
    assert!(is_available_at(&week, monday_at(9, 0)));
    assert!(!is_available_at(&week, monday_at(17, 0)));
    assert!(is_available_at(&week, monday_at(16, 59)));
}

#[test]
fn not_available_between_slots() {
    let week = week_with(
        Weekday::Mon,
        vec![slot("09:00", "12:00"), slot("13:00", "17:00")],
    );
    assert!(!is_available_at(&week, monday_at(12, 30)));
    assert!(is_available_at(&week, monday_at(13, 0)));
}

#[test]
fn not_available_on_closed_day() {
    // Tuesday 2026-08-25.
    let week = week_with(Weekday::Mon, vec![slot("09:00", "17:00")]);
    let tuesday = NaiveDate::from_ymd_opt(2026, 8, 25)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert!(!is_available_at(&week, tuesday));
}

// ── Formatted hours ─────────────────────────────────────────────────────────

#[test]
fn formats_single_slot_in_twelve_hour_clock() {
    let week = week_with(Weekday::Mon, vec![slot("09:00", "17:00")]);
    assert_eq!(hours_on(&week, Weekday::Mon), "9:00 AM – 5:00 PM");
}

#[test]
fn formats_multiple_slots_joined_with_separator() {
    let week = week_with(
        Weekday::Mon,
        vec![slot("09:00", "12:00"), slot("13:30", "17:00")],
    );
    assert_eq!(
        hours_on(&week, Weekday::Mon),
        "9:00 AM – 12:00 PM, 1:30 PM – 5:00 PM"
    );
}

#[test]
fn closed_day_formats_as_closed() {
    let week = WeekSchedule::closed_week();
    assert_eq!(hours_on(&week, Weekday::Sat), "Closed");
}

#[test]
fn today_hours_uses_the_instants_weekday() {
    let week = week_with(Weekday::Mon, vec![slot("09:00", "17:00")]);
    assert_eq!(today_hours(&week, monday_at(10, 0)), "9:00 AM – 5:00 PM");
}

// ── Available days summary ──────────────────────────────────────────────────

#[test]
fn summary_lists_open_days_in_week_order() {
    let mut week = WeekSchedule::closed_week();
    *week.day_mut(Weekday::Fri) = DaySchedule::open_day(vec![slot("09:00", "17:00")]);
    *week.day_mut(Weekday::Mon) = DaySchedule::open_day(vec![slot("09:00", "17:00")]);

    assert_eq!(available_days(&week, false), vec!["Monday", "Friday"]);
    assert_eq!(available_days(&week, true), vec!["Mon", "Fri"]);
}

#[test]
fn summary_skips_open_day_with_no_slots() {
    let mut week = WeekSchedule::closed_week();
    *week.day_mut(Weekday::Mon) = DaySchedule {
        closed: false,
        slots: vec![],
    };
    assert!(available_days(&week, false).is_empty());
}

// ── Next available day ──────────────────────────────────────────────────────

#[test]
fn next_available_day_today_when_open() {
    let week = week_with(Weekday::Mon, vec![slot("09:00", "17:00")]);
    let next = next_available_day(&week, Weekday::Mon).unwrap();
    assert_eq!(next.day, Weekday::Mon);
    assert_eq!(next.label, "Monday");
    assert!(next.is_today);
    assert!(!next.is_tomorrow);
}

#[test]
fn next_available_day_tomorrow() {
    let week = week_with(Weekday::Tue, vec![slot("09:00", "17:00")]);
    let next = next_available_day(&week, Weekday::Mon).unwrap();
    assert_eq!(next.day, Weekday::Tue);
    assert!(!next.is_today);
    assert!(next.is_tomorrow);
}

#[test]
fn next_available_day_wraps_the_week() {
    // Scanning from Wednesday reaches Monday by wrapping past Sunday.
    let week = week_with(Weekday::Mon, vec![slot("09:00", "17:00")]);
    let next = next_available_day(&week, Weekday::Wed).unwrap();
    assert_eq!(next.day, Weekday::Mon);
    assert!(!next.is_today);
    assert!(!next.is_tomorrow);
}

// ── Scenario E: all-closed week returns the sentinel ────────────────────────

#[test]
fn all_closed_week_has_no_next_available_day() {
    let week = WeekSchedule::closed_week();
    assert_eq!(next_available_day(&week, Weekday::Mon), None);
}
