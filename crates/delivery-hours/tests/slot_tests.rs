//! Tests for time slot parsing, validation, overlap, and sorting.

use delivery_hours::slot::{parse_time, slots_overlap, sort_slots, TimeSlot};
use delivery_hours::HoursError;

fn slot(open: &str, close: &str) -> TimeSlot {
    TimeSlot::parse(open, close).unwrap()
}

// ── Parsing and validation ──────────────────────────────────────────────────

#[test]
fn parses_valid_slot() {
    let s = slot("09:00", "17:00");
    assert_eq!(s.duration_minutes(), 480);
    assert!(s.is_valid());
}

#[test]
fn rejects_equal_open_and_close() {
    let err = TimeSlot::parse("09:00", "09:00").unwrap_err();
    assert!(matches!(err, HoursError::InvalidSlot { .. }));
}

#[test]
fn rejects_inverted_slot() {
    // No overnight wraparound: close before open is invalid, not "next day".
    let err = TimeSlot::parse("22:00", "02:00").unwrap_err();
    assert!(matches!(err, HoursError::InvalidSlot { .. }));
}

#[test]
fn rejects_malformed_time_strings() {
    for bad in ["25:00", "09:60", "nine", "", "09-00", "09:00:00"] {
        let err = parse_time(bad).unwrap_err();
        assert!(
            matches!(err, HoursError::InvalidTime(_)),
            "{bad:?} should be rejected"
        );
    }
}

// ── Overlap ─────────────────────────────────────────────────────────────────

#[test]
fn overlapping_slots_detected() {
    assert!(slots_overlap(&slot("09:00", "12:00"), &slot("11:00", "14:00")));
    assert!(slots_overlap(&slot("11:00", "14:00"), &slot("09:00", "12:00")));
    // Containment is overlap too.
    assert!(slots_overlap(&slot("09:00", "17:00"), &slot("10:00", "11:00")));
}

#[test]
fn touching_slots_do_not_overlap() {
    // [09:00, 12:00) and [12:00, 15:00) merely touch at the endpoint.
    assert!(!slots_overlap(&slot("09:00", "12:00"), &slot("12:00", "15:00")));
    assert!(!slots_overlap(&slot("12:00", "15:00"), &slot("09:00", "12:00")));
}

#[test]
fn disjoint_slots_do_not_overlap() {
    assert!(!slots_overlap(&slot("09:00", "10:00"), &slot("14:00", "15:00")));
}

// ── Sorting ─────────────────────────────────────────────────────────────────

#[test]
fn sort_orders_by_open_then_close() {
    let slots = vec![
        slot("15:00", "18:00"),
        slot("09:00", "12:00"),
        slot("09:00", "10:00"),
    ];
    let sorted = sort_slots(&slots);
    assert_eq!(
        sorted,
        vec![
            slot("09:00", "10:00"),
            slot("09:00", "12:00"),
            slot("15:00", "18:00"),
        ]
    );
}

#[test]
fn sort_is_idempotent() {
    let slots = vec![
        slot("15:00", "18:00"),
        slot("09:00", "12:00"),
        slot("12:30", "13:30"),
    ];
    let once = sort_slots(&slots);
    let twice = sort_slots(&once);
    assert_eq!(once, twice);
}

#[test]
fn sort_leaves_input_untouched() {
    let slots = vec![slot("15:00", "18:00"), slot("09:00", "12:00")];
    let _ = sort_slots(&slots);
    assert_eq!(slots[0], slot("15:00", "18:00"));
}

// ── Half-open membership ────────────────────────────────────────────────────

#[test]
fn contains_is_half_open() {
    let s = slot("09:00", "17:00");
    assert!(s.contains(parse_time("09:00").unwrap()));
    assert!(s.contains(parse_time("16:59").unwrap()));
    assert!(!s.contains(parse_time("17:00").unwrap()));
    assert!(!s.contains(parse_time("08:59").unwrap()));
}

// ── Serde wire shape ────────────────────────────────────────────────────────

#[test]
fn serializes_as_hhmm_strings() {
    let json = serde_json::to_string(&slot("09:00", "17:00")).unwrap();
    assert_eq!(json, r#"{"open":"09:00","close":"17:00"}"#);
}

#[test]
fn deserializes_hhmm_strings() {
    let s: TimeSlot = serde_json::from_str(r#"{"open":"08:30","close":"12:15"}"#).unwrap();
    assert_eq!(s, slot("08:30", "12:15"));
}

#[test]
fn deserialize_rejects_bad_time() {
    let result = serde_json::from_str::<TimeSlot>(r#"{"open":"24:30","close":"26:00"}"#);
    assert!(result.is_err());
}
