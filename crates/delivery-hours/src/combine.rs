//! Effective-schedule combinator.
//!
//! Computes the hours a store can actually deliver: the union of its active
//! agents' (drivers') weekly availability, intersected per day with the
//! store's own opening hours. Pure and synchronous -- every call is
//! independent given its inputs, so callers that recompute per render are
//! expected to memoize on their side.

use crate::schedule::{DaySchedule, WeekSchedule, MAX_SLOTS_PER_DAY, WEEK};
use crate::slot::{sort_slots, TimeSlot};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A delivery agent with its own weekly availability.
///
/// Only agents with `active == true` contribute to the union; inactive agents
/// are ignored entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub active: bool,
    pub schedule: WeekSchedule,
}

/// Merge a set of intervals into maximal contiguous intervals.
///
/// Intervals that overlap or touch (one ends exactly when another starts) are
/// merged into one. Returns a sorted, pairwise-disjoint sequence.
pub fn union_slots(slots: &[TimeSlot]) -> Vec<TimeSlot> {
    let sorted = sort_slots(slots);

    let mut merged: Vec<TimeSlot> = Vec::new();
    for slot in sorted {
        if let Some(last) = merged.last_mut() {
            if slot.open <= last.close {
                last.close = last.close.max(slot.close);
                continue;
            }
        }
        merged.push(slot);
    }
    merged
}

/// Intersect two interval sets.
///
/// For every pair the intersection is `[max(opens), min(closes))` when
/// non-empty. Touching intervals produce nothing. Returns the non-empty
/// pairwise intersections, sorted.
pub fn intersect_slots(a: &[TimeSlot], b: &[TimeSlot]) -> Vec<TimeSlot> {
    let mut out = Vec::new();
    for x in a {
        for y in b {
            let open = x.open.max(y.open);
            let close = x.close.min(y.close);
            if open < close {
                out.push(TimeSlot { open, close });
            }
        }
    }
    sort_slots(&out)
}

/// Cap a day's slots at [`MAX_SLOTS_PER_DAY`].
///
/// Policy: keep the longest intervals, ties broken by earliest start, then
/// restore chronological order. The merge normally stays within the input
/// cardinality bounds, so this only triggers on pathological inputs.
fn cap_slots(slots: Vec<TimeSlot>) -> Vec<TimeSlot> {
    if slots.len() <= MAX_SLOTS_PER_DAY {
        return slots;
    }
    let mut by_length = slots;
    by_length.sort_by_key(|s| (Reverse(s.duration_minutes()), s.open));
    by_length.truncate(MAX_SLOTS_PER_DAY);
    sort_slots(&by_length)
}

/// Compute one day of the effective schedule.
///
/// The agent union is the merge of all non-closed agent days; an empty
/// `agent_days` slice means agent availability is not tracked, in which case
/// the store's own day passes through unchanged. The result is closed when the
/// store day is closed or the intersection comes up empty.
pub fn effective_day(store_day: &DaySchedule, agent_days: &[&DaySchedule]) -> DaySchedule {
    if store_day.closed {
        return DaySchedule::closed_day();
    }
    if agent_days.is_empty() {
        return store_day.clone();
    }

    let agent_slots: Vec<TimeSlot> = agent_days
        .iter()
        .filter(|d| !d.closed)
        .flat_map(|d| d.slots.iter().copied())
        .collect();
    let agent_union = union_slots(&agent_slots);

    let slots = cap_slots(intersect_slots(&store_day.slots, &agent_union));
    if slots.is_empty() {
        DaySchedule::closed_day()
    } else {
        DaySchedule::open_day(slots)
    }
}

/// Compute the effective weekly delivery schedule for a store.
///
/// Per day, independently: union the active agents' intervals (merging
/// overlapping or touching ones), then intersect with the store's own
/// intervals. With zero active agents the store schedule is returned unchanged
/// -- agent tracking is optional infrastructure and must not zero out
/// delivery.
pub fn effective_schedule(store: &WeekSchedule, agents: &[Agent]) -> WeekSchedule {
    let active: Vec<&Agent> = agents.iter().filter(|a| a.active).collect();
    if active.is_empty() {
        return store.clone();
    }

    let mut effective = WeekSchedule::closed_week();
    for &day in &WEEK {
        let agent_days: Vec<&DaySchedule> = active.iter().map(|a| a.schedule.day(day)).collect();
        *effective.day_mut(day) = effective_day(store.day(day), &agent_days);
    }
    effective
}
