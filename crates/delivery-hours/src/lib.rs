//! # delivery-hours
//!
//! Weekly delivery availability for marketplace stores.
//!
//! A store has up to three open/close slots per day; delivery drivers
//! ("agents") have weekly availability of the same shape. The effective
//! delivery schedule is the union of the active agents' hours intersected,
//! per day, with the store's own hours. This crate owns that calendar
//! arithmetic plus the validation, legacy-format migration, and display
//! helpers around it -- all pure functions over plain values, no I/O.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::Weekday;
//! use delivery_hours::schedule::DaySchedule;
//! use delivery_hours::{effective_schedule, Agent, TimeSlot, WeekSchedule};
//!
//! // Store open weekdays 09:00-17:00.
//! let store = WeekSchedule::standard_week();
//!
//! // One driver, only around on Monday mid-day.
//! let mut driver_week = WeekSchedule::closed_week();
//! *driver_week.day_mut(Weekday::Mon) =
//!     DaySchedule::open_day(vec![TimeSlot::parse("10:00", "14:00").unwrap()]);
//! let driver = Agent {
//!     id: "driver-1".to_string(),
//!     active: true,
//!     schedule: driver_week,
//! };
//!
//! let effective = effective_schedule(&store, &[driver]);
//! assert_eq!(
//!     effective.monday.slots,
//!     vec![TimeSlot::parse("10:00", "14:00").unwrap()]
//! );
//! // Nobody can drive on Tuesday, so the store can't deliver.
//! assert!(effective.tuesday.closed);
//! ```
//!
//! ## Modules
//!
//! - [`slot`] — `TimeSlot` parsing, validation, overlap, sorting
//! - [`schedule`] — day/week model and the pure editor operations
//! - [`legacy`] — migration from the single-slot-per-day document shape
//! - [`combine`] — the union/intersection availability combinator
//! - [`query`] — "open now", formatted hours, next available day
//! - [`error`] — error types

pub mod combine;
pub mod error;
pub mod legacy;
pub mod query;
pub mod schedule;
pub mod slot;

pub use combine::{effective_day, effective_schedule, intersect_slots, union_slots, Agent};
pub use error::HoursError;
pub use legacy::{migrate_from_legacy, LegacyWeekSchedule, ScheduleDoc};
pub use query::{is_available_at, next_available_day, NextAvailableDay};
pub use schedule::{create_empty_slot, DaySchedule, WeekSchedule, MAX_SLOTS_PER_DAY};
pub use slot::{parse_time, slots_overlap, sort_slots, TimeSlot};
