//! Migration from the legacy single-slot-per-day schedule shape.
//!
//! Older store documents carried one `{open, close, closed}` entry per day,
//! with day keys in either capitalized or lowercase form. The migration
//! produces the canonical multi-slot [`WeekSchedule`] with capitalized keys.
//! [`ScheduleDoc`] is the tagged union over both on-disk shapes so call sites
//! never sniff field presence themselves.

use crate::error::Result;
use crate::schedule::{DaySchedule, WeekSchedule};
use crate::slot::TimeSlot;
use serde::{Deserialize, Serialize};

/// One day in the legacy shape: a single open/close interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyDay {
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub closed: bool,
}

/// A legacy week document. Absent days are treated as closed.
///
/// Day keys are accepted in both `"Monday"` and `"monday"` form; serialization
/// always emits the capitalized form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LegacyWeekSchedule {
    #[serde(alias = "monday")]
    pub monday: Option<LegacyDay>,
    #[serde(alias = "tuesday")]
    pub tuesday: Option<LegacyDay>,
    #[serde(alias = "wednesday")]
    pub wednesday: Option<LegacyDay>,
    #[serde(alias = "thursday")]
    pub thursday: Option<LegacyDay>,
    #[serde(alias = "friday")]
    pub friday: Option<LegacyDay>,
    #[serde(alias = "saturday")]
    pub saturday: Option<LegacyDay>,
    #[serde(alias = "sunday")]
    pub sunday: Option<LegacyDay>,
}

fn migrate_day(legacy: Option<&LegacyDay>) -> Result<DaySchedule> {
    match legacy {
        None => Ok(DaySchedule::closed_day()),
        Some(day) if day.closed => Ok(DaySchedule::closed_day()),
        Some(day) => {
            // Fail fast on malformed time strings rather than letting them
            // reach the combinator.
            let slot = TimeSlot::parse(&day.open, &day.close)?;
            Ok(DaySchedule::open_day(vec![slot]))
        }
    }
}

/// Convert a legacy week document into the multi-slot representation.
///
/// Absent or closed days become `{closed: true, slots: []}`; open days become
/// a single-slot open day.
///
/// # Errors
/// Returns `HoursError::InvalidTime` / `HoursError::InvalidSlot` when an open
/// legacy day carries an unparseable or inverted interval.
pub fn migrate_from_legacy(legacy: &LegacyWeekSchedule) -> Result<WeekSchedule> {
    Ok(WeekSchedule {
        monday: migrate_day(legacy.monday.as_ref())?,
        tuesday: migrate_day(legacy.tuesday.as_ref())?,
        wednesday: migrate_day(legacy.wednesday.as_ref())?,
        thursday: migrate_day(legacy.thursday.as_ref())?,
        friday: migrate_day(legacy.friday.as_ref())?,
        saturday: migrate_day(legacy.saturday.as_ref())?,
        sunday: migrate_day(legacy.sunday.as_ref())?,
    })
}

/// Either on-disk schedule shape.
///
/// The legacy variant is tried first: its day entries require `open`/`close`
/// string fields, so a multi-slot document never matches it, while a legacy
/// document would otherwise deserialize as an all-defaulted (all-closed)
/// multi-slot week.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScheduleDoc {
    Legacy(LegacyWeekSchedule),
    Multi(WeekSchedule),
}

impl ScheduleDoc {
    /// Resolve to the canonical multi-slot representation, validating it.
    pub fn into_week(self) -> Result<WeekSchedule> {
        let week = match self {
            ScheduleDoc::Legacy(legacy) => migrate_from_legacy(&legacy)?,
            ScheduleDoc::Multi(week) => week,
        };
        week.validate()?;
        Ok(week)
    }
}
