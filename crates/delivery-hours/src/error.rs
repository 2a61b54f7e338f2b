//! Error types for schedule validation and migration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoursError {
    #[error("Invalid time: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid time slot: open {open} is not before close {close}")]
    InvalidSlot { open: String, close: String },

    #[error("Overlapping slots on {day}")]
    OverlappingSlots { day: String },

    #[error("Too many slots on {day}: {count} (maximum {max})")]
    TooManySlots { day: String, count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, HoursError>;
