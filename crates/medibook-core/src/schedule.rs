//! Booking calendar types
//!
//! The booking screen renders a horizontal strip of days and two grids of
//! fifteen-minute slots. These types only describe the options; the seeded
//! grids live in the clinic crate and selection state lives in the UI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable day on the date strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDay {
    /// Day of month
    pub day: u8,
    /// Weekday label as printed on the strip ("MON", "TUE", ...)
    pub weekday: &'static str,
}

impl fmt::Display for BookingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday, self.day)
    }
}

/// Which slot grid a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Morning,
    Evening,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Evening => "Evening",
        }
    }
}

/// A fifteen-minute appointment slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Display label, e.g. "09:30 AM - 9:45AM"
    pub label: String,
    /// Whether the slot can still be booked
    pub available: bool,
}

impl TimeSlot {
    pub fn new(label: impl Into<String>, available: bool) -> Self {
        Self {
            label: label.into(),
            available,
        }
    }
}
