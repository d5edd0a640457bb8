//! Slot schedule and bookings
//!
//! The date strip and slot grids are fixed demo data, reproduced from the
//! product mockups verbatim - including the skipped 15th, the repeated
//! WED labels, and the doubled evening slot. Bookings are recorded
//! in-memory only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use medibook_core::{BookingDay, Doctor, DoctorId, Period, TimeSlot};

use crate::error::{ClinicError, Result};

/// A confirmed appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Booking reference handed to the patient
    pub reference: Uuid,
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    pub day: u8,
    pub slot: String,
    pub booked_at: DateTime<Utc>,
}

/// The bookable days and slots, plus every appointment taken this session
#[derive(Debug, Clone, Default)]
pub struct ScheduleBook {
    appointments: Vec<Appointment>,
}

impl ScheduleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The date strip. Day 14 is the default selection.
    pub fn booking_days(&self) -> Vec<BookingDay> {
        vec![
            BookingDay { day: 13, weekday: "MON" },
            BookingDay { day: 14, weekday: "TUE" },
            BookingDay { day: 16, weekday: "WED" },
            BookingDay { day: 17, weekday: "WED" },
            BookingDay { day: 18, weekday: "WED" },
        ]
    }

    /// Index into `booking_days` preselected when the screen opens.
    pub fn default_day_index(&self) -> usize {
        1
    }

    /// The slot grid for one period of the day.
    pub fn slots(&self, period: Period) -> Vec<TimeSlot> {
        match period {
            Period::Morning => vec![
                TimeSlot::new("09:30 AM - 9:45AM", true),
                TimeSlot::new("10:00 AM - 10:15AM", true),
                TimeSlot::new("10:30 AM - 10:45AM", true),
                TimeSlot::new("11:00 AM - 11:15AM", false),
                TimeSlot::new("11:30 AM - 11:45AM", true),
                TimeSlot::new("12:00 PM - 12:15PM", true),
                TimeSlot::new("12:30 PM - 12:45PM", false),
                TimeSlot::new("01:00 PM - 01:15PM", true),
            ],
            Period::Evening => vec![
                TimeSlot::new("11:30 AM - 11:45AM", true),
                TimeSlot::new("12:00 PM - 12:15PM", true),
                TimeSlot::new("01:00 PM - 01:15PM", true),
                TimeSlot::new("01:00 PM - 01:15PM", true),
            ],
        }
    }

    /// Record an appointment for `doctor` on `day` in the given slot.
    pub fn book(&mut self, doctor: &Doctor, day: u8, slot: &TimeSlot) -> Result<Appointment> {
        if !slot.available {
            return Err(ClinicError::SlotUnavailable(slot.label.clone()));
        }
        let appointment = Appointment {
            reference: Uuid::new_v4(),
            doctor_id: doctor.id,
            doctor_name: doctor.name.clone(),
            day,
            slot: slot.label.clone(),
            booked_at: Utc::now(),
        };
        tracing::info!(
            doctor = %doctor.name,
            day,
            slot = %slot.label,
            reference = %appointment.reference,
            "appointment booked"
        );
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Appointments taken this session, oldest first.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }
}

#[cfg(test)]
mod tests {
    use medibook_core::{Availability, Specialty};

    use super::*;

    fn doctor() -> Doctor {
        Doctor {
            id: DoctorId(1),
            name: "Dr. Anjali Sharma".to_string(),
            specialty: Specialty::Cardiologist,
            availability: Availability::AvailableToday,
            bio: String::new(),
            hours: String::new(),
            credentials: String::new(),
            stats: medibook_core::doctor::ProfileStats {
                patients: 0,
                years_experience: 0,
                rating: 0.0,
                reviews: 0,
            },
        }
    }

    #[test]
    fn date_strip_matches_the_mockup() {
        let book = ScheduleBook::new();
        let days = book.booking_days();
        assert_eq!(days.len(), 5);
        assert_eq!(days[book.default_day_index()].day, 14);
        // The mockup skips the 15th
        assert!(days.iter().all(|d| d.day != 15));
    }

    #[test]
    fn slot_grids_have_the_expected_shape() {
        let book = ScheduleBook::new();
        assert_eq!(book.slots(Period::Morning).len(), 8);
        assert_eq!(book.slots(Period::Evening).len(), 4);
        let taken: Vec<_> = book
            .slots(Period::Morning)
            .into_iter()
            .filter(|s| !s.available)
            .collect();
        assert_eq!(taken.len(), 2);
    }

    #[test]
    fn booking_an_available_slot_records_it() {
        let mut book = ScheduleBook::new();
        let slot = TimeSlot::new("10:00 AM - 10:15AM", true);
        let appointment = book.book(&doctor(), 14, &slot).unwrap();
        assert_eq!(appointment.day, 14);
        assert_eq!(appointment.slot, "10:00 AM - 10:15AM");
        assert_eq!(book.appointments().len(), 1);
    }

    #[test]
    fn booking_a_taken_slot_is_rejected() {
        let mut book = ScheduleBook::new();
        let slot = TimeSlot::new("11:00 AM - 11:15AM", false);
        assert!(matches!(
            book.book(&doctor(), 14, &slot),
            Err(ClinicError::SlotUnavailable(_))
        ));
        assert!(book.appointments().is_empty());
    }
}
