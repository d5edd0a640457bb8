//! MediBook Core - Shared types and the OTP entry state machine
//!
//! This crate provides the foundational types for the MediBook appointment
//! booking client: the doctor and schedule domain model, and the passcode
//! entry state machine that drives the verification screen.

pub mod doctor;
pub mod error;
pub mod otp;
pub mod schedule;

pub use doctor::{Availability, Doctor, DoctorId, ProfileStats, Specialty};
pub use error::{Error, Result};
pub use otp::{DigitBuffer, KeypadKey, OtpEntry, OtpInput, ResendCountdown};
pub use schedule::{BookingDay, Period, TimeSlot};

/// Number of slots in a one-time passcode
pub const OTP_LENGTH: usize = 4;

/// Seconds a user waits before a new code can be requested
pub const RESEND_COOLDOWN_SECS: u32 = 55;
