//! Reusable UI components

pub mod bottom_nav;
pub mod keypad;
pub mod notification;
pub mod otp_slots;
