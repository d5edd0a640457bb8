//! MediBook TUI Library
//!
//! Terminal user interface for the MediBook appointment booking demo:
//! login, a searchable doctor directory, doctor profiles, slot-based
//! booking, and OTP verification - all against in-memory mock data.

pub mod app;
pub mod ui;

pub use app::App;
