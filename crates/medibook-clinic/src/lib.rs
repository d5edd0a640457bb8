//! MediBook Clinic - Mock data and session collaborators
//!
//! Everything the screens talk to lives here: the seeded doctor directory,
//! the slot schedule, the session handoff store that carries the selected
//! doctor between screens, and the mock authenticator. There is no backend
//! behind any of it; the whole crate is in-memory and session-scoped.

pub mod auth;
pub mod directory;
pub mod error;
pub mod handoff;
pub mod schedule;

pub use auth::{Authenticator, Credentials, MockAuthenticator};
pub use directory::DoctorDirectory;
pub use error::{ClinicError, Result};
pub use handoff::{HandoffStore, SELECTED_DOCTOR_KEY};
pub use schedule::{Appointment, ScheduleBook};
