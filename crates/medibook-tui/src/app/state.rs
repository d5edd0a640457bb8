//! Application state

use medibook_clinic::{
    Credentials, DoctorDirectory, HandoffStore, MockAuthenticator, ScheduleBook,
};
use medibook_core::{OtpEntry, TimeSlot};

use super::config::TuiConfig;
use super::events::CountdownTicker;
use super::router::Router;
use crate::ui::components::notification::NotificationManager;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Sign-in form
    #[default]
    Login,

    /// Doctor directory with search and favorites
    DoctorList,

    /// Selected doctor's profile
    DoctorProfile,

    /// Date strip and slot grids
    BookAppointment,

    /// Passcode entry with countdown-gated resend
    OtpVerification,

    /// Key binding reference
    Help,
}

/// Which login field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Sign-in form state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub credentials: Credentials,
    pub focus: LoginField,
    /// Inline prompt shown under the form
    pub message: Option<String>,
}

impl LoginForm {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LoginField::Email => self.credentials.email.push(c),
            LoginField::Password => self.credentials.password.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            LoginField::Email => self.credentials.email.pop(),
            LoginField::Password => self.credentials.password.pop(),
        };
    }
}

/// Doctor list screen state
#[derive(Debug, Clone, Default)]
pub struct DoctorListState {
    /// Live search term
    pub search: String,
    /// Whether keystrokes go to the search box
    pub searching: bool,
    /// Selection index within the filtered list
    pub selected: usize,
}

/// Which section of the booking screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFocus {
    #[default]
    Dates,
    Morning,
    Evening,
}

/// Booking screen state
#[derive(Debug, Clone, Default)]
pub struct BookingState {
    pub focus: BookingFocus,
    /// Cursor and selection on the date strip
    pub date_index: usize,
    /// Cursor within the focused slot grid
    pub slot_index: usize,
    /// The single selected slot, if any
    pub selected: Option<(medibook_core::Period, usize)>,
    /// Inline prompt ("Please select a time slot")
    pub message: Option<String>,
}

impl BookingState {
    pub fn new(default_day_index: usize) -> Self {
        Self {
            date_index: default_day_index,
            ..Self::default()
        }
    }
}

/// A booking waiting on passcode confirmation
#[derive(Debug, Clone)]
pub struct PendingBooking {
    pub day: u8,
    pub slot: TimeSlot,
}

/// Verification screen state
///
/// Created on entry, dropped on exit; dropping it aborts the countdown
/// ticker, which is the disposal guarantee for the one-second timer.
#[derive(Debug, Default)]
pub struct OtpScreenState {
    pub entry: OtpEntry,
    /// Slot focus as returned by the input router
    pub focus: usize,
    /// Cursor on the 4x3 virtual keypad
    pub keypad_cursor: usize,
    /// Inline validation or rejection message
    pub message: Option<String>,
    /// Owned one-second timer task
    pub ticker: Option<CountdownTicker>,
}

/// Application state
pub struct AppState {
    /// Current screen
    pub current_screen: Screen,

    /// Navigation history
    pub router: Router,

    /// Sign-in form
    pub login: LoginForm,

    /// Doctor list screen
    pub doctor_list: DoctorListState,

    /// Booking screen
    pub booking: BookingState,

    /// Verification screen
    pub otp: OtpScreenState,

    /// Booking captured on confirm, recorded once the code verifies
    pub pending_booking: Option<PendingBooking>,

    /// Seeded doctor roster and favorites
    pub directory: DoctorDirectory,

    /// Slot grids and recorded appointments
    pub schedule: ScheduleBook,

    /// Session handoff carrying the selected doctor between screens
    pub handoff: HandoffStore,

    /// Mock authentication collaborator
    pub authenticator: MockAuthenticator,

    /// Toast notifications
    pub notifications: NotificationManager,

    /// User preferences
    pub config: TuiConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(config: TuiConfig) -> Self {
        let schedule = ScheduleBook::new();
        let booking = BookingState::new(schedule.default_day_index());
        let mut router = Router::new();
        router.push(Screen::Login);

        Self {
            current_screen: Screen::Login,
            router,
            login: LoginForm::default(),
            doctor_list: DoctorListState::default(),
            booking,
            otp: OtpScreenState::default(),
            pending_booking: None,
            directory: DoctorDirectory::seeded(),
            schedule,
            handoff: HandoffStore::new(),
            authenticator: MockAuthenticator::new(),
            notifications: NotificationManager::new(),
            config,
        }
    }

    /// Doctors matching the current search term
    pub fn filtered_doctors(&self) -> Vec<&medibook_core::Doctor> {
        self.directory.search(&self.doctor_list.search)
    }

    /// The doctor currently under the list cursor
    pub fn selected_doctor(&self) -> Option<&medibook_core::Doctor> {
        let filtered = self.filtered_doctors();
        filtered.get(self.doctor_list.selected).copied()
    }
}
