//! Application state and event handling

pub mod config;
pub mod events;
pub mod router;
pub mod state;

pub use config::TuiConfig;
pub use state::{AppState, Screen};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use medibook_clinic::{Authenticator, SELECTED_DOCTOR_KEY};
use medibook_core::{Doctor, OtpInput, Period};

use events::{CountdownTicker, Event, EventHandler};
use state::{BookingFocus, BookingState, OtpScreenState, PendingBooking};

use crate::ui;
use crate::ui::components::keypad;
use crate::ui::components::notification::Notification;
use crate::ui::Theme;

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Visual theme
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter for animations
    pub tick: u64,

    /// Channel for screen-owned timer tasks; absent in tests
    events_tx: Option<mpsc::UnboundedSender<Event>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: TuiConfig) -> Self {
        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };

        Self {
            state: AppState::new(config),
            theme,
            should_quit: false,
            tick: 0,
            events_tx: None,
        }
    }

    /// Attach the event channel so screens can spawn their timers
    pub fn with_events(mut self, sender: mpsc::UnboundedSender<Event>) -> Self {
        self.events_tx = Some(sender);
        self
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Tick) => self.on_tick(),
                Some(Event::CountdownTick) => self.on_countdown_tick(),
                None => break,
            }
        }

        Ok(())
    }

    /// Animation tick: advances toast TTLs
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.state.notifications.tick();
    }

    /// One elapsed second on the resend countdown.
    ///
    /// The ticker is owned by the verification screen state and aborted on
    /// drop, so a tick for a torn-down screen is already impossible; a late
    /// tick that was in flight when the screen changed is discarded here.
    pub fn on_countdown_tick(&mut self) {
        if self.state.current_screen != Screen::OtpVerification {
            tracing::debug!("countdown tick after leaving the verification screen; ignored");
            return;
        }
        self.state.otp.entry.tick();
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.state.current_screen {
            Screen::Login => self.handle_login_key(key.code),
            Screen::DoctorList => self.handle_doctor_list_key(key.code),
            Screen::DoctorProfile => self.handle_profile_key(key.code),
            Screen::BookAppointment => self.handle_booking_key(key.code),
            Screen::OtpVerification => self.handle_otp_key(key.code),
            Screen::Help => self.handle_help_key(key.code),
        }
    }

    fn handle_login_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => self.state.login.toggle_focus(),
            KeyCode::Backspace => self.state.login.pop_char(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Char(c) => self.state.login.push_char(c),
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        let credentials = self.state.login.credentials.clone();
        if !self.state.authenticator.sign_in(&credentials) {
            self.state.login.message = Some("Enter your email and password".to_string());
            return;
        }

        self.state.login.message = None;
        self.state
            .notifications
            .push(Notification::success("Signed in successfully"));
        self.state.doctor_list = Default::default();
        self.state.router.reset_to(Screen::DoctorList);
        self.state.current_screen = Screen::DoctorList;
    }

    fn handle_doctor_list_key(&mut self, key: KeyCode) {
        if self.state.doctor_list.searching {
            match key {
                KeyCode::Esc | KeyCode::Enter => self.state.doctor_list.searching = false,
                KeyCode::Backspace => {
                    self.state.doctor_list.search.pop();
                    self.state.doctor_list.selected = 0;
                }
                KeyCode::Char(c) => {
                    self.state.doctor_list.search.push(c);
                    self.state.doctor_list.selected = 0;
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('/') => self.state.doctor_list.searching = true,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.doctor_list.selected > 0 {
                    self.state.doctor_list.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.state.filtered_doctors().len();
                if self.state.doctor_list.selected + 1 < count {
                    self.state.doctor_list.selected += 1;
                }
            }
            KeyCode::Char('f') => self.toggle_favorite(),
            KeyCode::Enter => self.open_profile(),
            KeyCode::Char('?') => self.navigate(Screen::Help),
            KeyCode::Esc => self.sign_out(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn toggle_favorite(&mut self) {
        let Some(id) = self.state.selected_doctor().map(|d| d.id) else {
            return;
        };
        let marked = self.state.directory.toggle_favorite(id);
        let note = if marked {
            "Added to favorites"
        } else {
            "Removed from favorites"
        };
        self.state.notifications.push(Notification::info(note));
    }

    /// Select the doctor under the cursor and open their profile
    fn open_profile(&mut self) {
        let Some(doctor) = self.state.selected_doctor().cloned() else {
            return;
        };
        if let Err(e) = self.state.handoff.set(SELECTED_DOCTOR_KEY, &doctor) {
            tracing::error!("failed to hand off selected doctor: {}", e);
            return;
        }
        self.navigate(Screen::DoctorProfile);
    }

    fn handle_profile_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter | KeyCode::Char('b') => self.open_booking(),
            _ => {}
        }
    }

    fn open_booking(&mut self) {
        if self.require_selected_doctor().is_none() {
            return;
        }
        self.state.booking = BookingState::new(self.state.schedule.default_day_index());
        self.navigate(Screen::BookAppointment);
    }

    fn handle_booking_key(&mut self, key: KeyCode) {
        let morning_len = self.state.schedule.slots(Period::Morning).len();
        let evening_len = self.state.schedule.slots(Period::Evening).len();
        let days_len = self.state.schedule.booking_days().len();
        let booking = &mut self.state.booking;

        match key {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab => {
                booking.focus = match booking.focus {
                    BookingFocus::Dates => BookingFocus::Morning,
                    BookingFocus::Morning => BookingFocus::Evening,
                    BookingFocus::Evening => BookingFocus::Dates,
                };
                booking.slot_index = 0;
            }
            KeyCode::Left => match booking.focus {
                BookingFocus::Dates => {
                    booking.date_index = booking.date_index.saturating_sub(1);
                }
                _ => {
                    if booking.slot_index % 2 == 1 {
                        booking.slot_index -= 1;
                    }
                }
            },
            KeyCode::Right => match booking.focus {
                BookingFocus::Dates => {
                    if booking.date_index + 1 < days_len {
                        booking.date_index += 1;
                    }
                }
                BookingFocus::Morning => {
                    if booking.slot_index % 2 == 0 && booking.slot_index + 1 < morning_len {
                        booking.slot_index += 1;
                    }
                }
                BookingFocus::Evening => {
                    if booking.slot_index % 2 == 0 && booking.slot_index + 1 < evening_len {
                        booking.slot_index += 1;
                    }
                }
            },
            KeyCode::Up => match booking.focus {
                BookingFocus::Dates => {}
                BookingFocus::Morning => {
                    if booking.slot_index >= 2 {
                        booking.slot_index -= 2;
                    } else {
                        booking.focus = BookingFocus::Dates;
                    }
                }
                BookingFocus::Evening => {
                    if booking.slot_index >= 2 {
                        booking.slot_index -= 2;
                    } else {
                        booking.focus = BookingFocus::Morning;
                        booking.slot_index = (morning_len - 2) + (booking.slot_index % 2);
                    }
                }
            },
            KeyCode::Down => match booking.focus {
                BookingFocus::Dates => {
                    booking.focus = BookingFocus::Morning;
                    booking.slot_index = 0;
                }
                BookingFocus::Morning => {
                    if booking.slot_index + 2 < morning_len {
                        booking.slot_index += 2;
                    } else {
                        booking.focus = BookingFocus::Evening;
                        booking.slot_index = booking.slot_index % 2;
                    }
                }
                BookingFocus::Evening => {
                    if booking.slot_index + 2 < evening_len {
                        booking.slot_index += 2;
                    }
                }
            },
            KeyCode::Enter => self.select_slot(),
            KeyCode::Char('c') => self.confirm_booking(),
            _ => {}
        }
    }

    fn select_slot(&mut self) {
        let period = match self.state.booking.focus {
            BookingFocus::Dates => return,
            BookingFocus::Morning => Period::Morning,
            BookingFocus::Evening => Period::Evening,
        };
        let index = self.state.booking.slot_index;
        let slots = self.state.schedule.slots(period);
        let Some(slot) = slots.get(index) else {
            return;
        };
        if !slot.available {
            self.state.booking.message = Some("This slot is already taken".to_string());
            return;
        }
        self.state.booking.selected = Some((period, index));
        self.state.booking.message = None;
    }

    fn confirm_booking(&mut self) {
        let Some((period, index)) = self.state.booking.selected else {
            self.state.booking.message = Some("Please select a time slot".to_string());
            return;
        };
        let slot = self.state.schedule.slots(period)[index].clone();
        let day = self.state.schedule.booking_days()[self.state.booking.date_index].day;
        self.state.pending_booking = Some(PendingBooking { day, slot });
        self.open_otp();
    }

    /// Enter the verification screen, acquiring its countdown ticker
    fn open_otp(&mut self) {
        if self.require_selected_doctor().is_none() {
            return;
        }
        let mut otp = OtpScreenState::default();
        if let Some(tx) = &self.events_tx {
            otp.ticker = Some(CountdownTicker::start(tx.clone()));
        }
        self.state.otp = otp;
        self.navigate(Screen::OtpVerification);
    }

    fn handle_otp_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.go_back(),
            KeyCode::Left => {
                if self.state.otp.keypad_cursor % keypad::KEYPAD_COLS > 0 {
                    self.state.otp.keypad_cursor -= 1;
                }
            }
            KeyCode::Right => {
                let cursor = self.state.otp.keypad_cursor;
                if cursor % keypad::KEYPAD_COLS < keypad::KEYPAD_COLS - 1
                    && cursor + 1 < keypad::KEY_COUNT
                {
                    self.state.otp.keypad_cursor += 1;
                }
            }
            KeyCode::Up => {
                if self.state.otp.keypad_cursor >= keypad::KEYPAD_COLS {
                    self.state.otp.keypad_cursor -= keypad::KEYPAD_COLS;
                }
            }
            KeyCode::Down => {
                if self.state.otp.keypad_cursor + keypad::KEYPAD_COLS < keypad::KEY_COUNT {
                    self.state.otp.keypad_cursor += keypad::KEYPAD_COLS;
                }
            }
            KeyCode::Enter => {
                let pressed = keypad::key_at(self.state.otp.keypad_cursor);
                self.apply_otp_input(OtpInput::Keypad(pressed));
            }
            KeyCode::Char('v') => self.verify_code(),
            KeyCode::Char('r') => self.resend_code(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '*' => {
                let slot = self.state.otp.focus;
                self.apply_otp_input(OtpInput::Keystroke {
                    slot,
                    value: c.to_string(),
                });
            }
            KeyCode::Backspace => {
                let slot = self.state.otp.focus;
                if self.state.otp.entry.buffer().slot(slot).is_some() {
                    // Clear in place; focus stays on the emptied slot
                    self.apply_otp_input(OtpInput::Keystroke {
                        slot,
                        value: String::new(),
                    });
                } else {
                    self.apply_otp_input(OtpInput::Backspace { slot });
                }
            }
            _ => {}
        }
    }

    /// Route one input through the entry machine and adopt its focus
    fn apply_otp_input(&mut self, input: OtpInput) {
        let focus = self.state.otp.entry.apply(input);
        self.state.otp.focus = focus;
        self.state.otp.message = None;
    }

    fn verify_code(&mut self) {
        match self.state.otp.entry.verify() {
            Err(e) => {
                // Incomplete code: prompt and leave the buffer as typed
                self.state.otp.message = Some(e.to_string());
            }
            Ok(code) => {
                if self.state.authenticator.verify_code(&code) {
                    self.complete_booking();
                } else {
                    self.state.otp.message =
                        Some("Code not recognized, try again".to_string());
                }
            }
        }
    }

    fn resend_code(&mut self) {
        if !self.state.otp.entry.resend() {
            return;
        }
        self.state.authenticator.resend_code();
        self.state.otp.focus = 0;
        self.state.otp.message = None;
        self.state
            .notifications
            .push(Notification::info("Code resent!"));
    }

    /// Record the pending booking once the code has verified
    fn complete_booking(&mut self) {
        let Some(doctor) = self.require_selected_doctor() else {
            return;
        };
        let Some(pending) = self.state.pending_booking.take() else {
            self.back_to_list_with(Notification::warning("No booking in progress"));
            return;
        };

        match self
            .state
            .schedule
            .book(&doctor, pending.day, &pending.slot)
        {
            Ok(appointment) => {
                self.back_to_list_with(Notification::success(format!(
                    "Appointment booked with {} on {} at {}",
                    doctor.name, appointment.day, appointment.slot
                )));
            }
            Err(e) => {
                self.state.otp.message = Some(e.to_string());
            }
        }
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.go_back(),
            _ => {}
        }
    }

    /// Fetch the handed-off doctor, or redirect to the listing screen.
    ///
    /// Screens downstream of the list cannot work without their doctor
    /// record; a missing record is recovered, never fatal.
    fn require_selected_doctor(&mut self) -> Option<Doctor> {
        match self.state.handoff.require::<Doctor>(SELECTED_DOCTOR_KEY) {
            Ok(doctor) => Some(doctor),
            Err(e) => {
                tracing::warn!("{}; redirecting to the doctor list", e);
                self.back_to_list_with(Notification::warning("Select a doctor first"));
                None
            }
        }
    }

    fn back_to_list_with(&mut self, note: Notification) {
        self.state.notifications.push(note);
        self.state.otp = OtpScreenState::default();
        self.state.router.reset_to(Screen::DoctorList);
        self.state.current_screen = Screen::DoctorList;
    }

    /// Clear the session and return to the sign-in screen
    fn sign_out(&mut self) {
        self.state.handoff.clear();
        self.state.pending_booking = None;
        self.state.login = Default::default();
        self.state.router.reset_to(Screen::Login);
        self.state.current_screen = Screen::Login;
    }

    /// Move forward to `screen`, recording it in the history
    fn navigate(&mut self, screen: Screen) {
        let leaving = self.state.current_screen;
        self.state.current_screen = screen;
        self.state.router.push(screen);
        if leaving == Screen::OtpVerification && screen != Screen::OtpVerification {
            // Dropping the screen state aborts its countdown ticker
            self.state.otp = OtpScreenState::default();
        }
    }

    /// Walk one step back in the history
    fn go_back(&mut self) {
        let leaving = self.state.current_screen;
        match self.state.router.back() {
            Some(screen) => {
                self.state.current_screen = screen;
                if leaving == Screen::OtpVerification {
                    self.state.otp = OtpScreenState::default();
                }
            }
            None => self.should_quit = true,
        }
    }
}
