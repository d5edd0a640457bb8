//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{App, Screen};

/// Main render function - delegates to the appropriate screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_screen {
        Screen::Login => screens::login::draw(frame, area, app),
        Screen::DoctorList => screens::doctor_list::draw(frame, area, app),
        Screen::DoctorProfile => screens::doctor_profile::draw(frame, area, app),
        Screen::BookAppointment => screens::book_appointment::draw(frame, area, app),
        Screen::OtpVerification => screens::otp::draw(frame, area, app),
        Screen::Help => screens::help::draw(frame, area, app),
    }

    // Toasts sit on top of whatever screen is showing
    app.state.notifications.render(frame, area, &app.theme);
}
