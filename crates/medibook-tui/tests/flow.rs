//! End-to-end flow tests driven through the app state machine.
//!
//! No terminal is attached: keys go straight into `App::handle_key` and
//! countdown ticks are injected by hand, which is exactly what the event
//! loop does at runtime.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use medibook_clinic::{MockAuthenticator, SELECTED_DOCTOR_KEY};
use medibook_core::{Doctor, RESEND_COOLDOWN_SECS};
use medibook_tui::app::{App, Screen, TuiConfig};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn sign_in(app: &mut App) {
    type_str(app, "priya@example.com");
    press(app, KeyCode::Tab);
    type_str(app, "secret");
    press(app, KeyCode::Enter);
}

/// Sign in and walk to the booking screen for the first doctor
fn to_booking(app: &mut App) {
    sign_in(app);
    press(app, KeyCode::Enter); // open profile
    press(app, KeyCode::Enter); // open booking
}

/// Continue from the booking screen into verification
fn to_otp(app: &mut App) {
    to_booking(app);
    press(app, KeyCode::Tab); // focus the morning grid
    press(app, KeyCode::Enter); // select the first slot
    press(app, KeyCode::Char('c')); // confirm
}

#[test]
fn login_requires_both_fields() {
    let mut app = App::new(TuiConfig::default());
    type_str(&mut app, "priya@example.com");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state.current_screen, Screen::Login);
    assert!(app.state.login.message.is_some());

    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "secret");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.current_screen, Screen::DoctorList);
}

#[test]
fn selecting_a_doctor_hands_the_record_off() {
    let mut app = App::new(TuiConfig::default());
    sign_in(&mut app);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state.current_screen, Screen::DoctorProfile);
    let doctor: Doctor = app.state.handoff.require(SELECTED_DOCTOR_KEY).unwrap();
    assert_eq!(doctor.name, "Dr. Rajiv Mehta");
}

#[test]
fn search_narrows_the_list_and_enter_opens_the_match() {
    let mut app = App::new(TuiConfig::default());
    sign_in(&mut app);

    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "neuro");
    press(&mut app, KeyCode::Enter); // leave the search box
    assert_eq!(app.state.filtered_doctors().len(), 1);

    press(&mut app, KeyCode::Enter);
    let doctor: Doctor = app.state.handoff.require(SELECTED_DOCTOR_KEY).unwrap();
    assert_eq!(doctor.name, "Dr. Kavita Rao");
}

#[test]
fn full_booking_flow_ends_with_a_recorded_appointment() {
    let mut app = App::new(TuiConfig::default());
    to_otp(&mut app);
    assert_eq!(app.state.current_screen, Screen::OtpVerification);

    // Three digits are not enough; the buffer survives the attempt
    type_str(&mut app, "123");
    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.state.current_screen, Screen::OtpVerification);
    assert_eq!(
        app.state.otp.message.as_deref(),
        Some("Please enter all 4 digits")
    );
    assert_eq!(app.state.otp.entry.buffer().filled_count(), 3);

    type_str(&mut app, "4");
    press(&mut app, KeyCode::Char('v'));

    assert_eq!(app.state.current_screen, Screen::DoctorList);
    let appointments = app.state.schedule.appointments();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].doctor_name, "Dr. Anjali Sharma");
    assert_eq!(appointments[0].day, 14);
    assert_eq!(appointments[0].slot, "09:30 AM - 9:45AM");
}

#[test]
fn rejected_code_reprompts_without_clearing_the_buffer() {
    let mut app = App::new(TuiConfig::default());
    app.state.authenticator = MockAuthenticator::with_expected_code("9999");
    to_otp(&mut app);

    type_str(&mut app, "1234");
    press(&mut app, KeyCode::Char('v'));

    assert_eq!(app.state.current_screen, Screen::OtpVerification);
    assert_eq!(
        app.state.otp.message.as_deref(),
        Some("Code not recognized, try again")
    );
    assert_eq!(app.state.otp.entry.verify().unwrap(), "1234");

    // Backspace alternates clear-in-place and retreat, so emptying all
    // four slots from the last one takes seven presses
    for _ in 0..7 {
        press(&mut app, KeyCode::Backspace);
    }
    assert!(app.state.otp.entry.buffer().is_empty());
    type_str(&mut app, "9999");
    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.state.current_screen, Screen::DoctorList);
}

#[test]
fn virtual_keypad_feeds_the_buffer() {
    let mut app = App::new(TuiConfig::default());
    to_otp(&mut app);

    press(&mut app, KeyCode::Enter); // keypad cursor starts on '1'
    press(&mut app, KeyCode::Down); // '4'
    press(&mut app, KeyCode::Enter);

    let buffer = app.state.otp.entry.buffer();
    assert_eq!(buffer.slot(0), Some('1'));
    assert_eq!(buffer.slot(1), Some('4'));
    assert_eq!(app.state.otp.focus, 2);
}

#[test]
fn resend_waits_for_the_countdown() {
    let mut app = App::new(TuiConfig::default());
    to_otp(&mut app);
    type_str(&mut app, "12");

    // Still counting: resend is a no-op
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.state.otp.entry.buffer().filled_count(), 2);

    for _ in 0..RESEND_COOLDOWN_SECS {
        app.on_countdown_tick();
    }
    assert!(app.state.otp.entry.countdown().is_resendable());

    press(&mut app, KeyCode::Char('r'));
    assert!(app.state.otp.entry.buffer().is_empty());
    assert!(!app.state.otp.entry.countdown().is_resendable());
    assert_eq!(
        app.state.otp.entry.countdown().seconds_remaining(),
        RESEND_COOLDOWN_SECS
    );
    assert!(app
        .state
        .notifications
        .active()
        .iter()
        .any(|n| n.message == "Code resent!"));
}

#[test]
fn countdown_ticks_are_ignored_off_the_verification_screen() {
    let mut app = App::new(TuiConfig::default());
    sign_in(&mut app);

    app.on_countdown_tick();
    assert_eq!(
        app.state.otp.entry.countdown().seconds_remaining(),
        RESEND_COOLDOWN_SECS
    );
}

#[test]
fn downstream_screens_redirect_without_a_selected_doctor() {
    let mut app = App::new(TuiConfig::default());
    sign_in(&mut app);

    // Land on the profile screen with an empty handoff store
    app.state.current_screen = Screen::DoctorProfile;
    press(&mut app, KeyCode::Enter); // try to book

    assert_eq!(app.state.current_screen, Screen::DoctorList);
    assert!(app
        .state
        .notifications
        .active()
        .iter()
        .any(|n| n.message == "Select a doctor first"));
}

#[test]
fn escape_from_the_list_signs_out_and_clears_the_session() {
    let mut app = App::new(TuiConfig::default());
    sign_in(&mut app);
    press(&mut app, KeyCode::Enter); // profile; handoff now holds a doctor
    press(&mut app, KeyCode::Esc); // back to list
    press(&mut app, KeyCode::Esc); // sign out

    assert_eq!(app.state.current_screen, Screen::Login);
    assert!(!app.state.handoff.contains(SELECTED_DOCTOR_KEY));
}
