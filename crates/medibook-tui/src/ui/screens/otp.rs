//! OTP verification screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::ui::components::{keypad, otp_slots};
use crate::ui::layout::centered_rect_fixed;

/// Draw the verification screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let dialog = centered_rect_fixed(46, 28, area);

    let block = Block::default()
        .title(" OTP Code Verification ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),  // Description
            Constraint::Length(3),  // Slot row
            Constraint::Length(1),  // Resend line
            Constraint::Length(2),  // Message
            Constraint::Length(12), // Keypad
            Constraint::Min(0),     // Spacer
            Constraint::Length(1),  // Help
        ])
        .split(inner);

    let description = Paragraph::new(format!(
        "Code has been sent to {}",
        app.state.config.phone_hint
    ))
    .style(theme.text_secondary())
    .alignment(Alignment::Center);
    frame.render_widget(description, chunks[0]);

    otp_slots::render(
        frame,
        chunks[1],
        app.state.otp.entry.buffer(),
        app.state.otp.focus,
        theme,
    );

    let countdown = app.state.otp.entry.countdown();
    let resend = if countdown.is_resendable() {
        Paragraph::new("Resend code [R]").style(theme.text_highlight())
    } else {
        Paragraph::new(format!(
            "Resend code in {} s",
            countdown.seconds_remaining()
        ))
        .style(theme.text_muted())
    };
    frame.render_widget(resend.alignment(Alignment::Center), chunks[2]);

    if let Some(message) = &app.state.otp.message {
        let widget = Paragraph::new(message.as_str())
            .style(theme.danger())
            .alignment(Alignment::Center);
        frame.render_widget(widget, chunks[3]);
    }

    let keypad_area = centered_rect_fixed(24, 12, chunks[4]);
    keypad::render(frame, keypad_area, app.state.otp.keypad_cursor, theme);

    let help = Paragraph::new("[0-9] Type  [Enter] Press key  [V] Verify  [Esc] Cancel")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[6]);
}
