//! Sign-in screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::LoginField;
use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, section_block, section_block_focused};

/// Draw the sign-in screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let dialog = centered_rect_fixed(48, 18, area);

    let block = Block::default()
        .title(" Welcome Back ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(2), // Message
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let subtitle = Paragraph::new("Sign in to your account")
        .style(theme.subtitle())
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[0]);

    let email_focused = app.state.login.focus == LoginField::Email;
    let email_block = if email_focused {
        section_block_focused("Email", theme)
    } else {
        section_block("Email", theme)
    };
    let email_text = if app.state.login.credentials.email.is_empty() && !email_focused {
        Paragraph::new("you@example.com").style(theme.text_muted())
    } else {
        Paragraph::new(field_text(&app.state.login.credentials.email, email_focused))
            .style(theme.input(email_focused))
    };
    frame.render_widget(email_text.block(email_block), chunks[1]);

    let password_focused = app.state.login.focus == LoginField::Password;
    let password_block = if password_focused {
        section_block_focused("Password", theme)
    } else {
        section_block("Password", theme)
    };
    let masked: String = "•".repeat(app.state.login.credentials.password.chars().count());
    let password_text = Paragraph::new(field_text(&masked, password_focused))
        .style(theme.input(password_focused));
    frame.render_widget(password_text.block(password_block), chunks[2]);

    if let Some(message) = &app.state.login.message {
        let widget = Paragraph::new(message.as_str())
            .style(theme.danger())
            .alignment(Alignment::Center);
        frame.render_widget(widget, chunks[3]);
    }

    let help = Paragraph::new("[Tab] Switch field    [Enter] Sign in    [Esc] Quit")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

/// Append a cursor to the focused field
fn field_text(value: &str, focused: bool) -> String {
    if focused {
        format!("{value}▏")
    } else {
        value.to_string()
    }
}
