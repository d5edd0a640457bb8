//! Help screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::layout::{render_footer, render_header, section_block, ScreenLayout};

const BINDINGS: &[(&str, &str)] = &[
    ("Everywhere", ""),
    ("  Ctrl+C", "Quit"),
    ("", ""),
    ("Doctor list", ""),
    ("  ↑/↓ or j/k", "Move the selection"),
    ("  /", "Search by name or specialization"),
    ("  F", "Mark or unmark a favorite"),
    ("  Enter", "Open the doctor's profile"),
    ("  Esc", "Sign out"),
    ("", ""),
    ("Booking", ""),
    ("  Tab", "Switch between dates and slot grids"),
    ("  Arrows", "Move within a section"),
    ("  Enter", "Select a slot"),
    ("  C", "Confirm and continue to verification"),
    ("", ""),
    ("Verification", ""),
    ("  0-9", "Type into the focused slot"),
    ("  Arrows + Enter", "Use the on-screen keypad"),
    ("  Backspace", "Clear or step back"),
    ("  V", "Verify the code"),
    ("  R", "Resend once the countdown ends"),
];

/// Draw the help screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, Some("Help"), theme);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            if action.is_empty() {
                Line::from(Span::styled(*key, theme.text_highlight()))
            } else {
                Line::from(vec![
                    Span::styled(format!("{key:<18}"), theme.text()),
                    Span::styled(*action, theme.text_secondary()),
                ])
            }
        })
        .collect();

    let widget = Paragraph::new(lines).block(section_block("Key Bindings", theme));
    frame.render_widget(widget, layout.content);

    render_footer(frame, layout.footer, &[("Esc", "Back")], theme);
}
