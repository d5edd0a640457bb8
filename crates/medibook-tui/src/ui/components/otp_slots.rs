//! Passcode slot boxes
//!
//! Four bordered cells showing the entered characters. The focused cell is
//! whatever index the input router last returned; this component only
//! paints it.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use medibook_core::{DigitBuffer, OTP_LENGTH};

use crate::ui::Theme;

/// Width of one slot cell including its border
const SLOT_WIDTH: u16 = 7;

/// Total width of the slot row
pub fn row_width() -> u16 {
    SLOT_WIDTH * OTP_LENGTH as u16 + 3
}

/// Draw the slot row centered in `area`
pub fn render(frame: &mut Frame, area: Rect, buffer: &DigitBuffer, focus: usize, theme: &Theme) {
    let total = row_width().min(area.width);
    let x = area.x + (area.width.saturating_sub(total)) / 2;

    for (index, slot) in buffer.slots().iter().enumerate() {
        let cell = Rect::new(
            x + index as u16 * (SLOT_WIDTH + 1),
            area.y,
            SLOT_WIDTH,
            3.min(area.height),
        );

        let focused = index == focus;
        let block = Block::default().borders(Borders::ALL).border_style(
            if focused {
                theme.border_focused()
            } else {
                theme.border()
            },
        );

        let (text, style) = match slot {
            Some(c) => (c.to_string(), theme.otp_digit()),
            None => ("○".to_string(), theme.otp_placeholder()),
        };

        let widget = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(widget, cell);
    }
}
