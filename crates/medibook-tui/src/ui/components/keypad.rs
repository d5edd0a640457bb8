//! Virtual keypad component
//!
//! A 4x3 grid mirroring the phone-style keypad: digits 1-9, the star key,
//! 0, and delete. The star key is forwarded to the input router like any
//! digit. The cursor index is owned by the verification screen state; this
//! module only maps indices to keys and draws the grid.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use medibook_core::KeypadKey;

use crate::ui::Theme;

/// Keypad grid columns
pub const KEYPAD_COLS: usize = 3;

/// Keypad grid rows
pub const KEYPAD_ROWS: usize = 4;

/// Total keys on the pad
pub const KEY_COUNT: usize = KEYPAD_COLS * KEYPAD_ROWS;

/// The key at a grid index, row-major from the top left.
pub fn key_at(index: usize) -> KeypadKey {
    match index {
        0..=8 => KeypadKey::Input(char::from_digit(index as u32 + 1, 10).unwrap_or('1')),
        9 => KeypadKey::Input('*'),
        10 => KeypadKey::Input('0'),
        _ => KeypadKey::Delete,
    }
}

/// Display label for a key
pub fn key_label(key: KeypadKey) -> String {
    match key {
        KeypadKey::Input(c) => c.to_string(),
        KeypadKey::Delete => "⌫".to_string(),
    }
}

/// Draw the keypad with the cursor highlighted
pub fn render(frame: &mut Frame, area: Rect, cursor: usize, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); KEYPAD_ROWS])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, KEYPAD_COLS as u32); KEYPAD_COLS])
            .split(*row_area);

        for (col_index, cell) in cells.iter().enumerate() {
            let index = row_index * KEYPAD_COLS + col_index;
            let focused = index == cursor;

            let block = Block::default().borders(Borders::ALL).border_style(
                if focused {
                    theme.border_focused()
                } else {
                    theme.border()
                },
            );

            let label = Paragraph::new(key_label(key_at(index)))
                .style(theme.menu_item(focused))
                .alignment(Alignment::Center)
                .block(block);

            frame.render_widget(label, *cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_matches_the_phone_layout() {
        assert_eq!(key_at(0), KeypadKey::Input('1'));
        assert_eq!(key_at(4), KeypadKey::Input('5'));
        assert_eq!(key_at(8), KeypadKey::Input('9'));
        assert_eq!(key_at(9), KeypadKey::Input('*'));
        assert_eq!(key_at(10), KeypadKey::Input('0'));
        assert_eq!(key_at(11), KeypadKey::Delete);
    }

    #[test]
    fn every_index_has_a_label() {
        for index in 0..KEY_COUNT {
            assert!(!key_label(key_at(index)).is_empty());
        }
    }
}
