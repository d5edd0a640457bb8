//! Input routing for the passcode entry screen
//!
//! Two sources feed the buffer: keystrokes aimed at a particular slot, and
//! presses on the on-screen keypad, which pick their own target slot. Every
//! route returns the slot index the UI should focus next; the UI applies it
//! to whatever focus primitive it has.

use super::buffer::DigitBuffer;
use crate::OTP_LENGTH;

/// A key on the on-screen keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    /// A character key: the digits 0-9 and the star key. The star is routed
    /// exactly like a digit and stored verbatim.
    Input(char),
    /// The delete key.
    Delete,
}

/// One input event for the entry screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpInput {
    /// A keystroke aimed directly at a slot. An empty value clears the slot.
    Keystroke { slot: usize, value: String },
    /// Backspace pressed while a slot has focus. When that slot is already
    /// empty, focus retreats; nothing is deleted on this path.
    Backspace { slot: usize },
    /// A press on the on-screen keypad.
    Keypad(KeypadKey),
}

/// Apply one input event to the buffer and return the focus index.
pub fn route(buffer: &mut DigitBuffer, input: OtpInput) -> usize {
    match input {
        OtpInput::Keystroke { slot, value } => keystroke(buffer, slot, &value),
        OtpInput::Backspace { slot } => {
            if slot < OTP_LENGTH && buffer.slot(slot).is_none() && slot > 0 {
                slot - 1
            } else {
                slot.min(OTP_LENGTH - 1)
            }
        }
        OtpInput::Keypad(KeypadKey::Input(c)) => match buffer.first_empty() {
            Some(slot) => keystroke(buffer, slot, &c.to_string()),
            // Full buffer: the press is ignored
            None => buffer.focus_cursor(),
        },
        OtpInput::Keypad(KeypadKey::Delete) => {
            match buffer.first_empty() {
                // Entirely empty: the target would resolve below zero
                Some(0) => 0,
                Some(first_empty) => {
                    buffer.clear(first_empty - 1);
                    first_empty - 1
                }
                // Entirely full: the last slot is the target
                None => {
                    buffer.clear(OTP_LENGTH - 1);
                    OTP_LENGTH - 1
                }
            }
        }
    }
}

fn keystroke(buffer: &mut DigitBuffer, slot: usize, value: &str) -> usize {
    if slot >= OTP_LENGTH {
        return buffer.focus_cursor();
    }
    let wrote = buffer.set(slot, value);
    if wrote && !value.is_empty() && slot + 1 < OTP_LENGTH {
        slot + 1
    } else {
        slot
    }
}
