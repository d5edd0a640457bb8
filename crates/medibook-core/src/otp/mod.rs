//! One-time passcode entry state machine
//!
//! The verification screen is driven entirely by this module: a four-slot
//! digit buffer, an input router that maps keystrokes and virtual keypad
//! presses onto the buffer, and a countdown that gates the resend action.
//! The UI applies the focus index the router returns; it never computes
//! focus on its own.

mod buffer;
mod countdown;
mod router;

pub use buffer::DigitBuffer;
pub use countdown::ResendCountdown;
pub use router::{route, KeypadKey, OtpInput};

use crate::error::{Error, Result};
use crate::OTP_LENGTH;

/// Aggregate state for one visit to the verification screen.
///
/// Created when the screen is entered and dropped when it is left; nothing
/// here survives navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpEntry {
    buffer: DigitBuffer,
    countdown: ResendCountdown,
}

impl OtpEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &DigitBuffer {
        &self.buffer
    }

    pub fn countdown(&self) -> &ResendCountdown {
        &self.countdown
    }

    /// Route one input event into the buffer and return the slot index that
    /// should receive focus afterwards.
    pub fn apply(&mut self, input: OtpInput) -> usize {
        route(&mut self.buffer, input)
    }

    /// Advance the resend countdown by one second.
    ///
    /// Returns true on the single tick that makes resend available.
    pub fn tick(&mut self) -> bool {
        self.countdown.tick()
    }

    /// Request a fresh code.
    ///
    /// Only permitted once the countdown has expired; a successful resend
    /// clears every slot, restarts the countdown, and returns true so the
    /// caller can surface the "code resent" notice. While the countdown is
    /// still running this is a no-op.
    pub fn resend(&mut self) -> bool {
        if !self.countdown.is_resendable() {
            return false;
        }
        self.buffer.reset();
        self.countdown.restart();
        true
    }

    /// Validate completeness and produce the entered code.
    ///
    /// An incomplete buffer is reported without being modified; the user
    /// keeps what they typed.
    pub fn verify(&self) -> Result<String> {
        self.buffer.code().ok_or(Error::IncompleteCode {
            filled: self.buffer.filled_count(),
            expected: OTP_LENGTH,
        })
    }

    /// The slot the next keystroke should land in.
    pub fn focus(&self) -> usize {
        self.buffer.focus_cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with(digits: &[&str]) -> OtpEntry {
        let mut entry = OtpEntry::new();
        for (i, d) in digits.iter().enumerate() {
            entry.apply(OtpInput::Keystroke {
                slot: i,
                value: (*d).to_string(),
            });
        }
        entry
    }

    #[test]
    fn verify_rejects_incomplete_code_and_keeps_buffer() {
        let entry = entry_with(&["1", "2", "3", ""]);
        let err = entry.verify().unwrap_err();
        assert_eq!(
            err,
            Error::IncompleteCode {
                filled: 3,
                expected: 4
            }
        );
        // Buffer untouched by the failed attempt
        assert_eq!(entry.buffer().slot(0), Some('1'));
        assert_eq!(entry.buffer().slot(2), Some('3'));
        assert_eq!(entry.buffer().slot(3), None);
    }

    #[test]
    fn verify_yields_complete_code() {
        let entry = entry_with(&["1", "2", "3", "4"]);
        assert_eq!(entry.verify().unwrap(), "1234");
    }

    #[test]
    fn keypad_presses_fill_left_to_right() {
        let mut entry = OtpEntry::new();
        entry.apply(OtpInput::Keypad(KeypadKey::Input('5')));
        let focus = entry.apply(OtpInput::Keypad(KeypadKey::Input('6')));
        assert_eq!(entry.buffer().slot(0), Some('5'));
        assert_eq!(entry.buffer().slot(1), Some('6'));
        assert_eq!(entry.buffer().slot(2), None);
        assert_eq!(focus, 2);
    }

    #[test]
    fn keypad_delete_clears_last_filled_slot() {
        let mut entry = OtpEntry::new();
        entry.apply(OtpInput::Keypad(KeypadKey::Input('5')));
        entry.apply(OtpInput::Keypad(KeypadKey::Input('6')));
        entry.apply(OtpInput::Keypad(KeypadKey::Delete));
        assert_eq!(entry.buffer().slot(0), Some('5'));
        assert_eq!(entry.buffer().slot(1), None);
    }

    #[test]
    fn resend_is_gated_until_countdown_expires() {
        let mut entry = entry_with(&["1", "2", "3", "4"]);
        assert!(!entry.resend());
        // The failed resend leaves the code alone
        assert_eq!(entry.verify().unwrap(), "1234");

        for _ in 0..crate::RESEND_COOLDOWN_SECS {
            entry.tick();
        }
        assert!(entry.resend());
        assert!(entry.buffer().is_empty());
        assert!(!entry.countdown().is_resendable());
        assert_eq!(
            entry.countdown().seconds_remaining(),
            crate::RESEND_COOLDOWN_SECS
        );
    }

    #[test]
    fn wildcard_key_is_stored_verbatim() {
        // The star key routes like any digit; the buffer does not validate.
        let mut entry = OtpEntry::new();
        entry.apply(OtpInput::Keypad(KeypadKey::Input('*')));
        assert_eq!(entry.buffer().slot(0), Some('*'));
    }
}
