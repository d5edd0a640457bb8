//! Four-slot passcode buffer

use serde::{Deserialize, Serialize};

use crate::OTP_LENGTH;

/// Holds the characters entered so far, one per slot.
///
/// Slots normally fill left to right, but every operation tolerates
/// out-of-order mutation; nothing here assumes a contiguous prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitBuffer {
    slots: [Option<char>; OTP_LENGTH],
}

impl DigitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` into a slot.
    ///
    /// Accepts a single character or the empty string (which clears the
    /// slot). Inputs longer than one character and out-of-range indices are
    /// rejected without touching the buffer. Returns whether a write
    /// happened.
    pub fn set(&mut self, index: usize, value: &str) -> bool {
        if index >= OTP_LENGTH {
            return false;
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.slots[index] = None;
                true
            }
            (Some(c), None) => {
                self.slots[index] = Some(c);
                true
            }
            // More than one character: reject
            _ => false,
        }
    }

    /// Empty a slot. Out-of-range indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if index < OTP_LENGTH {
            self.slots[index] = None;
        }
    }

    /// The character held at `index`, if any.
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// All slots in order, for rendering.
    pub fn slots(&self) -> &[Option<char>; OTP_LENGTH] {
        &self.slots
    }

    /// True iff every slot is filled, in whatever order that happened.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// True iff no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// The slots concatenated in order; defined only for a complete buffer.
    pub fn code(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        Some(self.slots.iter().flatten().collect())
    }

    /// Lowest empty slot index, or `None` when the buffer is full.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// The slot that should receive the next keystroke: the first empty
    /// slot, or the last slot when none are empty.
    pub fn focus_cursor(&self) -> usize {
        self.first_empty().unwrap_or(OTP_LENGTH - 1)
    }

    /// Clear every slot.
    pub fn reset(&mut self) {
        self.slots = [None; OTP_LENGTH];
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn set_rejects_multi_character_input() {
        let mut buffer = DigitBuffer::new();
        assert!(!buffer.set(0, "12"));
        assert_eq!(buffer.slot(0), None);
    }

    #[test]
    fn set_with_empty_string_clears() {
        let mut buffer = DigitBuffer::new();
        buffer.set(0, "7");
        assert!(buffer.set(0, ""));
        assert_eq!(buffer.slot(0), None);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut buffer = DigitBuffer::new();
        assert!(!buffer.set(OTP_LENGTH, "1"));
        buffer.clear(OTP_LENGTH + 3);
        assert!(buffer.is_empty());
    }

    #[test]
    fn code_is_defined_only_when_complete() {
        let mut buffer = DigitBuffer::new();
        buffer.set(0, "1");
        buffer.set(1, "2");
        buffer.set(2, "3");
        assert_eq!(buffer.code(), None);
        buffer.set(3, "4");
        assert_eq!(buffer.code().as_deref(), Some("1234"));
    }

    #[test]
    fn focus_cursor_tracks_first_empty_slot() {
        let mut buffer = DigitBuffer::new();
        assert_eq!(buffer.focus_cursor(), 0);
        buffer.set(0, "5");
        buffer.set(1, "6");
        assert_eq!(buffer.focus_cursor(), 2);
        buffer.set(2, "7");
        buffer.set(3, "8");
        // Full buffer pins focus to the last slot
        assert_eq!(buffer.focus_cursor(), 3);
    }

    #[test]
    fn out_of_order_fill_still_completes() {
        let mut buffer = DigitBuffer::new();
        buffer.set(3, "4");
        buffer.set(0, "1");
        buffer.set(2, "3");
        assert!(!buffer.is_complete());
        buffer.set(1, "2");
        assert!(buffer.is_complete());
        assert_eq!(buffer.code().as_deref(), Some("1234"));
    }

    proptest! {
        /// For any sequence of writes and clears, completeness means exactly
        /// "all four slots are non-empty" - write order never matters.
        #[test]
        fn completeness_matches_filled_slots(
            ops in prop::collection::vec((0usize..6, prop::option::of(any::<char>())), 0..32)
        ) {
            let mut buffer = DigitBuffer::new();
            for (index, value) in ops {
                match value {
                    Some(c) => {
                        buffer.set(index, &c.to_string());
                    }
                    None => buffer.clear(index),
                }
            }
            prop_assert_eq!(buffer.is_complete(), buffer.filled_count() == OTP_LENGTH);
            prop_assert_eq!(buffer.code().is_some(), buffer.is_complete());
            prop_assert!(buffer.focus_cursor() < OTP_LENGTH);
        }
    }
}
