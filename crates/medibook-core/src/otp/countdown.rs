//! Resend countdown
//!
//! A fresh code can only be requested once the countdown has run out. The
//! caller drives `tick` from its own one-second timer; this type never
//! schedules anything itself, which keeps it testable without a clock.

use serde::{Deserialize, Serialize};

use crate::RESEND_COOLDOWN_SECS;

/// Countdown state: either counting (seconds > 0) or resendable (0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendCountdown {
    seconds_remaining: u32,
    resend_allowed: bool,
}

impl Default for ResendCountdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ResendCountdown {
    /// Start counting from the full cooldown.
    pub fn new() -> Self {
        Self {
            seconds_remaining: RESEND_COOLDOWN_SECS,
            resend_allowed: false,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_resendable(&self) -> bool {
        self.resend_allowed
    }

    /// Advance by one elapsed second.
    ///
    /// Returns true exactly once: on the tick that reaches zero and flips
    /// the resend gate open. Ticks after expiry are no-ops.
    pub fn tick(&mut self) -> bool {
        if self.seconds_remaining == 0 {
            return false;
        }
        self.seconds_remaining -= 1;
        if self.seconds_remaining == 0 {
            self.resend_allowed = true;
            return true;
        }
        false
    }

    /// Return to the counting state with the full cooldown.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_exactly_the_cooldown() {
        let mut countdown = ResendCountdown::new();
        for tick in 1..RESEND_COOLDOWN_SECS {
            let expired = countdown.tick();
            assert!(!expired, "tick {} should not expire the countdown", tick);
            assert!(!countdown.is_resendable());
        }
        assert!(countdown.tick());
        assert!(countdown.is_resendable());
        assert_eq!(countdown.seconds_remaining(), 0);
    }

    #[test]
    fn ticks_after_expiry_are_inert() {
        let mut countdown = ResendCountdown::new();
        for _ in 0..RESEND_COOLDOWN_SECS {
            countdown.tick();
        }
        assert!(!countdown.tick());
        assert!(countdown.is_resendable());
        assert_eq!(countdown.seconds_remaining(), 0);
    }

    #[test]
    fn restart_closes_the_gate() {
        let mut countdown = ResendCountdown::new();
        for _ in 0..RESEND_COOLDOWN_SECS {
            countdown.tick();
        }
        countdown.restart();
        assert!(!countdown.is_resendable());
        assert_eq!(countdown.seconds_remaining(), RESEND_COOLDOWN_SECS);
    }
}
