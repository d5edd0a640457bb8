#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use medibook_core::{KeypadKey, OtpEntry, OtpInput, OTP_LENGTH};

#[derive(Arbitrary, Debug)]
enum Op {
    Keystroke { slot: usize, value: String },
    Backspace { slot: usize },
    KeypadInput(char),
    KeypadDelete,
    Tick,
    Resend,
    Verify,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut entry = OtpEntry::new();

    for op in ops {
        // No sequence of inputs may panic or leave the machine inconsistent
        let focus = match op {
            Op::Keystroke { slot, value } => entry.apply(OtpInput::Keystroke { slot, value }),
            Op::Backspace { slot } => entry.apply(OtpInput::Backspace { slot }),
            Op::KeypadInput(c) => entry.apply(OtpInput::Keypad(KeypadKey::Input(c))),
            Op::KeypadDelete => entry.apply(OtpInput::Keypad(KeypadKey::Delete)),
            Op::Tick => {
                entry.tick();
                entry.focus()
            }
            Op::Resend => {
                entry.resend();
                entry.focus()
            }
            Op::Verify => {
                let _ = entry.verify();
                entry.focus()
            }
        };

        assert!(focus < OTP_LENGTH);
        assert_eq!(
            entry.buffer().is_complete(),
            entry.buffer().filled_count() == OTP_LENGTH
        );
        assert_eq!(entry.buffer().code().is_some(), entry.buffer().is_complete());
    }
});
