//! Mock authentication collaborator
//!
//! The login and verification screens talk to an `Authenticator`; the only
//! implementation is a mock that accepts everything well-formed. The trait
//! still carries the failure path so the screens (and their tests) handle a
//! rejected code by re-prompting without clearing the buffer.

use tracing::info;

/// Captured login form fields. Nothing validates them beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn is_filled(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// External authentication collaborator
pub trait Authenticator {
    /// Sign-in attempt with captured form fields.
    fn sign_in(&self, credentials: &Credentials) -> bool;

    /// Outcome of a verification attempt for a complete code.
    fn verify_code(&self, code: &str) -> bool;

    /// Ask for a fresh code to be sent.
    fn resend_code(&self);
}

/// Accepts any filled-in credentials and, by default, any complete code.
///
/// A fixed expected code can be set to exercise the rejection path.
#[derive(Debug, Clone, Default)]
pub struct MockAuthenticator {
    expected_code: Option<String>,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only `code` will verify; everything else is rejected.
    pub fn with_expected_code(code: impl Into<String>) -> Self {
        Self {
            expected_code: Some(code.into()),
        }
    }
}

impl Authenticator for MockAuthenticator {
    fn sign_in(&self, credentials: &Credentials) -> bool {
        let accepted = credentials.is_filled();
        info!(email = %credentials.email, accepted, "sign-in attempt");
        accepted
    }

    fn verify_code(&self, code: &str) -> bool {
        let accepted = match &self.expected_code {
            Some(expected) => code == expected,
            None => true,
        };
        info!(accepted, "verification attempt");
        accepted
    }

    fn resend_code(&self) {
        info!("verification code resent");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_requires_both_fields() {
        let auth = MockAuthenticator::new();
        assert!(!auth.sign_in(&Credentials::default()));
        assert!(!auth.sign_in(&Credentials {
            email: "priya@example.com".to_string(),
            password: String::new(),
        }));
        assert!(auth.sign_in(&Credentials {
            email: "priya@example.com".to_string(),
            password: "secret".to_string(),
        }));
    }

    #[test]
    fn default_mock_accepts_any_code() {
        let auth = MockAuthenticator::new();
        assert!(auth.verify_code("1234"));
        assert!(auth.verify_code("0000"));
    }

    #[test]
    fn expected_code_rejects_everything_else() {
        let auth = MockAuthenticator::with_expected_code("4321");
        assert!(!auth.verify_code("1234"));
        assert!(auth.verify_code("4321"));
    }
}
