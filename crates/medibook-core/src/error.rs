//! Error types for the MediBook core library

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Verification was requested before all passcode slots were filled
    #[error("Please enter all {expected} digits")]
    IncompleteCode { filled: usize, expected: usize },
}
