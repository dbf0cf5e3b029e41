//! Errors raised by password generation.

use thiserror::Error;

/// Failures of the password generator.
///
/// Only two things can go wrong: the request is too short to hold every
/// required character class, or the operating system refused to hand out
/// entropy. Anything else is a bug.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested length is below the minimum for the requested classes.
    #[error("password length must be at least {min} (got {length})")]
    Validation { length: usize, min: usize },

    /// The secure random source could not supply a value.
    #[error("secure random source failed: {0}")]
    EntropySource(#[from] rand::Error),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    pub fn is_entropy(&self) -> bool {
        matches!(self, Error::EntropySource(_))
    }
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
