//! Random password generation with guaranteed character-class diversity.
//!
//! Passwords are drawn from four fixed alphabets (uppercase, lowercase,
//! digits and an optional punctuation set) with the look-alike characters
//! `0 O I l 1` removed. Every password carries at least one character from
//! each requested class, and every random value comes from the operating
//! system CSPRNG.
//!
//! ```no_run
//! let password = passgen::generate(16, true)?;
//! assert_eq!(password.len(), 16);
//! # Ok::<(), passgen::Error>(())
//! ```

pub mod entropy;
mod error;
pub mod pass;

pub use error::{Error, Result};
pub use pass::{CharClass, Request, generate, generate_batch, generate_with};
