//! Secure random source.
//!
//! Every draw the generator makes goes through [`SecureRandom`]. The trait is
//! implemented for any generator that is both [`RngCore`] and [`CryptoRng`],
//! so statistical PRNGs cannot be plugged in by accident. Production code uses
//! [`OsRng`], which reads the platform CSPRNG on every call and holds no state
//! of its own, so it is safe to use from any number of threads.

mod uniform;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::Result;

pub use uniform::uniform_below;

/// Uniform integers in `[0, bound)` from a cryptographically secure source.
pub trait SecureRandom {
    /// Draw an integer in `[0, bound)`, each value equally likely.
    ///
    /// Fails with [`Error::EntropySource`](crate::Error::EntropySource) when the
    /// underlying source cannot produce bytes. Panics if `bound` is zero.
    fn uniform(&mut self, bound: usize) -> Result<usize>;
}

impl<R: RngCore + CryptoRng + ?Sized> SecureRandom for R {
    #[inline]
    fn uniform(&mut self, bound: usize) -> Result<usize> {
        uniform_below(self, bound)
    }
}

/// The production source: the operating system CSPRNG.
#[inline]
pub fn os() -> OsRng {
    OsRng
}

/// Human-readable name of the production entropy source.
pub fn source_name() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "getrandom(2)"
    }
    #[cfg(target_os = "macos")]
    {
        "getentropy(2)"
    }
    #[cfg(windows)]
    {
        "ProcessPrng"
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
    {
        "OS CSPRNG"
    }
}
