//! Unbiased bounded draws.

use rand::RngCore;

use crate::error::Result;

/// Draw a uniform integer in `[0, bound)` from `rng`.
///
/// Reads whole 64-bit words with `try_fill_bytes` so a failing source surfaces
/// as an error instead of a panic. Words at or above the largest multiple of
/// `bound` are rejected and redrawn, which removes modulo bias.
pub fn uniform_below<R: RngCore + ?Sized>(rng: &mut R, bound: usize) -> Result<usize> {
    assert!(bound > 0, "uniform_below: bound must be positive");

    let bound = bound as u64;
    let zone = u64::MAX - (u64::MAX % bound);
    let mut word = [0u8; 8];

    loop {
        rng.try_fill_bytes(&mut word)?;
        let v = u64::from_le_bytes(word);
        if v < zone {
            return Ok((v % bound) as usize);
        }
    }
}
